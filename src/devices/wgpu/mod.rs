mod context;
mod launch;
mod ops;
mod pipeline_cache;

pub use context::*;
pub use launch::*;
pub use ops::*;
pub use pipeline_cache::*;

#[cfg(test)]
mod tests {
    use super::WgpuContext;

    #[test]
    fn test_upload_readback() -> crate::Result<()> {
        let Ok(ctx) = WgpuContext::new(wgpu::Backends::all()) else {
            println!("no wgpu adapter available, skipping");
            return Ok(());
        };

        let buf = ctx.storage_from_slice(&[4.0, -1.2, 2.0, 1.0, 3.0]);
        assert_eq!(ctx.read_to_vec(&buf)?, vec![4.0, -1.2, 2.0, 1.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_arange_kernel() -> crate::Result<()> {
        let Ok(ctx) = WgpuContext::new(wgpu::Backends::all()) else {
            println!("no wgpu adapter available, skipping");
            return Ok(());
        };

        let buf = super::arange(&ctx, 70);
        let vals = ctx.read_to_vec(&buf)?;
        assert_eq!(vals.len(), 70);
        for (i, v) in vals.iter().enumerate() {
            assert_eq!(*v, i as f32);
        }
        Ok(())
    }
}
