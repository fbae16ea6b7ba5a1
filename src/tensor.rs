use crate::devices::Device;

/// A dense, row-major `rows × cols` array of `f32` values living on one
/// compute device.
///
/// Tensors are created through an [`Engine`](crate::Engine) and carry no
/// reference to it; ops take the engine explicitly.
///
/// # Example
/// ```
/// use dotbench::{Device, Engine};
///
/// fn main() -> dotbench::Result<()> {
///     let engine = Engine::host();
///     let t = engine.tensor_from(Device::Cpu, vec![0.0; 6], (2, 3))?;
///
///     assert_eq!(t.dims(), (2, 3));
///     assert_eq!(t.size(), 6);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Tensor {
    pub(crate) data: Storage,
    dims: (usize, usize),
}

#[derive(Debug)]
pub(crate) enum Storage {
    Host(Vec<f32>),
    #[cfg(feature = "wgpu")]
    Accel(wgpu::Buffer),
}

impl Tensor {
    pub(crate) fn new(data: Storage, dims: (usize, usize)) -> Tensor {
        Tensor { data, dims }
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        self.dims
    }

    /// Returns the row count of the tensor.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.0
    }

    /// Returns the column count of the tensor.
    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.1
    }

    /// Returns the number of elements: rows * cols.
    #[inline]
    pub fn size(&self) -> usize {
        self.dims.0 * self.dims.1
    }

    /// The device this tensor's storage lives on.
    pub fn device(&self) -> Device {
        match &self.data {
            Storage::Host(_) => Device::Cpu,
            #[cfg(feature = "wgpu")]
            Storage::Accel(_) => Device::Accel(0),
        }
    }
}
