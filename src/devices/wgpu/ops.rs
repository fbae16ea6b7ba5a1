//! WGSL kernels for the tensor operations. Dimensions are baked into each
//! source as shader constants; the per-run dimension set is tiny, so every
//! kernel hits the pipeline cache after its first dispatch.

use super::{launch_kernel, WgpuContext};

/// Lanes per workgroup for the 1D kernels.
const WG_1D: usize = 64;
/// Lanes per side per workgroup for the 2D kernels.
const WG_2D: usize = 16;
/// WebGPU's baseline `max_compute_workgroups_per_dimension`.
const MAX_WG_PER_DIM: usize = 65_535;

/// Splits `groups` workgroups over x and y so neither dimension exceeds
/// the baseline dispatch limit. A 4096² buffer already needs 262,144
/// 64-lane groups, which adapters granting only the WebGPU minimum reject
/// when dispatched along a single dimension.
fn grid_1d(groups: usize) -> [u32; 3] {
    let x = groups.clamp(1, MAX_WG_PER_DIM);
    [x as u32, groups.div_ceil(x) as u32, 1]
}

/// `dst[i] = f32(i)` for `i < len`.
pub fn arange(ctx: &WgpuContext, len: usize) -> wgpu::Buffer {
    let dst = ctx.storage_empty(len);
    let grid = grid_1d(len.div_ceil(WG_1D));
    let row = grid[0] as usize * WG_1D;
    let src = format!(
        "@group(0) @binding(0)
        var<storage, read_write> dst: array<f32>;

        const LEN: u32 = {len}u;
        const ROW: u32 = {row}u;

        @compute
        @workgroup_size({WG_1D})
        fn main(@builtin(global_invocation_id) gid: vec3<u32>) {{
            let i = gid.y * ROW + gid.x;
            if (i >= LEN) {{
                return;
            }}
            dst[i] = f32(i);
        }}
        "
    );

    launch_kernel(ctx, &src, grid, &[&dst]);
    ctx.device.poll(wgpu::Maintain::Wait);
    dst
}

pub fn add_scalar(ctx: &WgpuContext, buf: &wgpu::Buffer, len: usize, rhs: f32) -> wgpu::Buffer {
    map_scalar(ctx, buf, len, '+', rhs)
}

pub fn div_scalar(ctx: &WgpuContext, buf: &wgpu::Buffer, len: usize, rhs: f32) -> wgpu::Buffer {
    map_scalar(ctx, buf, len, '/', rhs)
}

fn map_scalar(
    ctx: &WgpuContext,
    buf: &wgpu::Buffer,
    len: usize,
    op: char,
    rhs: f32,
) -> wgpu::Buffer {
    let dst = ctx.storage_empty(len);
    let grid = grid_1d(len.div_ceil(WG_1D));
    let row = grid[0] as usize * WG_1D;
    let src = format!(
        "@group(0) @binding(0)
        var<storage, read> src: array<f32>;
        @group(0) @binding(1)
        var<storage, read_write> dst: array<f32>;

        const LEN: u32 = {len}u;
        const ROW: u32 = {row}u;

        @compute
        @workgroup_size({WG_1D})
        fn main(@builtin(global_invocation_id) gid: vec3<u32>) {{
            let i = gid.y * ROW + gid.x;
            if (i >= LEN) {{
                return;
            }}
            dst[i] = src[i] {op} {rhs:?};
        }}
        "
    );

    launch_kernel(ctx, &src, grid, &[buf, &dst]);
    ctx.device.poll(wgpu::Maintain::Wait);
    dst
}

/// Transposes a row-major `rows × cols` buffer into a `cols × rows` one.
pub fn transpose(ctx: &WgpuContext, buf: &wgpu::Buffer, rows: usize, cols: usize) -> wgpu::Buffer {
    let dst = ctx.storage_empty(rows * cols);
    let src = format!(
        "@group(0) @binding(0)
        var<storage, read> src: array<f32>;
        @group(0) @binding(1)
        var<storage, read_write> dst: array<f32>;

        const R: u32 = {rows}u;
        const C: u32 = {cols}u;

        @compute
        @workgroup_size({WG_2D}, {WG_2D})
        fn main(@builtin(global_invocation_id) gid: vec3<u32>) {{
            let r = gid.y;
            let c = gid.x;
            if (r >= R || c >= C) {{
                return;
            }}
            dst[c * R + r] = src[r * C + c];
        }}
        "
    );

    launch_kernel(
        ctx,
        &src,
        [cols.div_ceil(WG_2D) as u32, rows.div_ceil(WG_2D) as u32, 1],
        &[buf, &dst],
    );
    ctx.device.poll(wgpu::Maintain::Wait);
    dst
}

/// Naive one-thread-per-output-cell product of row-major `m × k` and
/// `k × n` buffers. Blocks until the device has finished.
pub fn matmul(
    ctx: &WgpuContext,
    lhs: &wgpu::Buffer,
    rhs: &wgpu::Buffer,
    m: usize,
    k: usize,
    n: usize,
) -> wgpu::Buffer {
    let dst = ctx.storage_empty(m * n);
    let src = format!(
        "@group(0) @binding(0)
        var<storage, read> lhs: array<f32>;
        @group(0) @binding(1)
        var<storage, read> rhs: array<f32>;
        @group(0) @binding(2)
        var<storage, read_write> dst: array<f32>;

        const M: u32 = {m}u;
        const K: u32 = {k}u;
        const N: u32 = {n}u;

        @compute
        @workgroup_size({WG_2D}, {WG_2D})
        fn main(@builtin(global_invocation_id) gid: vec3<u32>) {{
            let row = gid.y;
            let col = gid.x;
            if (row >= M || col >= N) {{
                return;
            }}
            var acc = 0.0;
            for (var i = 0u; i < K; i = i + 1u) {{
                acc = acc + lhs[row * K + i] * rhs[i * N + col];
            }}
            dst[row * N + col] = acc;
        }}
        "
    );

    launch_kernel(
        ctx,
        &src,
        [n.div_ceil(WG_2D) as u32, m.div_ceil(WG_2D) as u32, 1],
        &[lhs, rhs, &dst],
    );
    ctx.device.poll(wgpu::Maintain::Wait);
    dst
}

/// Tree reduction in workgroup shared memory; one partial per workgroup,
/// finished on the host. For benchmark-sized buffers the partial list stays
/// small enough that a second kernel pass is not worth its dispatch.
pub fn sum(ctx: &WgpuContext, buf: &wgpu::Buffer, len: usize) -> crate::Result<f32> {
    let groups = len.div_ceil(WG_1D);
    let grid = grid_1d(groups);
    let row = grid[0] as usize * WG_1D;
    let partial = ctx.storage_empty(groups);
    let src = format!(
        "@group(0) @binding(0)
        var<storage, read> src: array<f32>;
        @group(0) @binding(1)
        var<storage, read_write> partial: array<f32>;

        const LEN: u32 = {len}u;
        const ROW: u32 = {row}u;
        const XG: u32 = {xg}u;
        const GROUPS: u32 = {groups}u;

        var<workgroup> sdata: array<f32, {WG_1D}>;

        @compute
        @workgroup_size({WG_1D})
        fn main(
            @builtin(global_invocation_id) gid: vec3<u32>,
            @builtin(local_invocation_id) lid: vec3<u32>,
            @builtin(workgroup_id) wid: vec3<u32>,
        ) {{
            let i = gid.y * ROW + gid.x;
            if (i < LEN) {{
                sdata[lid.x] = src[i];
            }} else {{
                sdata[lid.x] = 0.0;
            }}
            workgroupBarrier();

            for (var s = {half_wg}u; s > 0u; s = s >> 1u) {{
                if (lid.x < s) {{
                    sdata[lid.x] = sdata[lid.x] + sdata[lid.x + s];
                }}
                workgroupBarrier();
            }}

            let wg = wid.y * XG + wid.x;
            if (lid.x == 0u && wg < GROUPS) {{
                partial[wg] = sdata[0];
            }}
        }}
        ",
        xg = grid[0],
        half_wg = WG_1D / 2
    );

    launch_kernel(ctx, &src, grid, &[buf, &partial]);

    let partials = ctx.read_to_vec(&partial)?;
    Ok(partials.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::{grid_1d, MAX_WG_PER_DIM, WG_1D};

    #[test]
    fn test_grid_1d_small_counts_stay_one_dimensional() {
        assert_eq!(grid_1d(1), [1, 1, 1]);
        assert_eq!(grid_1d(70), [70, 1, 1]);
        assert_eq!(grid_1d(MAX_WG_PER_DIM), [MAX_WG_PER_DIM as u32, 1, 1]);
    }

    #[test]
    fn test_grid_1d_splits_past_the_dispatch_limit() {
        // 4096 x 4096 f32 elements in 64-lane groups
        let groups = (4096usize * 4096).div_ceil(WG_1D);
        assert!(groups > MAX_WG_PER_DIM);

        let [x, y, z] = grid_1d(groups);
        assert!(x as usize <= MAX_WG_PER_DIM);
        assert!(y as usize <= MAX_WG_PER_DIM);
        assert_eq!(z, 1);
        // every group gets a workgroup
        assert!(x as usize * y as usize >= groups);
        // and at most one spare row of padding groups
        assert!(x as usize * (y as usize - 1) < groups);
    }
}
