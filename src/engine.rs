use crate::{
    devices::{cpu, Device},
    error::{BenchError, EngineError},
    tensor::{Storage, Tensor},
};

#[cfg(feature = "wgpu")]
use crate::devices::wgpu as gpu;

/// The compute backend: an identity string plus the device handles every
/// other component works against.
///
/// An engine is constructed once per process and passed by reference. The
/// `wgpu` build is still usable on machines without an accelerator; it
/// simply reports a count of zero and serves CPU tensors only.
pub struct Engine {
    name: &'static str,
    #[cfg(feature = "wgpu")]
    accel: Option<gpu::WgpuContext>,
}

impl Engine {
    /// The default backend for this build: `wgpu` when compiled in, `host`
    /// otherwise.
    ///
    /// Accelerator discovery failures downgrade to zero accelerators
    /// instead of failing; device resolution falls back to the CPU.
    pub fn new() -> Engine {
        #[cfg(feature = "wgpu")]
        {
            let accel = match gpu::WgpuContext::new(wgpu::Backends::all()) {
                Ok(ctx) => Some(ctx),
                Err(err) => {
                    log::debug!("accelerator context unavailable: {err}");
                    None
                }
            };
            Engine {
                name: "wgpu",
                accel,
            }
        }
        #[cfg(not(feature = "wgpu"))]
        {
            Engine { name: "host" }
        }
    }

    /// Forces a backend by name. `host` works on every build; `wgpu`
    /// requires the feature to be compiled in.
    pub fn named(name: &str) -> crate::Result<Engine> {
        match name {
            "host" => Ok(Engine::host()),
            #[cfg(feature = "wgpu")]
            "wgpu" => Ok(Engine::new()),
            other => Err(BenchError::DeviceResolutionFailure(other.to_string()).into()),
        }
    }

    /// A CPU-only engine regardless of compiled features.
    pub fn host() -> Engine {
        Engine {
            name: "host",
            #[cfg(feature = "wgpu")]
            accel: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of accelerator devices the backend reports. Zero on CPU-only
    /// builds and on machines where only software adapters exist.
    pub fn accelerator_count(&self) -> usize {
        #[cfg(feature = "wgpu")]
        {
            self.accel.as_ref().map_or(0, |ctx| ctx.accel_count())
        }
        #[cfg(not(feature = "wgpu"))]
        {
            0
        }
    }

    /// Human-readable adapter descriptions for diagnostics.
    pub fn adapter_summaries(&self) -> Vec<String> {
        #[cfg(feature = "wgpu")]
        {
            self.accel
                .as_ref()
                .map(|ctx| ctx.adapter_summaries().to_vec())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "wgpu"))]
        {
            Vec::new()
        }
    }

    #[cfg(feature = "wgpu")]
    fn accel(&self) -> crate::Result<&gpu::WgpuContext> {
        self.accel
            .as_ref()
            .ok_or_else(|| EngineError::NoAccelContext.into())
    }

    /// Builds a tensor on `device` from row-major host data.
    pub fn tensor_from(
        &self,
        device: Device,
        data: Vec<f32>,
        dims: (usize, usize),
    ) -> crate::Result<Tensor> {
        if data.len() != dims.0 * dims.1 {
            return Err(EngineError::ShapeMismatch.into());
        }
        match device {
            Device::Cpu => Ok(Tensor::new(Storage::Host(data), dims)),
            #[cfg(feature = "wgpu")]
            Device::Accel(_) => {
                let ctx = self.accel()?;
                Ok(Tensor::new(
                    Storage::Accel(ctx.storage_from_slice(&data)),
                    dims,
                ))
            }
            #[cfg(not(feature = "wgpu"))]
            Device::Accel(_) => Err(EngineError::NoAccelContext.into()),
        }
    }

    /// A `rows × cols` tensor holding `0, 1, 2, …` row-major.
    pub fn arange(&self, device: Device, rows: usize, cols: usize) -> crate::Result<Tensor> {
        match device {
            Device::Cpu => Ok(Tensor::new(
                Storage::Host(cpu::arange(rows * cols)),
                (rows, cols),
            )),
            #[cfg(feature = "wgpu")]
            Device::Accel(_) => {
                let ctx = self.accel()?;
                Ok(Tensor::new(
                    Storage::Accel(gpu::arange(ctx, rows * cols)),
                    (rows, cols),
                ))
            }
            #[cfg(not(feature = "wgpu"))]
            Device::Accel(_) => Err(EngineError::NoAccelContext.into()),
        }
    }

    pub fn add_scalar(&self, t: &Tensor, rhs: f32) -> crate::Result<Tensor> {
        match &t.data {
            Storage::Host(data) => Ok(Tensor::new(
                Storage::Host(cpu::add_scalar(data, rhs)),
                t.dims(),
            )),
            #[cfg(feature = "wgpu")]
            Storage::Accel(buf) => {
                let ctx = self.accel()?;
                Ok(Tensor::new(
                    Storage::Accel(gpu::add_scalar(ctx, buf, t.size(), rhs)),
                    t.dims(),
                ))
            }
        }
    }

    pub fn div_scalar(&self, t: &Tensor, rhs: f32) -> crate::Result<Tensor> {
        match &t.data {
            Storage::Host(data) => Ok(Tensor::new(
                Storage::Host(cpu::div_scalar(data, rhs)),
                t.dims(),
            )),
            #[cfg(feature = "wgpu")]
            Storage::Accel(buf) => {
                let ctx = self.accel()?;
                Ok(Tensor::new(
                    Storage::Accel(gpu::div_scalar(ctx, buf, t.size(), rhs)),
                    t.dims(),
                ))
            }
        }
    }

    /// The transpose of `t` as a new `cols × rows` tensor on the same
    /// device.
    pub fn transpose(&self, t: &Tensor) -> crate::Result<Tensor> {
        let (rows, cols) = t.dims();
        match &t.data {
            Storage::Host(data) => Ok(Tensor::new(
                Storage::Host(cpu::transpose(rows, cols, data)),
                (cols, rows),
            )),
            #[cfg(feature = "wgpu")]
            Storage::Accel(buf) => {
                let ctx = self.accel()?;
                Ok(Tensor::new(
                    Storage::Accel(gpu::transpose(ctx, buf, rows, cols)),
                    (cols, rows),
                ))
            }
        }
    }

    /// Matrix product `lhs · rhs`. Blocks until the device has finished,
    /// so the wall clock around this call covers the whole product.
    pub fn matmul(&self, lhs: &Tensor, rhs: &Tensor) -> crate::Result<Tensor> {
        if lhs.cols() != rhs.rows() {
            return Err(EngineError::ShapeMismatch.into());
        }
        let (m, k, n) = (lhs.rows(), lhs.cols(), rhs.cols());
        match (&lhs.data, &rhs.data) {
            (Storage::Host(a), Storage::Host(b)) => {
                Ok(Tensor::new(Storage::Host(cpu::gemm(m, k, n, a, b)), (m, n)))
            }
            #[cfg(feature = "wgpu")]
            (Storage::Accel(a), Storage::Accel(b)) => {
                let ctx = self.accel()?;
                Ok(Tensor::new(
                    Storage::Accel(gpu::matmul(ctx, a, b, m, k, n)),
                    (m, n),
                ))
            }
            #[cfg(feature = "wgpu")]
            _ => Err(EngineError::DeviceMismatch.into()),
        }
    }

    /// Reduces `t` to the scalar sum of its elements.
    pub fn sum(&self, t: &Tensor) -> crate::Result<f32> {
        match &t.data {
            Storage::Host(data) => Ok(cpu::sum(data)),
            #[cfg(feature = "wgpu")]
            Storage::Accel(buf) => gpu::sum(self.accel()?, buf, t.size()),
        }
    }

    /// Copies the tensor's values back into host memory.
    pub fn read(&self, t: &Tensor) -> crate::Result<Vec<f32>> {
        match &t.data {
            Storage::Host(data) => Ok(data.clone()),
            #[cfg(feature = "wgpu")]
            Storage::Accel(buf) => self.accel()?.read_to_vec(buf),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
