//! A deterministic matrix-multiplication benchmark for host CPU and WGPU
//! compute devices.
//!
//! The crate bundles a small tensor-compute engine (a `matrixmultiply`
//! host backend plus an optional `wgpu` accelerator backend) with the
//! benchmark layers on top of it: deterministic input [generation][generate],
//! a warmup/timed-iteration [harness], device [resolution][resolve] with CPU
//! fallback, the auto cross-device [comparison][compare] and an append-only
//! CSV [sink].
//!
//! ## Example
//!
//! ```
//! use dotbench::{compare, BenchConfig, DeviceRequest, Engine};
//!
//! fn main() -> dotbench::Result<()> {
//!     let engine = Engine::new();
//!
//!     let cfg = BenchConfig {
//!         n: 64,
//!         warmup: 1,
//!         iterations: 2,
//!         device_request: DeviceRequest::Cpu,
//!         ..BenchConfig::default()
//!     };
//!
//!     let result = compare::run(&engine, &cfg)?;
//!     assert!(result.avg_ms >= 0.0);
//!     Ok(())
//! }
//! ```

pub mod compare;
pub mod config;
pub mod devices;
pub mod diag;
mod engine;
mod error;
pub mod generate;
pub mod harness;
pub mod resolve;
pub mod sink;
mod tensor;

pub use config::{BenchConfig, DeviceRequest};
pub use devices::Device;
pub use engine::Engine;
pub use error::*;
pub use harness::TimingResult;
pub use tensor::Tensor;

#[cfg(feature = "wgpu")]
pub use devices::wgpu::WgpuContext;

pub mod prelude {
    //! Typical imports for driving the benchmark from code.

    pub use crate::{
        compare, generate, harness, resolve, sink, BenchConfig, BenchError, Device, DeviceRequest,
        Engine, EngineError, Error, ErrorKind, Result, Tensor, TimingResult,
    };

    #[cfg(feature = "wgpu")]
    pub use crate::devices::wgpu::{launch_kernel, WgpuContext};
}

#[cfg(test)]
mod tests {
    use crate::{Device, Engine};

    #[test]
    fn test_roundtrip_through_engine() -> crate::Result<()> {
        let engine = Engine::host();
        let t = engine.tensor_from(Device::Cpu, vec![1.0, 2.0, 3.0], (1, 3))?;

        assert_eq!(engine.read(&t)?, vec![1.0, 2.0, 3.0]);
        assert_eq!(t.device(), Device::Cpu);
        Ok(())
    }
}
