use std::path::PathBuf;

use crate::error::BenchError;

/// Which device the user asked for. `Auto` and `Gpu` both fall back to the
/// CPU when no accelerator is present; only `Auto` triggers the
/// cross-device comparison run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DeviceRequest {
    #[default]
    Auto,
    Cpu,
    Gpu,
}

impl core::str::FromStr for DeviceRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(DeviceRequest::Auto),
            "cpu" => Ok(DeviceRequest::Cpu),
            "gpu" => Ok(DeviceRequest::Gpu),
            other => Err(format!(
                "unknown device request '{other}', expected auto, cpu or gpu"
            )),
        }
    }
}

impl core::fmt::Display for DeviceRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            DeviceRequest::Auto => "auto",
            DeviceRequest::Cpu => "cpu",
            DeviceRequest::Gpu => "gpu",
        };
        write!(f, "{name}")
    }
}

/// One benchmark invocation, built from the CLI and immutable afterwards.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchConfig {
    /// Side length of the square `n × n` inputs.
    pub n: usize,
    /// Untimed iterations run before measurement starts.
    pub warmup: usize,
    /// Timed iterations; the reported latency is their mean.
    pub iterations: usize,
    pub device_request: DeviceRequest,
    /// Backend name the engine was forced to, if any. Takes the engine's
    /// place in the config echo and the CSV engine column.
    pub forced_engine: Option<String>,
    /// Seed for the pseudo-random data mode. Ignored while `use_pattern`
    /// is set.
    pub seed: u64,
    /// Arithmetic pattern tensors (the default) instead of seeded
    /// pseudo-random data.
    pub use_pattern: bool,
    /// Append one CSV row here after the primary run.
    pub csv_path: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            n: 4096,
            warmup: 10,
            iterations: 50,
            device_request: DeviceRequest::Auto,
            forced_engine: None,
            seed: 42,
            use_pattern: true,
            csv_path: None,
        }
    }
}

impl BenchConfig {
    /// Checks the invariants every run relies on: `n > 0` and
    /// `iterations > 0`.
    pub fn validate(&self) -> crate::Result<()> {
        if self.n == 0 {
            return Err(BenchError::InvalidDimension(self.n).into());
        }
        if self.iterations == 0 {
            return Err(BenchError::InvalidIterations(self.iterations).into());
        }
        Ok(())
    }
}
