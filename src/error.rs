use crate::devices::Device;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub trait ErrorKind {
    fn kind<E: std::error::Error + PartialEq + 'static>(&self) -> Option<&E>;
}

impl ErrorKind for Error {
    fn kind<E: std::error::Error + PartialEq + 'static>(&self) -> Option<&E> {
        self.downcast_ref::<E>()
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Failure kinds raised by the backends themselves.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EngineError {
    NoAdapter,
    NoAccelContext,
    ShapeMismatch,
    DeviceMismatch,
    BufferRead,
}

impl EngineError {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineError::NoAdapter => "No suitable WGPU adapter was returned.",
            EngineError::NoAccelContext => {
                "No accelerator context is available on this engine."
            }
            EngineError::ShapeMismatch => "The inner dimensions of the operands do not match.",
            EngineError::DeviceMismatch => "Both operands must live on the same device.",
            EngineError::BufferRead => "Reading a device buffer back to the host failed.",
        }
    }
}

impl core::fmt::Debug for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for EngineError {}

/// Failure kinds raised by the benchmark layers on top of the engine.
///
/// `InvalidDimension`, `InvalidIterations` and `DeviceResolutionFailure` are
/// fatal before any timing begins. `ExecutionFailure` aborts the run it
/// happened in. `SinkWriteFailure` is recovered by the caller.
#[derive(Clone, PartialEq)]
pub enum BenchError {
    InvalidDimension(usize),
    InvalidIterations(usize),
    DeviceResolutionFailure(String),
    ExecutionFailure {
        device: Device,
        iteration: usize,
        reason: String,
    },
    SinkWriteFailure(String),
}

impl core::fmt::Display for BenchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BenchError::InvalidDimension(n) => {
                write!(f, "matrix dimension must be positive, got {n}")
            }
            BenchError::InvalidIterations(iters) => {
                write!(f, "timed iteration count must be at least 1, got {iters}")
            }
            BenchError::DeviceResolutionFailure(name) => {
                write!(f, "engine '{name}' is not supported by this build")
            }
            BenchError::ExecutionFailure {
                device,
                iteration,
                reason,
            } => {
                write!(f, "execution failed on {device} at iteration {iteration}: {reason}")
            }
            BenchError::SinkWriteFailure(msg) => write!(f, "CSV append failed: {msg}"),
        }
    }
}

impl core::fmt::Debug for BenchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for BenchError {}
