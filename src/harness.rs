//! Warmup plus timed iterations of one matrix product on one device.

use std::time::{Duration, Instant};

use crate::{devices::Device, error::BenchError, Engine, Tensor};

/// The operation this harness measures; also the CSV operation tag.
pub const OPERATION: &str = "dot";

/// Outcome of one harness invocation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimingResult {
    pub operation: &'static str,
    pub device: Device,
    /// Mean wall-clock latency of one timed iteration, in milliseconds.
    pub avg_ms: f64,
    /// Sum reduction of the first timed iteration's product.
    pub checksum: f32,
}

/// Runs `warmup` untimed and `iterations` timed products `a · b`,
/// returning the mean latency and the first-iteration checksum.
///
/// Elapsed time accumulates as a [`Duration`] and becomes milliseconds
/// only in the final division. The checksum read sits outside the timed
/// window; since the engine's product blocks until device completion,
/// each window covers exactly one full product and nothing else.
pub fn run(
    engine: &Engine,
    device: Device,
    a: &Tensor,
    b: &Tensor,
    warmup: usize,
    iterations: usize,
) -> crate::Result<TimingResult> {
    if iterations == 0 {
        return Err(BenchError::InvalidIterations(iterations).into());
    }

    for i in 0..warmup {
        engine
            .matmul(a, b)
            .map_err(|e| exec_failure(device, i, "warmup product", e))?;
    }

    let mut total = Duration::ZERO;
    let mut checksum = 0.0;
    for i in 0..iterations {
        let start = Instant::now();
        let c = engine
            .matmul(a, b)
            .map_err(|e| exec_failure(device, i, "product", e))?;
        total += start.elapsed();

        if i == 0 {
            checksum = engine
                .sum(&c)
                .map_err(|e| exec_failure(device, i, "checksum reduction", e))?;
        }
    }

    Ok(TimingResult {
        operation: OPERATION,
        device,
        avg_ms: total.as_secs_f64() * 1e3 / iterations as f64,
        checksum,
    })
}

fn exec_failure(device: Device, iteration: usize, what: &str, err: crate::Error) -> crate::Error {
    BenchError::ExecutionFailure {
        device,
        iteration,
        reason: format!("{what}: {err}"),
    }
    .into()
}
