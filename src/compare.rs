//! Runs the configured benchmark end to end: primary device, console and
//! CSV reporting, and the auto-mode comparison run.

use crate::{
    config::{BenchConfig, DeviceRequest},
    devices::Device,
    generate,
    harness::{self, TimingResult},
    resolve,
    sink::{self, CsvRow},
    Engine,
};

/// Resolves the primary device, benches it, reports, and in auto mode
/// benches the complementary device for the speedup line. Returns the
/// primary result.
///
/// A CSV append failure is logged and swallowed; a failure in the
/// secondary run propagates, but only after the primary result has been
/// fully reported.
pub fn run(engine: &Engine, cfg: &BenchConfig) -> crate::Result<TimingResult> {
    cfg.validate()?;

    let device = resolve::resolve(engine, cfg.device_request);
    // a forced engine is reported under the name it was requested as
    let engine_label = cfg.forced_engine.as_deref().unwrap_or_else(|| engine.name());
    println!(
        "Engine={engine_label}  Device={}  N={}  warmup={}  iters={}",
        device, cfg.n, cfg.warmup, cfg.iterations
    );

    let primary = bench_device(engine, device, cfg)?;
    println!("Checksum({}): {:.4}", primary.device, primary.checksum);
    println!("Avg: {:.2} ms", primary.avg_ms);

    if let Some(path) = &cfg.csv_path {
        let row = CsvRow {
            operation: primary.operation,
            engine: engine_label,
            device: primary.device,
            n: cfg.n,
            warmup: cfg.warmup,
            iterations: cfg.iterations,
            avg_ms: primary.avg_ms,
        };
        if let Err(err) = sink::append(path, &row) {
            log::warn!("{err}");
        }
    }

    if cfg.device_request == DeviceRequest::Auto {
        let other = resolve::complement_of(engine, device);
        if other != device {
            let secondary = bench_device(engine, other, cfg)?;
            println!("Checksum({}): {:.4}", secondary.device, secondary.checksum);

            let (fast, slow) = if primary.avg_ms <= secondary.avg_ms {
                (primary.avg_ms, secondary.avg_ms)
            } else {
                (secondary.avg_ms, primary.avg_ms)
            };
            println!(
                "Other({}) Avg: {:.2} ms  | Speedup: {:.2}x",
                other,
                secondary.avg_ms,
                slow / fast
            );
        }
    }

    Ok(primary)
}

/// Generates the inputs on `device` and times the product there. Inputs
/// and outputs drop together when this returns, so the two runs of an auto
/// comparison never hold device memory at the same time.
fn bench_device(engine: &Engine, device: Device, cfg: &BenchConfig) -> crate::Result<TimingResult> {
    let (a, b) = generate::pair(engine, device, cfg)?;
    log::debug!("input tensors {}x{} on {}", a.rows(), a.cols(), device);
    harness::run(engine, device, &a, &b, cfg.warmup, cfg.iterations)
}
