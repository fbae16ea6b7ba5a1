//! Engine and adapter diagnostics behind the `--diag` flag.

use crate::{config::DeviceRequest, generate, resolve, Engine};

const PROBE_N: usize = 1024;
const PROBE_SEED: u64 = 42;

/// Prints the engine identity, the accelerator inventory, and the checksum
/// of a deterministic probe product on the auto-resolved device.
pub fn print_report(engine: &Engine) -> crate::Result<()> {
    println!("== Compute diagnostics ==");
    println!("Engine: {}", engine.name());
    println!("Engine version: {}", env!("CARGO_PKG_VERSION"));
    println!("Accelerators: {}", engine.accelerator_count());

    let device = resolve::resolve(engine, DeviceRequest::Auto);
    println!("Using device: {device}");

    let (a, b) = generate::seeded_pair(engine, device, PROBE_N, PROBE_SEED)?;
    let c = engine.matmul(&a, &b)?;
    println!("Sum: {}", engine.sum(&c)?);

    for summary in engine.adapter_summaries() {
        println!("Adapter: {summary}");
    }
    Ok(())
}
