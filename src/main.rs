use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dotbench::{compare, diag, BenchConfig, DeviceRequest, Engine};

/// Deterministic n x n matrix-multiplication benchmark for CPU and GPU
/// compute devices.
#[derive(Parser)]
#[command(name = "dotbench", version, about)]
struct Cli {
    /// Matrix size (the inputs are n x n).
    #[arg(short = 'n', long = "size", value_name = "N", default_value_t = 4096)]
    size: usize,

    /// Warmup iterations, run before timing starts.
    #[arg(short, long, value_name = "COUNT", default_value_t = 10)]
    warmup: usize,

    /// Timed iterations; the reported latency is their mean.
    #[arg(short, long, value_name = "COUNT", default_value_t = 50)]
    iterations: usize,

    /// Device to benchmark: auto, cpu or gpu. Auto also runs the
    /// complementary device and prints a speedup line.
    #[arg(short, long, value_name = "DEVICE", default_value = "auto")]
    device: DeviceRequest,

    /// Force a backend (host or wgpu) instead of the build default.
    #[arg(short, long, value_name = "ENGINE")]
    engine: Option<String>,

    /// Seed for the pseudo-random data mode. Ignored while --pattern is
    /// true.
    #[arg(long, value_name = "SEED", default_value_t = 42)]
    seed: u64,

    /// Fill the inputs with the deterministic arithmetic pattern instead
    /// of seeded pseudo-random values.
    #[arg(
        long,
        value_name = "BOOL",
        action = clap::ArgAction::Set,
        default_value_t = true
    )]
    pattern: bool,

    /// Append one CSV result row to this file.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Print engine and adapter diagnostics, then exit.
    #[arg(long)]
    diag: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> dotbench::Result<()> {
    let engine = match cli.engine.as_deref() {
        Some(name) => Engine::named(name)?,
        None => Engine::new(),
    };

    if cli.diag {
        return diag::print_report(&engine);
    }

    let cfg = BenchConfig {
        n: cli.size,
        warmup: cli.warmup,
        iterations: cli.iterations,
        device_request: cli.device,
        forced_engine: cli.engine.clone(),
        seed: cli.seed,
        use_pattern: cli.pattern,
        csv_path: cli.csv.clone(),
    };

    compare::run(&engine, &cfg)?;
    Ok(())
}
