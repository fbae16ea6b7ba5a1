//! Append-only CSV results file with a once-only header.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{devices::Device, error::BenchError};

pub const CSV_HEADER: &str = "operation,engine,device,n,warmup,iterations,ms";

/// One results row. The latency is written with four decimal places.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CsvRow<'a> {
    pub operation: &'a str,
    pub engine: &'a str,
    pub device: Device,
    pub n: usize,
    pub warmup: usize,
    pub iterations: usize,
    pub avg_ms: f64,
}

/// Appends `row` to `path`, writing the header first when the file is new
/// or empty.
///
/// Failures map to [`BenchError::SinkWriteFailure`]. The benchmark result
/// has already been reported by the time this runs, so callers recover by
/// logging instead of aborting.
pub fn append(path: &Path, row: &CsvRow) -> crate::Result<()> {
    append_inner(path, row)
        .map_err(|err| BenchError::SinkWriteFailure(format!("{}: {err}", path.display())).into())
}

fn append_inner(path: &Path, row: &CsvRow) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let write_header = file.metadata()?.len() == 0;

    let mut w = BufWriter::new(file);
    if write_header {
        writeln!(w, "{CSV_HEADER}")?;
    }
    writeln!(
        w,
        "{},{},{},{},{},{},{:.4}",
        row.operation, row.engine, row.device, row.n, row.warmup, row.iterations, row.avg_ms
    )?;
    w.flush()
}
