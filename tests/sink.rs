use dotbench::sink::{self, CsvRow};
use dotbench::{BenchError, Device, ErrorKind};

fn sample_row(avg_ms: f64) -> CsvRow<'static> {
    CsvRow {
        operation: "dot",
        engine: "host",
        device: Device::Cpu,
        n: 64,
        warmup: 2,
        iterations: 5,
        avg_ms,
    }
}

#[test]
fn test_header_written_once() -> dotbench::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("results.csv");

    sink::append(&path, &sample_row(12.34567))?;
    sink::append(&path, &sample_row(7.0))?;

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], sink::CSV_HEADER);
    assert_eq!(lines[1], "dot,host,cpu,64,2,5,12.3457");
    assert_eq!(lines[2], "dot,host,cpu,64,2,5,7.0000");
    Ok(())
}

#[test]
fn test_no_header_for_nonempty_file() -> dotbench::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("results.csv");
    std::fs::write(&path, "some earlier content\n")?;

    sink::append(&path, &sample_row(1.0))?;

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "some earlier content");
    assert_eq!(lines[1], "dot,host,cpu,64,2,5,1.0000");
    Ok(())
}

#[test]
fn test_device_tag_in_row() -> dotbench::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("results.csv");

    let row = CsvRow {
        device: Device::Accel(0),
        engine: "wgpu",
        ..sample_row(0.5)
    };
    sink::append(&path, &row)?;

    let contents = std::fs::read_to_string(&path)?;
    assert!(contents.contains("dot,wgpu,gpu:0,64,2,5,0.5000"));
    Ok(())
}

#[test]
fn test_append_failure_is_a_sink_error() {
    let dir = tempfile::tempdir().unwrap();

    // a directory is not appendable
    let err = sink::append(dir.path(), &sample_row(1.0)).unwrap_err();
    assert!(err
        .kind::<BenchError>()
        .is_some_and(|e| matches!(e, BenchError::SinkWriteFailure(_))));
}
