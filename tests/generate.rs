use dotbench::{generate, BenchError, Device, Engine, ErrorKind};

#[test]
fn test_pattern_values_n4() -> dotbench::Result<()> {
    let engine = Engine::host();
    let (a, b) = generate::pattern_pair(&engine, Device::Cpu, 4)?;

    let expected: Vec<f32> = (0..16).map(|i| i as f32 / 4.0).collect();
    assert_eq!(engine.read(&a)?, expected);

    // B = transpose(A) + 1
    let a_vals = engine.read(&a)?;
    let b_vals = engine.read(&b)?;
    for r in 0..4 {
        for c in 0..4 {
            assert_eq!(b_vals[r * 4 + c], a_vals[c * 4 + r] + 1.0);
        }
    }
    Ok(())
}

#[test]
fn test_pattern_not_symmetric() -> dotbench::Result<()> {
    let engine = Engine::host();
    let (a, b) = generate::pattern_pair(&engine, Device::Cpu, 3)?;
    assert_ne!(engine.read(&a)?, engine.read(&b)?);
    Ok(())
}

#[test]
fn test_pattern_reproducible() -> dotbench::Result<()> {
    let engine = Engine::host();
    let (a1, b1) = generate::pattern_pair(&engine, Device::Cpu, 8)?;
    let (a2, b2) = generate::pattern_pair(&engine, Device::Cpu, 8)?;

    assert_eq!(engine.read(&a1)?, engine.read(&a2)?);
    assert_eq!(engine.read(&b1)?, engine.read(&b2)?);
    Ok(())
}

#[test]
fn test_seeded_reproducible() -> dotbench::Result<()> {
    let engine = Engine::host();
    let (a1, b1) = generate::seeded_pair(&engine, Device::Cpu, 8, 42)?;
    let (a2, b2) = generate::seeded_pair(&engine, Device::Cpu, 8, 42)?;

    assert_eq!(engine.read(&a1)?, engine.read(&a2)?);
    assert_eq!(engine.read(&b1)?, engine.read(&b2)?);
    Ok(())
}

#[test]
fn test_seeds_decorrelated() {
    let a = generate::lcg_values(42, 64);
    let b = generate::lcg_values(42 ^ generate::GOLDEN_GAMMA, 64);
    assert_ne!(a, b);
}

#[test]
fn test_lcg_first_value_seed_42() {
    // x = 42 * 6364136223846793005 + 1 (mod 2^64) = 9039304369631583587,
    // so the first value is ((x >> 8) & 0xFFFFFF) / 2^24.
    let vals = generate::lcg_values(42, 1);
    assert_eq!(vals[0], 9_471_709.0 / 16_777_216.0);
}

#[test]
fn test_lcg_range() {
    for v in generate::lcg_values(7, 1000) {
        assert!((0.0..1.0).contains(&v), "value {v} out of range");
    }
}

#[test]
fn test_zero_dimension_rejected() {
    let engine = Engine::host();

    let err = generate::pattern_pair(&engine, Device::Cpu, 0).unwrap_err();
    assert_eq!(
        err.kind::<BenchError>(),
        Some(&BenchError::InvalidDimension(0))
    );

    let err = generate::seeded_pair(&engine, Device::Cpu, 0, 42).unwrap_err();
    assert_eq!(
        err.kind::<BenchError>(),
        Some(&BenchError::InvalidDimension(0))
    );
}
