//! Deterministic input tensors: the arithmetic pattern pair or the seeded
//! pseudo-random pair.

use crate::{config::BenchConfig, devices::Device, error::BenchError, Engine, Tensor};

/// XORed into the seed for the second tensor so the pair is decorrelated
/// in seeded mode.
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const LCG_MUL: u64 = 6_364_136_223_846_793_005;

/// Produces the input pair for one run on `device`, honoring the config's
/// generation mode.
pub fn pair(engine: &Engine, device: Device, cfg: &BenchConfig) -> crate::Result<(Tensor, Tensor)> {
    if cfg.use_pattern {
        pattern_pair(engine, device, cfg.n)
    } else {
        seeded_pair(engine, device, cfg.n, cfg.seed)
    }
}

/// `A[i] = i / n` row-major, `B = Aᵀ + 1`.
///
/// Both tensors are built on `device` itself, non-symmetric, and
/// bit-for-bit reproducible for a given `n` without any host-side fill.
pub fn pattern_pair(engine: &Engine, device: Device, n: usize) -> crate::Result<(Tensor, Tensor)> {
    check_dim(n)?;
    let a = engine.arange(device, n, n)?;
    let a = engine.div_scalar(&a, n as f32)?;
    let b = engine.transpose(&a)?;
    let b = engine.add_scalar(&b, 1.0)?;
    Ok((a, b))
}

/// Host-side pseudo-random fill uploaded to `device`. `A` draws from
/// `seed`, `B` from `seed ^ GOLDEN_GAMMA`.
pub fn seeded_pair(
    engine: &Engine,
    device: Device,
    n: usize,
    seed: u64,
) -> crate::Result<(Tensor, Tensor)> {
    check_dim(n)?;
    let a = engine.tensor_from(device, lcg_values(seed, n * n), (n, n))?;
    let b = engine.tensor_from(device, lcg_values(seed ^ GOLDEN_GAMMA, n * n), (n, n))?;
    Ok((a, b))
}

/// `len` values in `[0, 1)` from the 64-bit LCG `x' = x * LCG_MUL + 1`
/// (wrapping), keeping the 24 bits above the low byte of each state.
pub fn lcg_values(seed: u64, len: usize) -> Vec<f32> {
    let mut x = seed;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        x = x.wrapping_mul(LCG_MUL).wrapping_add(1);
        out.push(((x >> 8) & 0xFF_FFFF) as f32 / (1 << 24) as f32);
    }
    out
}

fn check_dim(n: usize) -> crate::Result<()> {
    if n == 0 {
        return Err(BenchError::InvalidDimension(n).into());
    }
    Ok(())
}
