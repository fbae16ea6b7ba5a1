use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dotbench::{generate, Device, Engine};

pub fn bench_host_gemm(c: &mut Criterion) {
    let engine = Engine::host();
    let (a, b) = generate::pattern_pair(&engine, Device::Cpu, 256).unwrap();

    c.bench_function("host gemm 256", |bench| {
        bench.iter(|| black_box(engine.matmul(&a, &b).unwrap()))
    });
}

pub fn bench_pattern_generation(c: &mut Criterion) {
    let engine = Engine::host();

    c.bench_function("pattern pair 256", |bench| {
        bench.iter(|| black_box(generate::pattern_pair(&engine, Device::Cpu, 256).unwrap()))
    });
}

pub fn bench_lcg_fill(c: &mut Criterion) {
    c.bench_function("lcg fill 256x256", |bench| {
        bench.iter(|| black_box(generate::lcg_values(42, 256 * 256)))
    });
}

criterion_group!(
    benches,
    bench_host_gemm,
    bench_pattern_generation,
    bench_lcg_fill
);
criterion_main!(benches);
