//! Criterion benchmarks for the nested mirror chain.
//! Focus sizes: number of shells in {1, 10, 100}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nmo::prelude::*;

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    for &n in &[1usize, 10, 100] {
        // Foci far from the span keep long chains feasible.
        let inputs = ChainInputs::new(
            n,
            Vec2::new(0.0, 0.02),
            -0.05,
            FocalPair::new(-6.0, 6.0),
            MirrorSpan::new(-0.05, 0.05),
        );
        group.bench_with_input(BenchmarkId::new("solve_chain", n), &inputs, |b, inp| {
            b.iter(|| solve_chain(inp, ChainCfg::default()).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("solve_shells", n), &inputs, |b, inp| {
            b.iter(|| solve_shells(inp, ChainCfg::default()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain);
criterion_main!(benches);
