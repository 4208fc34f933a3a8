use std::hint::black_box;

use cactus_fractal::{Colour, FractalParams, generate_fractal};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_generate_fractal(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_fractal");

    for depth in [4u32, 8, 12] {
        let params = FractalParams::from_degrees(depth, 60, Colour::GREEN, Colour::PINK, 45.0);
        group.bench_function(BenchmarkId::from_parameter(depth), |b| {
            b.iter(|| generate_fractal(black_box(&params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_fractal);
criterion_main!(benches);
