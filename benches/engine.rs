//! Benchmarks for the Life generation engine.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use torus_life::{
    engine::{LifeEngine, next_generation},
    schema::{Pattern, Seed},
};

fn soup(size: usize) -> torus_life::engine::Grid {
    let seed = Seed {
        pattern: Pattern::Soup {
            density: 0.3,
            seed: 42,
        },
    };
    seed.generate(size, size).expect("valid bench dimensions")
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");

    for size in [64, 128, 256, 512, 1024] {
        let grid = soup(size);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| next_generation(black_box(&grid)));
            },
        );
    }

    group.finish();
}

fn bench_engine_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");

    for size in [64, 128, 256, 512, 1024] {
        let mut grid = soup(size);
        let mut engine = LifeEngine::new();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    engine.step(black_box(&mut grid));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_next_generation, bench_engine_step);
criterion_main!(benches);
