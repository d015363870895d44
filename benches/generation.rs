//! World generation and turn resolution benchmarks.
//!
//! Run with: cargo bench --bench generation
//!
//! This will generate HTML reports in target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_wumpus::core::{Action, Coord, GameRng, GeneratorConfig};
use rust_wumpus::generation::WorldGenerator;
use rust_wumpus::rules::TurnEngine;
use rust_wumpus::search::connected;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let generator = WorldGenerator::new(GeneratorConfig::default());

    for size in [4, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{size}x{size}")), &size, |b, &size| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let world = generator.generate(size, size, 1, &mut GameRng::new(seed));
                black_box(world)
            });
        });
    }

    group.finish();
}

fn bench_connectivity(c: &mut Criterion) {
    let engine = TurnEngine::default();
    let Ok(world) = engine.new_world(64, 64, 1, 7) else {
        return;
    };

    c.bench_function("connected_64x64_corners", |b| {
        b.iter(|| connected(black_box(Coord::new(0, 0)), black_box(Coord::new(63, 63)), &world))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let engine = TurnEngine::default();
    let Ok(world) = engine.new_world(16, 16, 1, 11) else {
        return;
    };
    let player = world.current_player();

    c.bench_function("resolve_turn_left", |b| {
        b.iter(|| engine.resolve(black_box(&world), player, Action::TurnLeft))
    });
}

criterion_group!(benches, bench_generate, bench_connectivity, bench_resolve);
criterion_main!(benches);
