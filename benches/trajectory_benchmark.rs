//! Benchmark for shot integration performance.

use bevy_target_range::components::Projectile;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_euler_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("Semi-implicit Euler");

    for shot_count in [100, 1000, 10000].iter() {
        let shots: Vec<Projectile> = (0..*shot_count)
            .map(|i| Projectile::launch(45.0, 35.0 + i as f32 * 0.01, 0.0))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(shot_count),
            shot_count,
            |b, &_count| {
                b.iter(|| {
                    let dt = 1.0 / 30.0;
                    let mut batch = shots.clone();
                    for shot in batch.iter_mut() {
                        shot.advance(dt, 9.8);
                    }
                    batch
                });
            },
        );
    }

    group.finish();
}

fn benchmark_full_flight(c: &mut Criterion) {
    c.bench_function("Full flight 45°/35", |b| {
        b.iter(|| {
            let mut shot = Projectile::launch(45.0, 35.0, 0.0);
            let dt = 1.0 / 30.0;
            while shot.position.y >= 0.0 && shot.position.x < 200.0 {
                shot.advance(dt, 9.8);
            }
            shot
        });
    });
}

criterion_group!(
    benches,
    benchmark_euler_integration,
    benchmark_full_flight
);
criterion_main!(benches);
