//! Criterion benchmarks for pose updates and overlap queries.
//! Focus sizes: n in {4, 8, 16, 32} vertices.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use collide2d::prelude::*;

fn sampled_polygon(n: usize, seed: u64, pose: Pose) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let shape = draw_shape_radial(cfg, ReplayToken { seed, index: 0 }).expect("sampler shape");
    Polygon::new(shape, pose)
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_update");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("recompute", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter_batched(
                || {
                    (
                        sampled_polygon(n, 11, Pose::upright(0.0, 0.0, 1.0)),
                        Pose::new(
                            rng.gen_range(-5.0..5.0),
                            rng.gen_range(-5.0..5.0),
                            rng.gen_range(0.5..2.0),
                            rng.gen_range(0.0..std::f64::consts::TAU),
                        ),
                    )
                },
                |(mut poly, pose)| {
                    let _recomputed = poly.update(pose);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("noop_skip", n), &n, |b, &n| {
            let pose = Pose::new(1.0, -2.0, 1.5, 0.4);
            let mut poly = sampled_polygon(n, 11, pose);
            b.iter(|| {
                let _skipped = poly.update(pose);
            })
        });
    }
    group.finish();
}

fn bench_collide(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_colliding");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("overlapping", n), &n, |b, &n| {
            let a = sampled_polygon(n, 21, Pose::upright(0.0, 0.0, 1.0));
            let p = sampled_polygon(n, 22, Pose::upright(0.5, 0.0, 1.0));
            b.iter(|| is_colliding(&a, &p))
        });

        group.bench_with_input(BenchmarkId::new("separated", n), &n, |b, &n| {
            let a = sampled_polygon(n, 21, Pose::upright(0.0, 0.0, 1.0));
            let p = sampled_polygon(n, 22, Pose::upright(10.0, 0.0, 1.0));
            b.iter(|| is_colliding(&a, &p))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update, bench_collide);
criterion_main!(benches);
