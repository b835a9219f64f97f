//! Criterion benchmarks for the shape kernel.
//! Focus sizes: n in {3, 10, 50, 200} (touch sets rarely exceed 10; the larger
//! sizes show scaling).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use touchgeom::geom::{convex_hull, min_enclosing_circle, oriented_bbox, Point};
use touchgeom::sample::{draw_points, PointCount, ReplayToken, SampleCfg, Spread};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let cfg = SampleCfg {
        count: PointCount::Fixed(n),
        spread: Spread::Cluster { radius: 300.0 },
        ..SampleCfg::default()
    };
    draw_points(cfg, ReplayToken { seed, index: 0 })
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");
    for &n in &[3usize, 10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("min_enclosing_circle", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 41),
                |pts| {
                    let _c = min_enclosing_circle(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 42),
                |pts| {
                    let _h = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("oriented_bbox", n), &n, |b, &n| {
            b.iter_batched(
                || convex_hull(&random_points(n, 43)),
                |hull| {
                    let _r = oriented_bbox(&hull);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernel);
criterion_main!(benches);
