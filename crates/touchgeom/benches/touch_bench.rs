//! Criterion microbench for the per-event path: mutate the touch set, then
//! analyze the snapshot (what a frame redraw costs).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use touchgeom::analysis::Analysis;
use touchgeom::sample::{draw_points, PointCount, ReplayToken, SampleCfg};
use touchgeom::touch::{TouchId, TouchSet};

fn filled_set(n: usize) -> TouchSet {
    let cfg = SampleCfg {
        count: PointCount::Fixed(n),
        ..SampleCfg::default()
    };
    let mut set = TouchSet::with_capacity(n);
    for (k, p) in draw_points(cfg, ReplayToken { seed: 5, index: n as u64 })
        .into_iter()
        .enumerate()
    {
        set.begin(TouchId(k as u32), p).unwrap();
    }
    set
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    for &n in &[1usize, 5, 10] {
        group.bench_with_input(BenchmarkId::new("update_and_analyze", n), &n, |b, &n| {
            b.iter_batched(
                || filled_set(n),
                |mut set| {
                    let p = set.points()[0] + touchgeom::Vec2::new(1.0, -1.0);
                    set.update(TouchId(0), p).unwrap();
                    let _a = Analysis::of(set.points());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
