//! Criterion benchmarks for the section-property engine.
//! Focus sizes: n in {4, 16, 64, 256} contour vertices.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use secprops::geometry::rand::{draw_closed_contour, ContourCfg, ReplayToken};
use secprops::geometry::SectionProps;

fn bench_props(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_props");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("from_contour", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    draw_closed_contour(
                        ContourCfg {
                            vertex_count: n,
                            ..ContourCfg::default()
                        },
                        ReplayToken { seed: 43, index: 0 },
                    )
                },
                |contour| {
                    let _props = SectionProps::from_contour(&contour).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_props);
criterion_main!(benches);
