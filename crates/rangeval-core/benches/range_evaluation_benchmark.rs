//! Benchmark comparing range evaluation strategies across value distributions.
//!
//! Each distribution yields a different number of distinct values, which is
//! what separates the strategies: intervals and the inverted index scale with
//! distinct values, the permuted index with matching rows, the scan with rows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rangeval_core::{Column, Distribution, EvaluatorKind};

const SIZE: usize = 1_000_000;
const DISTRIBUTIONS: &[&str] = &[
    "EXP(0.5)",
    "EXP(0.01)",
    "EXP(0.0001)",
    "UNIFORM(1635012703,1635016303)",
];

fn create_column(descriptor: &str) -> Column {
    let distribution: Distribution = descriptor.parse().expect("valid distribution");
    Column::new(distribution.generate(SIZE, 42)).expect("column fits")
}

fn bench_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_between");
    group.sample_size(20);

    for &descriptor in DISTRIBUTIONS {
        let column = create_column(descriptor);
        // median to median + 5%
        let min = column.quantile(0.5).expect("non-empty");
        let max = column.quantile(0.55).expect("non-empty");

        for kind in EvaluatorKind::all() {
            let evaluator = kind.build(&column).expect("build");
            group.bench_with_input(
                BenchmarkId::new(kind.as_str(), descriptor),
                &(min, max),
                |b, &(min, max)| {
                    b.iter(|| black_box(evaluator.between(black_box(min), black_box(max))));
                },
            );
        }
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_build");
    group.sample_size(10);

    let column = create_column("EXP(0.01)");
    for kind in EvaluatorKind::all() {
        group.bench_with_input(BenchmarkId::new(kind.as_str(), SIZE), &column, |b, col| {
            b.iter(|| black_box(kind.build(col).expect("build")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_between, bench_build);
criterion_main!(benches);
