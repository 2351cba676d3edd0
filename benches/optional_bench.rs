//! Benchmark for `Optional` combinators vs the standard `Option`.

use criterion::{Criterion, criterion_group, criterion_main};
use optionmap::optional::Optional;
use std::hint::black_box;

fn inputs() -> Vec<Option<i64>> {
    (0..1_000)
        .map(|index| if index % 3 == 0 { None } else { Some(index) })
        .collect()
}

// =============================================================================
// Combinator Chain Benchmark
// =============================================================================

fn benchmark_combinator_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinator_chain");
    let standard = inputs();
    let optional: Vec<Optional<i64>> = standard.iter().copied().map(Optional::from).collect();

    group.bench_function("Optional", |bencher| {
        bencher.iter(|| {
            optional
                .iter()
                .map(|value| {
                    black_box(*value)
                        .map(|x| x * 2)
                        .filter(|x| x % 4 == 0)
                        .fold(|x| x + 1, || 0)
                })
                .sum::<i64>()
        });
    });

    group.bench_function("Option", |bencher| {
        bencher.iter(|| {
            standard
                .iter()
                .map(|value| {
                    black_box(*value)
                        .map(|x| x * 2)
                        .filter(|x| x % 4 == 0)
                        .map_or_else(|| 0, |x| x + 1)
                })
                .sum::<i64>()
        });
    });

    group.finish();
}

// =============================================================================
// Collect Benchmark
// =============================================================================

fn benchmark_collect(criterion: &mut Criterion) {
    let present: Vec<Optional<i64>> = (0..1_000).map(Optional::Some).collect();

    criterion.bench_function("collect_all_present", |bencher| {
        bencher.iter(|| {
            let collected: Optional<Vec<i64>> = black_box(&present).iter().copied().collect();
            black_box(collected)
        });
    });
}

// =============================================================================
// Display Benchmark
// =============================================================================

fn benchmark_display(criterion: &mut Criterion) {
    let values = [Optional::Some("value"), Optional::None];

    criterion.bench_function("display", |bencher| {
        bencher.iter(|| {
            for value in &values {
                black_box(value.to_string());
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_combinator_chain,
    benchmark_collect,
    benchmark_display
);
criterion_main!(benches);
