//! Benchmark for `OptionMap` vs standard `HashMap`.
//!
//! `OptionMap` wraps a `HashMap` and converts every lookup to `Optional`;
//! these benchmarks show what that conversion costs for set, get and delete.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use optionmap::map::OptionMap;
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// set Benchmark
// =============================================================================

fn benchmark_set(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("OptionMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = OptionMap::new();
                for index in 0..size {
                    map.set(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = HashMap::new();
                for index in 0..size {
                    map.insert(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1_000, 10_000] {
        let option_map: OptionMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let standard_map: HashMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("OptionMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                // Look up twice the key range so half the lookups miss
                for key in 0..size * 2 {
                    sum += option_map.get(&black_box(key)).map_or(0, |value| *value);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size * 2 {
                    sum += standard_map.get(&black_box(key)).map_or(0, |value| *value);
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// delete Benchmark
// =============================================================================

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete");

    for size in [1_000, 10_000] {
        let option_map: OptionMap<i32, i32> = (0..size).map(|index| (index, index)).collect();

        group.bench_with_input(BenchmarkId::new("OptionMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || option_map.clone(),
                |mut map| {
                    for key in 0..size {
                        black_box(map.delete(&key));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Cart Workload Benchmark
// =============================================================================

fn benchmark_cart_workload(criterion: &mut Criterion) {
    let catalog: OptionMap<u32, u32> = (0..500).map(|id| (id, 100 + id)).collect();

    criterion.bench_function("cart_workload", |bencher| {
        bencher.iter(|| {
            let mut cart: OptionMap<u32, u32> = OptionMap::new();
            for id in (0..1_000).step_by(3) {
                cart.set(black_box(id), id % 5 + 1);
            }
            for id in (0..1_000).step_by(7) {
                cart.delete(&id);
            }
            let total: u32 = cart
                .iter()
                .map(|(id, quantity)| catalog.get(id).map_or(0, |price| price * quantity))
                .sum();
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    benchmark_set,
    benchmark_get,
    benchmark_delete,
    benchmark_cart_workload
);
criterion_main!(benches);
