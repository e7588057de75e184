//! Criterion benchmarks for seedgen_core.
//!
//! Measures raw stepping for each algorithm, bounded integer sampling on
//! both sides of the 4096 power-of-two boundary, float sampling, and list
//! threading at several lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seedgen_core::algorithm::{Lcg64, Pcg32, StepAlgorithm};
use seedgen_core::{float, int, IntRange, Seed};

const WORDS_PER_ITER: u64 = 1_000;

fn step_many<A: StepAlgorithm>(seed: Seed<A>) -> u32 {
    let mut seed = seed;
    let mut acc = 0_u32;
    for _ in 0..WORDS_PER_ITER {
        let (word, next) = seed.step();
        acc ^= word;
        seed = next;
    }
    acc
}

/// Benchmark raw word generation for each step algorithm.
fn bench_raw_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_step");
    group.throughput(Throughput::Elements(WORDS_PER_ITER));

    group.bench_function(Pcg32::NAME, |b| {
        let seed = Seed::<Pcg32>::from_int(1);
        b.iter(|| step_many(black_box(seed)));
    });
    group.bench_function(Lcg64::NAME, |b| {
        let seed = Seed::<Lcg64>::from_int(1);
        b.iter(|| step_many(black_box(seed)));
    });

    group.finish();
}

/// Benchmark bounded integer sampling around the power-of-two boundary.
fn bench_int_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("int_sampling");
    group.throughput(Throughput::Elements(WORDS_PER_ITER));

    for width in [4094_i64, 4095, 4096, 4097] {
        let range = IntRange::new(0, width - 1).unwrap();
        group.bench_with_input(BenchmarkId::new("range", width), &range, |b, range| {
            let seed = Seed::<Pcg32>::from_int(2);
            b.iter(|| {
                let mut seed = black_box(seed);
                let mut acc = 0_i64;
                for _ in 0..WORDS_PER_ITER {
                    let sampled = range.sample(seed);
                    acc ^= sampled.value;
                    seed = sampled.seed;
                }
                acc
            });
        });
    }

    // Full generator path, including the Arc indirection.
    let die = int::<Pcg32>(0, 4094).unwrap();
    group.bench_function("generator_4095", |b| {
        let seed = Seed::<Pcg32>::from_int(3);
        b.iter(|| die.run(black_box(seed)));
    });

    group.finish();
}

/// Benchmark float sampling.
fn bench_float_sampling(c: &mut Criterion) {
    let unit = float::<Pcg32>(0.0, 1.0).unwrap();
    c.bench_function("float_unit", |b| {
        let seed = Seed::<Pcg32>::from_int(4);
        b.iter(|| unit.run(black_box(seed)));
    });
}

/// Benchmark list threading at different lengths.
fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for len in [10_usize, 100, 1_000] {
        let gen_list = int::<Pcg32>(1, 6).unwrap().list(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("dice", len), &gen_list, |b, gen_list| {
            let seed = Seed::<Pcg32>::from_int(5);
            b.iter(|| gen_list.run(black_box(seed)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_raw_step,
    bench_int_sampling,
    bench_float_sampling,
    bench_list
);
criterion_main!(benches);
