// Copyright (c) 2023 Espresso Systems (espressosys.com)
// This file is part of the UniIOP library.

// You should have received a copy of the MIT License
// along with the UniIOP library. If not, see <https://mit-license.org/>.

#[macro_use]
extern crate criterion;

use arithmetic::{evaluate, find_primitive_root, ntt_inverse, ntt_transform, polynomial_multiply};
use ark_bls12_381::Fr;
use ark_ff::PrimeField;
use ark_std::{ops::Range, test_rng, UniformRand};
use criterion::{black_box, BenchmarkId, Criterion};

const LOG_SIZE_RANGE: Range<u32> = 10..19;

fn ntt_bench<F: PrimeField>(c: &mut Criterion) {
    let mut rng = test_rng();
    let mut group = c.benchmark_group("NTT");
    for log_n in LOG_SIZE_RANGE {
        let n = 1usize << log_n;
        let omega = find_primitive_root::<F>(n).unwrap();

        group.bench_with_input(BenchmarkId::new("forward", log_n), &n, |b, &n| {
            let values: Vec<F> = (0..n).map(|_| F::rand(&mut rng)).collect();
            b.iter_batched(
                || values.clone(),
                |mut values| ntt_transform(&mut values, &omega).unwrap(),
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("inverse", log_n), &n, |b, &n| {
            let values: Vec<F> = (0..n).map(|_| F::rand(&mut rng)).collect();
            b.iter_batched(
                || values.clone(),
                |mut values| ntt_inverse(&mut values, &omega).unwrap(),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn multiply_bench<F: PrimeField>(c: &mut Criterion) {
    let mut rng = test_rng();
    let mut group = c.benchmark_group("Multiply");
    for log_n in LOG_SIZE_RANGE {
        let half = 1usize << (log_n - 1);
        let omega = find_primitive_root::<F>(1 << log_n).unwrap();

        group.bench_with_input(BenchmarkId::new("ntt", log_n), &half, |b, &half| {
            let lhs: Vec<F> = (0..half).map(|_| F::rand(&mut rng)).collect();
            let rhs: Vec<F> = (0..half).map(|_| F::rand(&mut rng)).collect();
            b.iter(|| black_box(polynomial_multiply(&lhs, &rhs, &omega).unwrap()))
        });
    }
    group.finish();
}

fn evaluation_bench<F: PrimeField>(c: &mut Criterion) {
    let mut rng = test_rng();
    let mut group = c.benchmark_group("Evaluate");
    for log_n in LOG_SIZE_RANGE {
        let n = 1usize << log_n;
        group.bench_with_input(BenchmarkId::new("horner", log_n), &n, |b, &n| {
            let coeffs: Vec<F> = (0..n).map(|_| F::rand(&mut rng)).collect();
            let point = F::rand(&mut rng);
            b.iter(|| black_box(evaluate(&coeffs, &point)))
        });
    }
    group.finish();
}

fn bench_bls_381(c: &mut Criterion) {
    ntt_bench::<Fr>(c);
    multiply_bench::<Fr>(c);
    evaluation_bench::<Fr>(c);
}

criterion_group!(benches, bench_bls_381);
criterion_main!(benches);
