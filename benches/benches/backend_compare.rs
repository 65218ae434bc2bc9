//! Implementation Comparison Benchmark
//!
//! Compares the crate's fused-table kernel against the RustCrypto `groestl`
//! crate and SHA-256, and isolates the cost of the P and Q permutations.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use groestl256::kernels::portable;
use groestl_crypto::Digest as _;
use sha2::Digest as _;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_implementations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Groestl-256 Implementations");

    // Scenarios:
    // - Small (7B): padding dominated
    // - Medium (1KB): L1 cache hot-path
    // - Large (256KB): bulk compression
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("groestl256 - {size} bytes"), |b| {
            b.iter(|| groestl256::hash(black_box(&input)));
        });

        group.bench_function(format!("RustCrypto groestl - {size} bytes"), |b| {
            b.iter(|| groestl_crypto::Groestl256::digest(black_box(&input)));
        });

        // Baseline from a different construction at the same output size
        group.bench_function(format!("SHA-256 - {size} bytes"), |b| {
            b.iter(|| sha2::Sha256::digest(black_box(&input)));
        });
    }
    group.finish();
}

fn bench_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Groestl-256 Permutations");
    group.throughput(Throughput::Bytes(groestl256::BLOCK_SIZE as u64));

    let state: groestl256::State = core::array::from_fn(|i| 0x0123_4567_89ab_cdef ^ i as u64);
    let block = [0x5Au8; groestl256::BLOCK_SIZE];

    group.bench_function("P", |b| b.iter(|| portable::p(black_box(&state))));
    group.bench_function("Q", |b| b.iter(|| portable::q(black_box(&state))));
    group.bench_function("compress", |b| {
        b.iter(|| {
            let mut h = state;
            portable::compress(&mut h, black_box(&block));
            h
        });
    });
    group.bench_function("output-transform", |b| {
        b.iter(|| portable::output_transform(black_box(&state)));
    });
    group.finish();
}

criterion_group!(benches, bench_implementations, bench_permutations);
criterion_main!(benches);
