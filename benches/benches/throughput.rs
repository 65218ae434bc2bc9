//! Groestl-256 Criterion Benchmark
//!
//! Latency, bulk throughput, streaming and batch hashing measurements.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Short inputs around the single and double padding block boundary.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (0, "empty"),
        (32, "32B-digest"),
        (55, "55B-one-pad"),
        (56, "56B-two-pad"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| groestl256::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Steady-state compression throughput.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(30);

    let sizes = [
        (16 * KB, "16KB"),
        (64 * KB, "64KB"),
        (256 * KB, "256KB"),
        (MB, "1MB"),
        (8 * MB, "8MB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| groestl256::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Incremental updates with chunk sizes that straddle the block buffer.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(30);

    let test_cases = [
        (MB, 1, "1MB-1B-chunks"),
        (MB, 63, "1MB-63B-chunks"),
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (8 * MB, 64 * KB, "8MB-64KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = groestl256::Hasher::new();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: BATCH SCALING
// =============================================================================

/// `hash_many` over independent messages, 1 to N threads.
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Batch-Scaling");
    group.sample_size(30);

    let inputs: Vec<Vec<u8>> = (0..256).map(|_| random_input(16 * KB)).collect();
    group.throughput(Throughput::Bytes((inputs.len() * 16 * KB) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| groestl256::hash_many(black_box(&inputs))));
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: SPECIAL OPERATIONS
// =============================================================================

/// Verification, hex output and two-to-one digest compression.
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Special-Operations");

    let input = random_input(4 * KB);
    let digest = groestl256::hash(&input);

    group.bench_function("hash-4KB", |b| {
        b.iter(|| groestl256::hash(black_box(&input)))
    });

    group.bench_function("verify-4KB", |b| {
        b.iter(|| groestl256::verify(black_box(&input), black_box(&digest)))
    });

    group.bench_function("hash-hex-4KB", |b| {
        b.iter(|| groestl256::hash_hex(black_box(&input)))
    });

    let right = groestl256::hash(b"right");
    group.bench_function("compress-digests", |b| {
        b.iter(|| groestl256::compress_digests(black_box(&digest), black_box(&right)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_streaming,
    bench_special_operations,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
