//! Performance benchmarks for the digest engine
//!
//! Measures per-call overhead of text hashing for typical prompt-sized
//! inputs rather than raw algorithm throughput.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashpy_core::{HashAlgorithm, compute_all_digests, compute_digest, verify};
use std::hint::black_box;

fn benchmark_single_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_digest");

    for size in [16usize, 256, 4_096] {
        let text = "a".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));

        for algorithm in HashAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.id(), size), &text, |b, text| {
                b.iter(|| black_box(compute_digest(black_box(text), algorithm)))
            });
        }
    }

    group.finish();
}

fn benchmark_all_digests(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog";

    c.bench_function("compute_all_digests", |b| {
        b.iter(|| black_box(compute_all_digests(black_box(text))))
    });
}

fn benchmark_verify(c: &mut Criterion) {
    let text = "hello";
    let digest = compute_digest(text, HashAlgorithm::SHA256);

    c.bench_function("verify_sha256", |b| {
        b.iter(|| black_box(verify(black_box(text), &digest, HashAlgorithm::SHA256)))
    });
}

criterion_group!(
    benches,
    benchmark_single_digest,
    benchmark_all_digests,
    benchmark_verify
);
criterion_main!(benches);
