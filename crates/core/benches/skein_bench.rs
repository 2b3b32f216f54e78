//! Benchmark for the Skein hash family across all three state sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein_core::{hash1024, hash256, hash512};

fn bench_hash256(c: &mut Criterion) {
    let input = b"benchmark input data for testing Skein-256 performance";
    let mut out = [0u8; 32];
    c.bench_function("skein256_small", |b| {
        b.iter(|| hash256(256, black_box(input), &mut out))
    });
}

fn bench_hash512(c: &mut Criterion) {
    let input = b"benchmark input data for testing Skein-512 performance";
    let mut out = [0u8; 64];
    c.bench_function("skein512_small", |b| {
        b.iter(|| hash512(512, black_box(input), &mut out))
    });
}

fn bench_hash1024(c: &mut Criterion) {
    let input = b"benchmark input data for testing Skein-1024 performance";
    let mut out = [0u8; 128];
    c.bench_function("skein1024_small", |b| {
        b.iter(|| hash1024(1024, black_box(input), &mut out))
    });
}

fn bench_hash512_large(c: &mut Criterion) {
    let input = vec![0xA5u8; 1 << 20];
    let mut out = [0u8; 64];
    c.bench_function("skein512_1mib", |b| {
        b.iter(|| hash512(512, black_box(&input), &mut out))
    });
}

criterion_group!(
    benches,
    bench_hash256,
    bench_hash512,
    bench_hash1024,
    bench_hash512_large
);
criterion_main!(benches);
