//! Criterion micro-benchmarks for indexed access and heap resizing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use skein_bench::seeded_heap;
use skein_seq::HeapSeq;

/// Benchmark: get() every index of a 64K sequence.
fn bench_get_all_64k(c: &mut Criterion) {
    let seq = seeded_heap(1 << 16, 5);

    c.bench_function("get_all_64k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..seq.size() {
                sum += u64::from(seq.get(i).unwrap());
            }
            black_box(sum)
        });
    });
}

/// Benchmark: set() every index of a 64K sequence.
fn bench_set_all_64k(c: &mut Criterion) {
    let mut seq = seeded_heap(1 << 16, 6);

    c.bench_function("set_all_64k", |b| {
        b.iter(|| {
            for i in 0..seq.size() {
                seq.set(i, black_box(i as u32)).unwrap();
            }
        });
    });
}

/// Benchmark: grow a heap sequence to 1M elements by doubling, then close it.
fn bench_reopen_doubling(c: &mut Criterion) {
    c.bench_function("reopen_doubling_1m", |b| {
        b.iter(|| {
            let mut seq = HeapSeq::<u32>::open_heap(1).unwrap();
            let mut cap = 1;
            while cap < 1 << 20 {
                cap *= 2;
                seq.reopen(cap).unwrap();
            }
            black_box(seq.size());
            seq.close();
        });
    });
}

criterion_group!(
    benches,
    bench_get_all_64k,
    bench_set_all_64k,
    bench_reopen_doubling
);
criterion_main!(benches);
