//! Benchmark profiles for Skein sequences.
//!
//! Provides pre-filled sequences so every benchmark measures the operation,
//! not the setup:
//!
//! - [`SIZES`]: element counts each bulk benchmark is run at
//! - [`seeded_heap`]: a heap sequence of deterministic values
//! - [`search_heap`]: a heap sequence with a small value alphabet, so
//!   searches hit often

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skein_core::Cursor;
use skein_seq::HeapSeq;
use skein_test_utils::{seeded_small, seeded_values};

/// Element counts for the bulk benchmarks: 1K, 64K and 1M.
pub const SIZES: [usize; 3] = [1 << 10, 1 << 16, 1 << 20];

/// A heap sequence of `n` values drawn from `seed`.
///
/// # Panics
///
/// Panics if the allocation fails.
pub fn seeded_heap(n: usize, seed: u64) -> HeapSeq<u32> {
    fill_heap(&seeded_values(seed, n))
}

/// A heap sequence of `n` values in `0..alphabet`.
///
/// # Panics
///
/// Panics if the allocation fails or `alphabet` is zero.
pub fn search_heap(n: usize, alphabet: u32, seed: u64) -> HeapSeq<u32> {
    fill_heap(&seeded_small(seed, n, alphabet))
}

fn fill_heap(values: &[u32]) -> HeapSeq<u32> {
    let mut seq = HeapSeq::open_heap(values.len()).expect("benchmark allocation");
    seq.set_many(seq.begin(), seq.end(), values)
        .expect("full range is valid");
    seq
}
