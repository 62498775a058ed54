//! Deterministic element data.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The five-element array used by the copy scenarios.
pub const CANNED: [i32; 5] = [10, 20, 30, 40, 50];

/// A fresh copy of [`CANNED`].
pub fn canned() -> [i32; 5] {
    CANNED
}

/// `0, 1, …, n - 1`.
pub fn ascending(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

/// `n` values drawn from a ChaCha8 stream seeded with `seed`.
///
/// Same seed, same values, on every platform.
pub fn seeded_values(seed: u64, n: usize) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u32()).collect()
}

/// Values in `0..modulus`, so searches get repeated hits.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn seeded_small(seed: u64, n: usize, modulus: u32) -> Vec<u32> {
    assert!(modulus > 0, "modulus must be positive");
    seeded_values(seed, n)
        .into_iter()
        .map(|v| v % modulus)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_values_are_reproducible() {
        assert_eq!(seeded_values(7, 16), seeded_values(7, 16));
        assert_ne!(seeded_values(7, 16), seeded_values(8, 16));
    }

    #[test]
    fn seeded_small_respects_modulus() {
        assert!(seeded_small(1, 64, 3).iter().all(|&v| v < 3));
    }

    #[test]
    fn ascending_counts_up() {
        assert_eq!(ascending(4), vec![0, 1, 2, 3]);
    }
}
