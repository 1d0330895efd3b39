//! Benchmark inputs for the Sequence container.
//!
//! All inputs are generated from a seeded [`ChaCha8Rng`] so every run
//! measures the same data:
//!
//! - [`random_values`]: element payloads for append and copy benchmarks
//! - [`random_indices`]: in-bounds access patterns for indexing benchmarks
//! - [`filled_sequence`]: a ready-made sequence of random values

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sequence::Sequence;

/// `len` pseudo-random values from `seed`.
pub fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

/// `count` pseudo-random indices in `0..len` from `seed`.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn random_indices(len: usize, count: usize, seed: u64) -> Vec<usize> {
    assert!(len > 0, "cannot draw indices from an empty range");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..len)).collect()
}

/// A sequence of `len` pseudo-random values, built by repeated appends.
pub fn filled_sequence(len: usize, seed: u64) -> Sequence<u64> {
    let mut s = Sequence::new();
    s.extend(random_values(len, seed));
    s
}
