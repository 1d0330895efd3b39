//! Growth policy and capacity arithmetic.
//!
//! There is no runtime configuration: a default-constructed sequence owns
//! [`DEFAULT_CAPACITY`] slots and an append into a full buffer multiplies
//! the capacity by [`GROWTH_FACTOR`].

use std::mem;

use crate::error::SequenceError;

/// Capacity of a default-constructed sequence.
pub const DEFAULT_CAPACITY: usize = 1;

/// Multiplier applied to the capacity when an append finds the buffer full.
pub const GROWTH_FACTOR: usize = 2;

/// Largest number of slots a buffer of `T` may hold.
///
/// Allocations are limited to `isize::MAX` bytes. Zero-sized types never
/// allocate, so their limit is `usize::MAX`. Their slots are still
/// materialized one `T::default()` call at a time, so a capacity near this
/// limit is accepted but takes time linear in the capacity to build.
pub fn max_capacity<T>() -> usize {
    match mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

/// Validate an explicit capacity request against [`max_capacity`].
pub fn checked_capacity<T>(requested: usize) -> Result<usize, SequenceError> {
    let max = max_capacity::<T>();
    if requested > max {
        return Err(SequenceError::CapacityOverflow { requested, max });
    }
    Ok(requested)
}

/// Capacity to grow to when a buffer of `current` slots is full.
///
/// A zero-capacity buffer (moved-from, or built from an empty list) grows
/// to [`DEFAULT_CAPACITY`] since doubling zero would never make room.
pub fn grown_capacity<T>(current: usize) -> Result<usize, SequenceError> {
    if current == 0 {
        return checked_capacity::<T>(DEFAULT_CAPACITY);
    }
    match current.checked_mul(GROWTH_FACTOR) {
        Some(next) => checked_capacity::<T>(next),
        None => Err(SequenceError::CapacityOverflow {
            requested: usize::MAX,
            max: max_capacity::<T>(),
        }),
    }
}
