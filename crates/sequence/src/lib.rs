//! A growable, contiguous sequence container.
//!
//! [`Sequence<T>`] owns a single heap buffer of `capacity` slots, the first
//! `len` of which hold live elements. Appending into a full buffer doubles
//! its capacity; shrinking never gives memory back.
//!
//! # Architecture
//!
//! ```text
//! Sequence<T>
//! ├── Buffer<T>   (Box<[T]>, length == capacity; sole owner of the slots)
//! │   └── reallocate()   (every capacity change goes through here)
//! ├── len         (live prefix of the buffer)
//! └── growth      (DEFAULT_CAPACITY = 1, GROWTH_FACTOR = 2, overflow checks)
//! ```
//!
//! # Copy and move
//!
//! - **Copy** ([`Clone`]): a fresh buffer with the source's *capacity*,
//!   holding clones of the live elements.
//! - **Move** ([`Sequence::take`], [`Sequence::move_from`]): the buffer
//!   changes owner without copying; the source is left empty with zero
//!   capacity and stays usable.
//!
//! # Contract violations
//!
//! `front`, `back` and `pop_back` on an empty sequence, and indexing at or
//! past `len`, panic with a [`SequenceError`] message. Non-panicking
//! variants (`get`, `pop`, `try_reserve`) return `Option`/`Result`.
//!
//! # Spare slots
//!
//! Spare slots hold `T::default()`. Shrinking ([`Sequence::resize`],
//! [`Sequence::clear`], [`Sequence::pop_back`]) resets the vacated slots, so
//! the removed elements are dropped immediately rather than lingering in
//! the buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod buffer;
pub mod error;
pub mod growth;
pub mod iter;
pub mod sequence;

// Public re-exports for the primary API surface.
pub use error::SequenceError;
pub use iter::IntoIter;
pub use sequence::Sequence;

/// Build a [`Sequence`] from a literal list, or from a value and a length.
///
/// - `sequence![a, b, c]`: the given elements in order; capacity equals the
///   element count.
/// - `sequence![value; n]`: `n` clones of `value`; capacity equals `n`.
/// - `sequence![]`: empty, with zero capacity.
///
/// ```rust
/// use sequence::sequence;
///
/// let s = sequence![1, 2, 3];
/// assert_eq!((s.len(), s.capacity()), (3, 3));
///
/// let z = sequence![0u8; 4];
/// assert_eq!(z, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::from([])
    };
    ($elem:expr; $n:expr) => {
        $crate::Sequence::with_value($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from([$($x),+])
    };
}
