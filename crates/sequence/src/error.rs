//! Sequence error types.
//!
//! Contract violations (empty access, bad index) are programmer errors and
//! panic through [`fail`]. The same enum is returned by value from the
//! fallible `try_*` APIs.

use std::error::Error;
use std::fmt;

/// Errors that can occur during sequence operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An operation that needs at least one live element ran on an empty
    /// sequence.
    Empty {
        /// Name of the offending operation (e.g. `"pop_back"`).
        operation: &'static str,
    },
    /// Indexed access outside the live range `[0, len)`.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the access.
        len: usize,
    },
    /// A capacity request that cannot be represented for the element type.
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
        /// Largest capacity the element type allows.
        max: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { operation } => {
                write!(f, "{operation} called on an empty sequence")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index out of bounds: the len is {len} but the index is {index}")
            }
            Self::CapacityOverflow { requested, max } => {
                write!(
                    f,
                    "sequence capacity overflow: requested {requested} slots, max {max} slots"
                )
            }
        }
    }
}

impl Error for SequenceError {}

/// Abort the current operation with a contract violation.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(err: SequenceError) -> ! {
    panic!("{err}")
}
