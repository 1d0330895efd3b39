//! The owned slot block behind a [`Sequence`](crate::Sequence).
//!
//! A [`Buffer`] is a boxed slice whose length *is* the capacity. Every slot
//! holds a real `T`: live elements occupy a prefix chosen by the owning
//! sequence, and spare slots hold `T::default()`. All capacity changes go
//! through [`Buffer::reallocate`].

use std::iter;
use std::mem;
use std::ops::Range;

use tracing::trace;

/// Exclusively owned, fixed-size block of element slots.
#[derive(Debug)]
pub(crate) struct Buffer<T> {
    slots: Box<[T]>,
}

impl<T> Buffer<T> {
    /// A buffer that owns no allocation. This is the moved-from state.
    pub(crate) fn unowned() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Adopt an already materialized block; its length becomes the capacity.
    pub(crate) fn from_boxed(slots: Box<[T]>) -> Self {
        Self { slots }
    }

    /// Number of slots in the block.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether this buffer owns no allocation.
    pub(crate) fn is_unowned(&self) -> bool {
        self.slots.is_empty()
    }

    /// The first `len` slots.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    pub(crate) fn live(&self, len: usize) -> &[T] {
        &self.slots[..len]
    }

    /// The first `len` slots, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    pub(crate) fn live_mut(&mut self, len: usize) -> &mut [T] {
        &mut self.slots[..len]
    }

    /// Mutable access to a single slot, live or spare.
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }

    /// Give up the block, consuming the buffer.
    pub(crate) fn into_boxed(self) -> Box<[T]> {
        self.slots
    }
}

impl<T: Default> Buffer<T> {
    /// A block of `capacity` default-valued slots.
    pub(crate) fn with_slots(capacity: usize) -> Self {
        Self {
            slots: iter::repeat_with(T::default).take(capacity).collect(),
        }
    }

    /// Move the first `len` elements into a fresh block of `new_capacity`
    /// slots and release the old block.
    ///
    /// Elements are moved, never cloned. The spare slots of the new block
    /// are built before the old block is touched, so a panicking
    /// `T::default()` leaves `self` unchanged.
    pub(crate) fn reallocate(&mut self, new_capacity: usize, len: usize) {
        debug_assert!(len <= new_capacity, "reallocation would drop live elements");
        debug_assert!(len <= self.capacity());

        let mut spare: Vec<T> = iter::repeat_with(T::default)
            .take(new_capacity - len)
            .collect();

        let old_capacity = self.capacity();
        let mut next = mem::take(&mut self.slots).into_vec();
        next.truncate(len);
        next.reserve_exact(new_capacity - len);
        next.append(&mut spare);
        self.slots = next.into_boxed_slice();

        trace!(old_capacity, new_capacity, len, "reallocated sequence buffer");
    }

    /// Reset the slots in `range` to `T::default()`, dropping their values.
    pub(crate) fn reset(&mut self, range: Range<usize>) {
        self.slots[range].fill_with(T::default);
    }
}

impl<T: Clone + Default> Buffer<T> {
    /// A fresh block with this buffer's capacity holding clones of the
    /// first `len` elements.
    pub(crate) fn clone_prefix(&self, len: usize) -> Self {
        let spare = iter::repeat_with(T::default).take(self.capacity() - len);
        Self {
            slots: self.slots[..len].iter().cloned().chain(spare).collect(),
        }
    }
}

impl<T: Clone> Buffer<T> {
    /// A block of `capacity` slots, each a clone of `value`.
    pub(crate) fn filled(capacity: usize, value: T) -> Self {
        Self {
            slots: vec![value; capacity].into_boxed_slice(),
        }
    }
}
