//! The growable contiguous [`Sequence`] container.
//!
//! A `Sequence<T>` owns exactly one [`Buffer`] and a length. The live
//! elements are the first `len` slots; the remaining `capacity - len` slots
//! are spare and always hold `T::default()`. Appending into a full buffer
//! doubles its capacity.
//!
//! Element types need `Default` for every operation that materializes slots
//! (construction, growth, shrinking, removal) and `Clone` for copies.
//! Queries and element access have no bounds.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

use crate::buffer::Buffer;
use crate::error::{fail, SequenceError};
use crate::growth;
use crate::iter::IntoIter;

/// A growable, contiguous, heap-allocated sequence of `T`.
///
/// ```rust
/// use sequence::{sequence, Sequence};
///
/// let mut s = Sequence::new();
/// s.push_back(10);
/// s.push_back(20);
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.capacity(), 2);
/// assert_eq!(*s.back(), 20);
///
/// let t = sequence![1, 2, 3];
/// assert_eq!(t.iter().sum::<i32>(), 6);
/// ```
pub struct Sequence<T> {
    buf: Buffer<T>,
    /// Number of live elements; always `<= buf.capacity()`.
    len: usize,
}

impl<T> Sequence<T> {
    /// The moved-from state: no buffer, zero length and capacity.
    fn unowned() -> Self {
        Self {
            buf: Buffer::unowned(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the sequence holds a non-empty slot allocation.
    ///
    /// This does not tell a sequence emptied by [`take`] or [`move_from`]
    /// apart from one built with zero capacity (`sequence![]`,
    /// `with_value(0, _)`): both own an empty block and report `false`. It
    /// turns `true` once either grows.
    ///
    /// [`take`]: Sequence::take
    /// [`move_from`]: Sequence::move_from
    pub fn has_allocation(&self) -> bool {
        !self.buf.is_unowned()
    }

    /// Move the buffer out into a new sequence, leaving `self` empty.
    ///
    /// No element is copied. Afterwards `self` has zero length and zero
    /// capacity; it stays usable and grows again on the next append.
    ///
    /// ```rust
    /// use sequence::sequence;
    ///
    /// let mut a = sequence![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::unowned())
    }

    /// Move-assign: release this sequence's buffer and adopt `source`'s
    /// buffer, length and capacity. `source` is left empty and unowned.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// First live element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(first) => first,
            None => fail(SequenceError::Empty { operation: "front" }),
        }
    }

    /// Mutable reference to the first live element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(first) => first,
            None => fail(SequenceError::Empty {
                operation: "front_mut",
            }),
        }
    }

    /// Last live element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => fail(SequenceError::Empty { operation: "back" }),
        }
    }

    /// Mutable reference to the last live element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => fail(SequenceError::Empty {
                operation: "back_mut",
            }),
        }
    }

    /// The live range `[0, len)`.
    pub fn as_slice(&self) -> &[T] {
        self.buf.live(self.len)
    }

    /// The live range `[0, len)`, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.live_mut(self.len)
    }

    /// Consume the sequence and return its live elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = self.buf.into_boxed().into_vec();
        elements.truncate(self.len);
        elements
    }
}

impl<T: Default> Sequence<T> {
    /// Create an empty sequence with [`growth::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(growth::DEFAULT_CAPACITY)
    }

    /// Create an empty sequence with exactly `capacity` slots.
    ///
    /// Every slot is filled with `T::default()`, which costs one call per
    /// slot even when `T` is zero-sized.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`growth::max_capacity`] for `T`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = expect_capacity(growth::checked_capacity::<T>(capacity));
        Self {
            buf: Buffer::with_slots(capacity),
            len: 0,
        }
    }

    /// Single choke point for every capacity change.
    fn reallocate(&mut self, new_capacity: usize) {
        let new_capacity = expect_capacity(growth::checked_capacity::<T>(new_capacity));
        self.buf.reallocate(new_capacity, self.len);
    }

    /// Ensure room for at least `capacity` slots in total.
    ///
    /// Reallocates to exactly `capacity` when it exceeds the current
    /// capacity; never shrinks. New slots are filled with `T::default()`
    /// one at a time, zero-sized `T` included.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`growth::max_capacity`] for `T`.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Like [`reserve`](Sequence::reserve), but reports an unrepresentable
    /// capacity instead of panicking. The sequence is unchanged on error.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), SequenceError> {
        if capacity > self.capacity() {
            growth::checked_capacity::<T>(capacity)?;
            self.reallocate(capacity);
        }
        Ok(())
    }

    /// Set the length to `new_len`.
    ///
    /// Growing past the capacity reallocates to exactly `new_len`; new
    /// elements are `T::default()`. Shrinking keeps the capacity and the
    /// buffer, and drops the removed elements by resetting their slots.
    ///
    /// ```rust
    /// use sequence::sequence;
    ///
    /// let mut s = sequence![1, 2, 3, 4, 5];
    /// s.resize(2);
    /// assert_eq!((s.len(), s.capacity()), (2, 5));
    /// s.resize(5);
    /// assert_eq!(s, [1, 2, 0, 0, 0]);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.len {
            if new_len > self.capacity() {
                self.reallocate(new_len);
            }
            // Spare slots already hold defaults.
            self.len = new_len;
        } else {
            self.truncate(new_len);
        }
    }

    /// Like [`resize`](Sequence::resize), but new elements are produced by
    /// calling `fill`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        if new_len > self.len {
            if new_len > self.capacity() {
                self.reallocate(new_len);
            }
            while self.len < new_len {
                *self.buf.slot_mut(self.len) = fill();
                self.len += 1;
            }
        } else {
            self.truncate(new_len);
        }
    }

    fn truncate(&mut self, new_len: usize) {
        self.buf.reset(new_len..self.len);
        self.len = new_len;
    }

    /// Append `value`, doubling the capacity first if the buffer is full.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity exceeds [`growth::max_capacity`].
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            let next = expect_capacity(growth::grown_capacity::<T>(self.capacity()));
            self.reallocate(next);
        }
        *self.buf.slot_mut(self.len) = value;
        self.len += 1;
    }

    /// Remove and return the last element. The capacity is kept.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        if self.len == 0 {
            fail(SequenceError::Empty {
                operation: "pop_back",
            });
        }
        self.len -= 1;
        mem::take(self.buf.slot_mut(self.len))
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        Some(self.pop_back())
    }

    /// Drop every live element. The buffer and capacity are retained.
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

impl<T: Clone> Sequence<T> {
    /// Create a sequence of `len` clones of `value`; capacity equals `len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`growth::max_capacity`] for `T`.
    pub fn with_value(len: usize, value: T) -> Self {
        let len = expect_capacity(growth::checked_capacity::<T>(len));
        Self {
            buf: Buffer::filled(len, value),
            len,
        }
    }
}

fn expect_capacity(result: Result<usize, SequenceError>) -> usize {
    match result {
        Ok(capacity) => capacity,
        Err(err) => fail(err),
    }
}

impl<T: Default> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for Sequence<T> {
    /// Copy the live elements into a fresh buffer with the same capacity.
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone_prefix(self.len),
            len: self.len,
        }
    }

    /// Copy-assign: the previous buffer is released and replaced by a fresh
    /// copy of `source`, including its capacity.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(element) => element,
            None => fail(SequenceError::IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(element) => element,
            None => fail(SequenceError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Sequence<U>> for Sequence<T> {
    fn eq(&self, other: &Sequence<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Sequence<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Sequence<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Sequence<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    /// Adopt the elements; capacity equals the element count.
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            buf: Buffer::from_boxed(values.into_boxed_slice()),
            len,
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_vec()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_vec())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
