// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Vector` type and its inherent API.
//!
//! `Vector<T>` is a growable vector that owns a single [`RawMemory<T>`] block
//! and a logical length. It constructs and destroys elements inside that block
//! itself. Methods generally mirror slice/`Vec` semantics, with explicit
//! `Result`s for invalid positions.

mod as_ptr;
mod clone;
mod extend;
mod from;
mod guard;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod reserve;
mod resize;
mod slice;
mod split_off;

// Crate imports
use crate::raw::RawMemory;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, heap-allocated vector built on [`RawMemory`].
///
/// `Vector<T>` stores its elements contiguously in one raw block and tracks a
/// logical length `len <= capacity`. Conceptually:
///
/// - slots `[0, len)` hold live values;
/// - slots `[len, capacity)` are uninitialized and never read;
/// - element lifetimes (construction, drop) are managed here, while the
///   block itself is allocated and freed by `RawMemory`.
///
/// # Growth
///
/// Appending to a full vector doubles the capacity (an empty vector grows to
/// one slot). [`reserve`](Vector::reserve) and [`with_capacity`](Vector::with_capacity)
/// allocate exactly what they are asked for. Growth moves every live element
/// into the new block once; moves cannot fail, so an operation that grows
/// either fully succeeds or (on allocation failure) leaves the vector as it
/// was.
///
/// # Failure behavior
///
/// - **Never panics**: [`pop`](Vector::pop), [`swap_with`](Vector::swap_with),
///   moving the vector, [`core::mem::take`].
/// - **Unchanged on panic** (a panicking constructor or `clone`, or failed
///   allocation): [`push`](Vector::push), [`emplace_back`](Vector::emplace_back),
///   [`insert`](Vector::insert), [`emplace`](Vector::emplace),
///   [`reserve`](Vector::reserve), [`resize_with`](Vector::resize_with)
///   (length-wise), [`Clone::clone`], and [`Clone::clone_from`] when it has
///   to reallocate.
/// - **Valid but partially applied**: in-place [`Clone::clone_from`], and
///   [`erase`](Vector::erase)/[`truncate`](Vector::truncate) when an element's
///   `Drop` panics.
///
/// # Positions and indexing
///
/// - Positional operations take an index and report a bad one as
///   [`Error::OutOfBounds`](crate::Error::OutOfBounds): `insert`/`emplace`
///   accept `0..=len`, `erase`/`try_remove` accept `0..len`.
/// - Indexing (`v[i]`, `v[a..b]`) is a precondition: out of range **panics**,
///   exactly like slices. [`get`](Vector::get) is the checked alternative and
///   [`get_unchecked`](Vector::get_unchecked) the unchecked one.
///
/// # Examples
///
/// ```rust
/// use raw_vector::Vector;
///
/// let mut v = Vector::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
///
/// v.erase(1).unwrap();
/// v.insert(1, 20).unwrap();
/// assert_eq!(v.as_slice(), &[1, 20, 3]);
/// ```
pub struct Vector<T> {
    pub(crate) buf: RawMemory<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Returns the number of slots in the current storage.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of elements that can be added
    /// without reallocating.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns a reference to element `i` without bounds checking.
    ///
    /// # Safety
    ///
    /// `i < self.len()` must hold. Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.len, "index {i} out of bounds (len {})", self.len);
        // SAFETY: caller guarantees `i < len`, so the slot is live.
        unsafe { &*self.buf.offset(i) }
    }

    /// Returns a mutable reference to element `i` without bounds checking.
    ///
    /// # Safety
    ///
    /// `i < self.len()` must hold. Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len, "index {i} out of bounds (len {})", self.len);
        // SAFETY: caller guarantees `i < len`, so the slot is live.
        unsafe { &mut *self.buf.offset_mut(i) }
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drops elements from the end until `len == new_len`. No-op if
    /// `new_len >= len`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // Shrink first: a panicking `Drop` must not lead to a double drop.
        self.len = new_len;
        let tail = ptr::slice_from_raw_parts_mut(self.buf.offset_mut(new_len), tail_len);
        // SAFETY: `tail` covers the formerly live slots `[new_len, old_len)`,
        // which are no longer reachable through `self`.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges storage and length with `other` in O(1).
    ///
    /// No element moves in memory; references into either vector's block
    /// now refer into the other vector.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` are live and dropped exactly once here;
        // `RawMemory` then frees the block.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len)
            .field("capacity", &self.buf.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Vector<T> {}
impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
