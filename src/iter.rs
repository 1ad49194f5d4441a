// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Vector`](crate::Vector).
//!
//! - `IntoIter<T>` takes over the vector's storage and yields by value; it
//!   supports `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//!   Elements not yielded are dropped with the iterator.
//! - `&Vector` and `&mut Vector` iterate as slices.
//! - `FromIterator` collects by pushing, with an up-front reservation from
//!   the iterator's lower size hint.

// Crate imports
use crate::{raw::RawMemory, vec::Vector};

// Core imports
use core::{fmt, iter::FusedIterator, mem, mem::ManuallyDrop, ptr};

/// Owned iterator returned by `Vector::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T> {
    buf: RawMemory<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are the still-live slots.
        unsafe { core::slice::from_raw_parts(self.buf.offset(self.front), self.back - self.front) }
    }

    /// Drops the next `n` elements from the front (fewer if not enough remain).
    fn drop_front(&mut self, n: usize) {
        let n = n.min(self.back - self.front);
        let skipped = ptr::slice_from_raw_parts_mut(self.buf.offset_mut(self.front), n);
        self.front += n;
        // SAFETY: those slots were live and are now outside `[front, back)`.
        unsafe { ptr::drop_in_place(skipped) };
    }

    /// Drops the last `n` elements (fewer if not enough remain).
    fn drop_back(&mut self, n: usize) {
        let n = n.min(self.back - self.front);
        self.back -= n;
        let skipped = ptr::slice_from_raw_parts_mut(self.buf.offset_mut(self.back), n);
        // SAFETY: as in `drop_front`.
        unsafe { ptr::drop_in_place(skipped) };
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside the live range and is no longer.
            Some(unsafe { self.buf.offset(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.drop_front(n);
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old last live slot, now outside the live range.
            Some(unsafe { self.buf.offset(self.back).read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.drop_back(n);
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        self.drop_front(self.back - self.front);
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        // The vector's own drop must not run: its elements now belong to the
        // iterator. What is left behind is an empty, unallocated `RawMemory`.
        let mut this = ManuallyDrop::new(self);
        let buf = mem::take(&mut this.buf);
        IntoIter {
            buf,
            front: 0,
            back: this.len,
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
