// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::Vector};

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;
        let slot = self.buf.offset_mut(index);

        // SAFETY: `index < len`, so `slot` is live. After reading it out, the
        // tail `[index + 1, len)` shifts left over it and the last slot
        // becomes uninitialized, which the new `len` reflects.
        unsafe {
            let out = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.len = len - 1;
            Some(out)
        }
    }

    /// Fallible variant of [`remove`](Vector::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Drops the element at `index` and closes the gap.
    ///
    /// Returns the position of the element that now occupies `index`, which
    /// equals the new `len()` when the last element was erased. Positions
    /// before `index` are unaffected; positions at or after it now refer to
    /// the following elements.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use raw_vector::Vector;
    /// let mut v: Vector<i32> = [1, 2, 3, 4].into();
    /// assert_eq!(v.erase(1), Ok(1));
    /// assert_eq!(v.as_slice(), &[1, 3, 4]);
    /// ```
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<usize, Error> {
        let removed = self.try_remove(index)?;
        drop(removed);
        Ok(index)
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place.
    ///
    /// Does not preserve order. Returns `None` when `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;

        // SAFETY: both `index` and `last` were live before `len` dropped. The
        // value at `index` is read out, then the last value is moved into the
        // hole (a no-op move when they are the same slot is skipped).
        unsafe {
            let out = self.buf.offset(index).read();
            if index != last {
                let tail = self.buf.offset(last).read();
                self.buf.offset_mut(index).write(tail);
            }
            Some(out)
        }
    }
}
