// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawMemory, vec::Vector};

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Inserts `value` before position `index` and returns a reference to it.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`; the vector is unchanged.
    /// - `index == len` behaves exactly like [`push`](Vector::push), growth
    ///   included.
    ///
    /// Elements at `index..` shift one slot toward the end.
    ///
    /// # Examples
    /// ```
    /// # use raw_vector::Vector;
    /// let mut v: Vector<i32> = [1, 3, 4].into();
    /// v.insert(1, 2).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    /// assert!(v.insert(9, 0).is_err());
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        Ok(self.place(index, value))
    }

    /// Inserts the value produced by `f` before position `index`.
    ///
    /// The position is validated first (`f` is not called on
    /// [`Error::OutOfBounds`]), then `f` runs before any element moves, so a
    /// panicking `f` leaves the vector unchanged.
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        let value = f();
        Ok(self.place(index, value))
    }

    /// Writes an already-built `value` at `index <= len`.
    ///
    /// Nothing in here can panic except the allocation, which happens before
    /// any element is touched.
    pub(crate) fn place(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(index <= self.len);
        let len = self.len;

        if len == self.buf.capacity() {
            let mut new_buf: RawMemory<T> = RawMemory::with_capacity(self.grown_capacity());
            // SAFETY: `new_buf` holds at least `len + 1` slots. The new value
            // goes to `index`, the prefix `[0, index)` keeps its position and
            // the suffix `[index, len)` lands one slot further. Old and new
            // blocks are distinct allocations.
            unsafe {
                new_buf.offset_mut(index).write(value);
                ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), index);
                ptr::copy_nonoverlapping(
                    self.buf.offset(index),
                    new_buf.offset_mut(index + 1),
                    len - index,
                );
            }
            log::trace!(
                "grew storage from {} to {} slots",
                self.buf.capacity(),
                new_buf.capacity()
            );
            self.buf.swap(&mut new_buf);
        } else {
            let slot = self.buf.offset_mut(index);
            // SAFETY: `len < capacity`, so shifting `[index, len)` right by one
            // stays in bounds; `ptr::copy` handles the overlap. The vacated
            // slot at `index` is then overwritten without dropping.
            unsafe {
                if index < len {
                    ptr::copy(slot, slot.add(1), len - index);
                }
                slot.write(value);
            }
        }

        self.len = len + 1;
        // SAFETY: `index < len` now and the slot was just initialized.
        unsafe { &mut *self.buf.offset_mut(index) }
    }
}
