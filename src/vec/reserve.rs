// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{capacity_overflow, RawMemory},
    vec::Vector,
};

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Ensures `capacity() >= new_capacity`.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity, not the
    /// additional element count. If `new_capacity <= capacity()` this is a
    /// no-op; otherwise exactly `new_capacity` slots are allocated and the
    /// live elements are moved across. `len` never changes.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; allocation failure goes through
    /// `handle_alloc_error`. In both cases the vector is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.buf.capacity() {
            return;
        }
        self.relocate_into(RawMemory::with_capacity(new_capacity));
    }

    /// Fallible variant of [`reserve`](Vector::reserve).
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocFailed`] and
    /// leaves the vector unchanged on failure.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.buf.capacity() {
            return Ok(());
        }
        let new_buf = RawMemory::try_with_capacity(new_capacity)?;
        self.relocate_into(new_buf);
        Ok(())
    }

    /// Reallocates so that `capacity() == len()`. No-op when already tight.
    pub fn shrink_to_fit(&mut self) {
        if self.buf.capacity() > self.len {
            log::debug!(
                "shrinking storage from {} to {} slots",
                self.buf.capacity(),
                self.len
            );
            self.relocate_into(RawMemory::with_capacity(self.len));
        }
    }

    /// Makes room for `additional` more elements, growing geometrically.
    pub(crate) fn reserve_additional(&mut self, additional: usize) {
        let required = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        if required > self.buf.capacity() {
            self.reserve(required.max(self.grown_capacity()));
        }
    }

    /// Capacity to grow to when a full vector needs one more slot.
    #[inline]
    pub(crate) fn grown_capacity(&self) -> usize {
        match self.buf.capacity() {
            0 => 1,
            cap => cap.checked_mul(2).unwrap_or_else(|| capacity_overflow()),
        }
    }

    /// Moves the live elements into `new_buf` and adopts it as storage.
    ///
    /// Moving a Rust value is a bitwise copy that cannot fail, so relocation
    /// always moves and never needs to fall back to cloning. The previous
    /// block is freed when `new_buf` (now holding it) goes out of scope; its
    /// slots are moved-from and are not dropped.
    pub(crate) fn relocate_into(&mut self, mut new_buf: RawMemory<T>) {
        debug_assert!(new_buf.capacity() >= self.len);
        log::trace!(
            "relocating {} elements from {} to {} slots",
            self.len,
            self.buf.capacity(),
            new_buf.capacity()
        );
        // SAFETY: `buf[..len]` are live, `new_buf` has room for `len` values
        // and the two blocks are distinct allocations.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len) };
        self.buf.swap(&mut new_buf);
    }
}
