// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Core imports
use core::{mem, ptr};

/// Tracks values written into a run of uninitialized slots.
///
/// If dropped before [`PartialInit::finish`] (e.g. because a constructor or
/// `clone` panicked), every value written so far is dropped again, so the
/// owning vector never sees a half-built tail.
pub(crate) struct PartialInit<T> {
    start: *mut T,
    initialized: usize,
}

impl<T> PartialInit<T> {
    /// # Safety
    ///
    /// `start` must point to uninitialized slots with room for every value
    /// later passed to [`PartialInit::write`], and nothing else may touch
    /// those slots while the guard is alive.
    #[inline]
    pub(crate) unsafe fn new(start: *mut T) -> Self {
        Self {
            start,
            initialized: 0,
        }
    }

    /// # Safety
    ///
    /// The next slot must be in bounds (see [`PartialInit::new`]).
    #[inline]
    pub(crate) unsafe fn write(&mut self, value: T) {
        // SAFETY: guaranteed in bounds and uninitialized by the caller.
        unsafe { self.start.add(self.initialized).write(value) };
        self.initialized += 1;
    }

    /// Commits the written values and returns how many there are.
    #[inline]
    pub(crate) fn finish(self) -> usize {
        let n = self.initialized;
        mem::forget(self);
        n
    }
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `initialized` values were written from `start`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized));
        }
    }
}
