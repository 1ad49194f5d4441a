// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::Vector};

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)` (capacity unchanged),
    /// - the returned vector holds the tail `[at..len)` with capacity exactly
    ///   `len - at`.
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfBounds);
        }

        let tail_len = len - at;
        let mut other = Self::with_capacity(tail_len);

        // SAFETY: `[at, len)` are live and move into `other`'s fresh storage;
        // `self.len` drops to `at` so they are not owned twice.
        unsafe { ptr::copy_nonoverlapping(self.buf.offset(at), other.buf.as_mut_ptr(), tail_len) };
        self.len = at;
        other.len = tail_len;

        Ok(other)
    }
}
