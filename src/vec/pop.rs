// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T> Vector<T> {
    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// Never reallocates; other elements keep their addresses.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live; lowering `len` first
        // hands ownership of it to us.
        Some(unsafe { self.buf.offset(self.len).read() })
    }
}
