// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T> Vector<T> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `buf[..len]` are live values and `len <= capacity`.
        // The base pointer is non-null and aligned even when nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, with exclusive access through `&mut self`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}
