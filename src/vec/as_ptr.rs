// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T> Vector<T> {
    /// Returns a raw pointer to the first slot (the `begin` position).
    ///
    /// Only the first `len` slots hold live values. The pointer is dangling
    /// (but well aligned) while nothing is allocated. Any reallocation
    /// invalidates it; together with `as_ptr().add(len())` it bounds the live
    /// range `[begin, end)`, see also `<[T]>::as_ptr_range`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    ///
    /// Writing past `len` is allowed by the allocation but is not reflected
    /// in the vector's contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
}
