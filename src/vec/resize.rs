// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{guard::PartialInit, Vector};

impl<T> Vector<T> {
    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// See [`resize_with`](Vector::resize_with) for the growth and failure
    /// behavior.
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// - Shrinking drops the trailing elements (like [`truncate`](Vector::truncate)).
    /// - Growing first reserves exactly `new_len` slots, then constructs the
    ///   new elements in order.
    ///
    /// `len` is only updated once every new element exists. If `f` panics,
    /// the elements it already produced are dropped and `len` is unchanged
    /// (capacity may have grown).
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);

        let additional = new_len - self.len;
        // SAFETY: after `reserve`, slots `[len, new_len)` exist and are
        // uninitialized; the guard writes at most `additional` of them.
        let mut tail = unsafe { PartialInit::new(self.buf.offset_mut(self.len)) };
        for _ in 0..additional {
            // SAFETY: fewer than `additional` values written so far.
            unsafe { tail.write(f()) };
        }
        self.len += tail.finish();
    }
}
