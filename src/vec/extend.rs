// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{guard::PartialInit, Vector};

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_additional(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> Vector<T> {
    /// Clones every element of `src` onto the end.
    ///
    /// Capacity grows geometrically if needed. If a `clone` panics, the
    /// clones already made are dropped and `len` is unchanged.
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        self.reserve_additional(src.len());
        // SAFETY: after `reserve_additional`, slots `[len, len + src.len())`
        // exist and are uninitialized.
        let mut tail = unsafe { PartialInit::new(self.buf.offset_mut(self.len)) };
        for item in src {
            // SAFETY: at most `src.len()` writes.
            unsafe { tail.write(item.clone()) };
        }
        self.len += tail.finish();
    }
}
