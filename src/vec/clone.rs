// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    raw::RawMemory,
    vec::{guard::PartialInit, Vector},
};

impl<T: Clone> Clone for Vector<T> {
    /// Deep copy into storage sized exactly to `self.len()`.
    ///
    /// If a `clone` panics, the copies made so far are dropped and the panic
    /// propagates; `self` is never touched.
    fn clone(&self) -> Self {
        let mut buf: RawMemory<T> = RawMemory::with_capacity(self.len);
        // SAFETY: `buf` has exactly `len` uninitialized slots, one per source element.
        let mut init = unsafe { PartialInit::new(buf.as_mut_ptr()) };
        for item in self.as_slice() {
            // SAFETY: at most `len` writes.
            unsafe { init.write(item.clone()) };
        }
        let len = init.finish();
        Self { buf, len }
    }

    /// Copy assignment that reuses storage when it can.
    ///
    /// - If `source` has more elements than `self` has capacity, a full copy
    ///   is built first and swapped in; on panic `self` is unchanged.
    /// - Otherwise elements are assigned in place with `clone_from` over the
    ///   shared prefix, then surplus elements of `self` are dropped or the
    ///   remaining source elements are cloned onto the end. A panic part-way
    ///   leaves `self` valid but partially assigned.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.buf.capacity() {
            let mut copy = source.clone();
            self.swap_with(&mut copy);
            return;
        }

        let shared = self.len.min(source.len);
        for (dst, src) in self.as_mut_slice()[..shared]
            .iter_mut()
            .zip(&source.as_slice()[..shared])
        {
            dst.clone_from(src);
        }

        if source.len < self.len {
            self.truncate(source.len);
        } else {
            self.extend_from_slice(&source.as_slice()[shared..]);
        }
    }
}
