// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{raw::RawMemory, vec::Vector};

impl<T> Vector<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawMemory::new(),
            len: 0,
        }
    }

    /// Constructs an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; see [`RawMemory::with_capacity`].
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawMemory::with_capacity(capacity),
            len: 0,
        }
    }

    /// Constructs a vector holding `len` values of `T::default()`.
    ///
    /// Capacity is exactly `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize(len);
        v
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}
