// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        for item in src {
            v.push(item);
        }
        v
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(src: &[T]) -> Self {
        let mut v = Self::with_capacity(src.len());
        v.extend_from_slice(src);
        v
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for Vector<T> {
    fn from(src: &[T; N]) -> Self {
        Self::from(&src[..])
    }
}
