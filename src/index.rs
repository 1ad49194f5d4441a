// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Vector`](crate::Vector).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - out-of-bounds access is a caller bug and **panics**; it is never
//!   reported as a recoverable error;
//! - all standard range forms are supported, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`.
//!
//! Use [`Vector::get`](crate::Vector::get) for checked access or
//! [`Vector::get_unchecked`](crate::Vector::get_unchecked) to skip the check.

// Crate imports
use crate::vec::Vector;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
