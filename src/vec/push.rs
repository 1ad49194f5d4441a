// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T> Vector<T> {
    /// Appends `value` and returns a reference to it.
    ///
    /// When the vector is full, capacity doubles (an empty vector grows to 1).
    /// The value is written into its final slot in the new storage before the
    /// existing elements are relocated, so a failed allocation leaves the
    /// vector untouched. Amortized O(1).
    ///
    /// # Examples
    /// ```
    /// # use raw_vector::Vector;
    /// let mut v = Vector::new();
    /// *v.push(1) += 10;
    /// v.push(2);
    /// assert_eq!(v.as_slice(), &[11, 2]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> &mut T {
        self.place(self.len, value)
    }

    /// Appends the value produced by `f` and returns a reference to it.
    ///
    /// `f` runs before anything else happens; if it panics the vector is left
    /// exactly as it was.
    #[inline]
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = f();
        self.place(self.len, value)
    }
}
