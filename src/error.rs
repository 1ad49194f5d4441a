// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `Vector` and `RawMemory`.
//!
//! These errors cover the recoverable conditions only: an invalid position
//! handed to a positional operation, and capacity requests made through the
//! fallible `try_*` entry points. Out-of-bounds indexing is not an error value,
//! it panics. They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`Vector`](crate::Vector) and
/// [`RawMemory`](crate::RawMemory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A position was outside the range accepted by the operation.
    ///
    /// `insert`/`emplace`/`split_off` accept `0..=len`; `erase`/`try_remove`
    /// accept `0..len`.
    OutOfBounds,
    /// The requested capacity does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// The global allocator could not provide the requested block.
    ///
    /// Only returned by the fallible paths ([`Vector::try_reserve`](crate::Vector::try_reserve),
    /// [`RawMemory::try_with_capacity`](crate::RawMemory::try_with_capacity)).
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("position out of bounds"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed => f.write_str("memory allocation failed"),
        }
    }
}

impl CoreError for Error {}
