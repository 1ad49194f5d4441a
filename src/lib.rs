// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `raw-vector`
//!
//! A `no_std` + `alloc`, growable, heap-allocated vector written from
//! scratch on top of a raw memory buffer.
//!
//! The crate is split into two types with a one-way dependency:
//!
//! - [`RawMemory<T>`] owns one block of **uninitialized** slots. It allocates
//!   and frees, and computes slot addresses. It never constructs or drops a
//!   `T`, and it cannot be cloned.
//! - [`Vector<T>`] owns one `RawMemory<T>` plus a length. It constructs,
//!   moves and drops elements inside the block and implements every sequence
//!   operation: indexing, `push`/`emplace_back`, `pop`, `insert`/`emplace`,
//!   `erase`, `reserve`, `resize`, clone and clone-assignment, swap.
//!
//! ## When to use this crate
//!
//! Most code should use `alloc::vec::Vec`. This crate is for cases where the
//! allocation and panic-safety behavior must be spelled out and auditable:
//!
//! - capacity grows by doubling (`0 -> 1 -> 2 -> 4 ...`) on append, and is
//!   exact on [`Vector::reserve`] / [`Vector::with_capacity`];
//! - every growth path builds the new element and the new block before the
//!   old block is touched, so failures leave the vector unchanged;
//! - invalid positions are reported as [`Error::OutOfBounds`] instead of
//!   panicking.
//!
//! ## Errors, panics and failure guarantees
//!
//! - **Recoverable**: `insert`/`emplace`/`erase`/`try_remove`/`split_off`
//!   with a bad position return [`Error::OutOfBounds`] and change nothing.
//!   [`Vector::try_reserve`] reports [`Error::CapacityOverflow`] and
//!   [`Error::AllocFailed`].
//! - **Precondition violations**: `v[i]` with `i >= len` panics, like a
//!   slice. It is a bug in the caller, not a condition to handle.
//! - **Out of memory** on infallible paths goes through
//!   `alloc::alloc::handle_alloc_error`.
//! - **Panicking element code** (`Default`, `Clone`, an `emplace` closure)
//!   unwinds through the vector. Values built so far are dropped exactly
//!   once; see [`Vector`] for which operations leave the vector unchanged.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `Vector<T>` as a sequence.
//!
//! ## Logging
//!
//! Storage events (relocation into a new block, shrinking, allocation
//! failure) are reported through the [`log`](https://docs.rs/log) facade at
//! `trace`/`debug`/`warn`. Per-element operations never log.
//!
//! ## Example
//!
//! ```rust
//! use raw_vector::{Error, Vector};
//!
//! let mut v: Vector<u8> = Vector::new();
//! v.push(1);
//! v.push(3);
//! v.insert(1, 2).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.insert(10, 0), Err(Error::OutOfBounds));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use raw::RawMemory;
pub use vec::Vector;
