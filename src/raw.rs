// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `RawMemory` type: an owned block of uninitialized slots.
//!
//! `RawMemory<T>` allocates room for `capacity` values of `T` and frees it on
//! drop. It never constructs, reads or destroys a `T`; tracking which slots
//! hold live values is entirely the owner's business (see
//! [`Vector`](crate::Vector)).
//!
//! Ownership of the block only moves by Rust move or by [`RawMemory::swap`].
//! `RawMemory` does not implement `Clone`.

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, fmt, marker::PhantomData, mem, ptr::NonNull};

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error};

/// An owned, fixed-capacity block of uninitialized memory for `T`.
///
/// # Invariants
///
/// - `capacity == 0` means no block is owned; the pointer is a dangling,
///   well-aligned placeholder that is never freed.
/// - Otherwise exactly `capacity` slots starting at the base pointer are
///   addressable. For zero-sized `T` nothing is ever allocated, but the
///   requested capacity is still recorded.
///
/// # Examples
///
/// ```rust
/// use raw_vector::RawMemory;
///
/// let mut raw: RawMemory<u32> = RawMemory::with_capacity(4);
/// assert_eq!(raw.capacity(), 4);
///
/// // Slots are uninitialized; the caller decides what lives where.
/// unsafe {
///     raw.offset_mut(0).write(7);
///     assert_eq!(raw.offset(0).read(), 7);
/// }
/// ```
pub struct RawMemory<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawMemory<T>` uniquely owns its block, like `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for RawMemory<T> {}
// SAFETY: shared access only hands out `*const T`.
unsafe impl<T: Sync> Sync for RawMemory<T> {}

enum AllocFailure {
    Overflow,
    Exhausted(Layout),
}

impl<T> RawMemory<T> {
    /// Constructs empty storage. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates storage for `capacity` slots.
    ///
    /// `capacity == 0` yields the same empty state as [`RawMemory::new`].
    ///
    /// # Panics
    ///
    /// Panics with `"capacity overflow"` if `capacity * size_of::<T>()`
    /// exceeds `isize::MAX`. If the allocator itself fails, this goes through
    /// [`handle_alloc_error`], which aborts by default.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::allocate(capacity) {
            Ok(ptr) => Self {
                ptr,
                capacity,
                _marker: PhantomData,
            },
            Err(AllocFailure::Overflow) => capacity_overflow(),
            Err(AllocFailure::Exhausted(layout)) => handle_alloc_error(layout),
        }
    }

    /// Fallible variant of [`RawMemory::with_capacity`].
    ///
    /// Returns [`Error::CapacityOverflow`] when the byte size does not fit
    /// and [`Error::AllocFailed`] when the allocator returns null.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        match Self::allocate(capacity) {
            Ok(ptr) => Ok(Self {
                ptr,
                capacity,
                _marker: PhantomData,
            }),
            Err(AllocFailure::Overflow) => Err(Error::CapacityOverflow),
            Err(AllocFailure::Exhausted(_)) => Err(Error::AllocFailed),
        }
    }

    fn allocate(capacity: usize) -> Result<NonNull<T>, AllocFailure> {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            return Ok(NonNull::dangling());
        }
        let layout = Layout::array::<T>(capacity).map_err(|_| AllocFailure::Overflow)?;
        // SAFETY: `capacity > 0` and `T` is not zero-sized, so `layout` has a
        // non-zero size.
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr.cast::<T>()).ok_or_else(|| {
            log::warn!(
                "allocation of {} bytes for {} slots failed",
                layout.size(),
                capacity
            );
            AllocFailure::Exhausted(layout)
        })
    }

    /// Number of slots (not bytes).
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Base pointer of the block.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable base pointer of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `offset`.
    ///
    /// `offset == capacity` is the one-past-end address: valid to compute
    /// and compare, never to dereference.
    ///
    /// # Panics
    ///
    /// Panics if `offset > capacity`.
    #[inline]
    #[track_caller]
    pub fn offset(&self, offset: usize) -> *const T {
        assert!(
            offset <= self.capacity,
            "offset {offset} past end of storage with capacity {}",
            self.capacity
        );
        // SAFETY: `offset <= capacity`, so the result stays within (or one
        // past) the allocated block.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Mutable address of slot `offset`. Same rules as [`RawMemory::offset`].
    #[inline]
    #[track_caller]
    pub fn offset_mut(&mut self, offset: usize) -> *mut T {
        assert!(
            offset <= self.capacity,
            "offset {offset} past end of storage with capacity {}",
            self.capacity
        );
        // SAFETY: see `offset`.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Exchanges blocks and capacities with `other`. O(1), never panics.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Default for RawMemory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawMemory<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.capacity) {
            // SAFETY: the block was allocated in `allocate` with this exact
            // layout and is freed once, here.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> fmt::Debug for RawMemory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMemory")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[cfg(test)]
mod tests {
    // Imports
    use super::RawMemory;
    use crate::Error;

    #[test]
    fn test_new_and_zero_capacity_are_empty() {
        let a: RawMemory<u64> = RawMemory::new();
        let b: RawMemory<u64> = RawMemory::with_capacity(0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 0);
        assert_eq!(a.offset(0), a.as_ptr());
    }

    #[test]
    fn test_slots_are_writable_up_to_capacity() {
        let mut raw: RawMemory<u64> = RawMemory::with_capacity(3);
        assert_eq!(raw.capacity(), 3);
        unsafe {
            for i in 0..3 {
                raw.offset_mut(i).write(i as u64 * 10);
            }
            for i in 0..3 {
                assert_eq!(raw.offset(i).read(), i as u64 * 10);
            }
        }
    }

    #[test]
    fn test_one_past_end_is_addressable() {
        let raw: RawMemory<u32> = RawMemory::with_capacity(4);
        let end = raw.offset(4);
        assert_eq!(end as usize - raw.as_ptr() as usize, 4 * 4);
    }

    #[test]
    #[should_panic(expected = "past end of storage")]
    fn test_offset_beyond_end_panics() {
        let raw: RawMemory<u32> = RawMemory::with_capacity(4);
        let _ = raw.offset(1000);
    }

    #[test]
    #[should_panic(expected = "past end of storage")]
    fn test_offset_mut_beyond_end_panics() {
        let mut raw: RawMemory<u32> = RawMemory::with_capacity(4);
        let _ = raw.offset_mut(5);
    }

    #[test]
    #[should_panic(expected = "past end of storage")]
    fn test_offset_on_empty_storage_panics() {
        let raw: RawMemory<u32> = RawMemory::new();
        let _ = raw.offset(1);
    }

    #[test]
    fn test_swap_exchanges_blocks() {
        let mut a: RawMemory<u8> = RawMemory::with_capacity(2);
        let mut b: RawMemory<u8> = RawMemory::with_capacity(8);
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!(a.capacity(), 8);
        assert_eq!(b.capacity(), 2);
        assert_eq!(a.as_ptr(), pb);
        assert_eq!(b.as_ptr(), pa);
    }

    #[test]
    fn test_move_transfers_ownership() {
        let raw: RawMemory<u16> = RawMemory::with_capacity(5);
        let p = raw.as_ptr();
        let moved = raw;
        assert_eq!(moved.as_ptr(), p);
        assert_eq!(moved.capacity(), 5);
    }

    #[test]
    fn test_try_with_capacity_reports_overflow() {
        let err = RawMemory::<u64>::try_with_capacity(usize::MAX).unwrap_err();
        assert_eq!(err, Error::CapacityOverflow);
        assert!(RawMemory::<u64>::try_with_capacity(16).is_ok());
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_with_capacity_panics_on_overflow() {
        let _ = RawMemory::<u64>::with_capacity(usize::MAX);
    }

    #[test]
    fn test_zero_sized_type_records_capacity_without_allocating() {
        let raw: RawMemory<()> = RawMemory::with_capacity(1000);
        assert_eq!(raw.capacity(), 1000);
        assert_eq!(raw.as_ptr(), core::ptr::NonNull::<()>::dangling().as_ptr() as *const ());
    }
}
