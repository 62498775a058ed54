//! Raw allocation capability consumed by the heap backends.
//!
//! Heap backends need exactly three things from an allocator: a zeroed
//! region, a resize that preserves the common prefix, and a release.
//! [`RawAlloc`] is that capability and nothing more.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Allocate / reallocate / free over raw bytes.
///
/// # Safety
///
/// Implementors must return regions that are valid for reads and writes of
/// the requested size and alignment until they are passed to
/// [`free`](Self::free) or [`reallocate`](Self::reallocate).
/// [`allocate_zeroed`](Self::allocate_zeroed) must return all-zero bytes and
/// [`reallocate`](Self::reallocate) must preserve `min(old, new)` bytes.
/// Returning `None` signals failure and leaves any input region untouched.
pub unsafe trait RawAlloc {
    /// Allocate a zero-filled region for `layout`.
    ///
    /// # Safety
    ///
    /// `layout.size()` must be non-zero.
    unsafe fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resize a region to `new_size` bytes with the same alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `old` and not yet
    /// freed. `new_size` must be non-zero and, rounded up to `old.align()`,
    /// must not exceed `isize::MAX`.
    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: Layout, new_size: usize)
        -> Option<NonNull<u8>>;

    /// Release a region.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `layout` and not
    /// yet freed.
    unsafe fn free(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The process-wide allocator from [`std::alloc`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Global;

// SAFETY: forwards to `std::alloc`, which upholds the trait contract.
unsafe impl RawAlloc for Global {
    unsafe fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() > 0);
        // SAFETY: the caller guarantees a non-zero size.
        NonNull::new(unsafe { alloc::alloc_zeroed(layout) })
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        debug_assert!(new_size > 0);
        // SAFETY: the caller guarantees `ptr` came from `alloc_zeroed` with
        // `old`, and that `new_size` is non-zero and in range.
        NonNull::new(unsafe { alloc::realloc(ptr.as_ptr(), old, new_size) })
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: the caller guarantees `ptr` is live and was allocated
        // with `layout`.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

/// [`Global`] with a ceiling on the size of any single request.
///
/// Requests above `max_request_bytes` fail without reaching the process
/// allocator. Built from [`StoreConfig`](crate::config::StoreConfig); also
/// the simplest way to exercise allocation failure deterministically.
///
/// ```
/// use skein_store::{Capped, Heap, StoreError};
///
/// let err = Heap::<u32, _>::open_heap_in(8, Capped::new(16)).unwrap_err();
/// assert_eq!(err, StoreError::AllocationFailed { requested: 8, element_size: 4 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capped {
    max_request_bytes: usize,
}

impl Capped {
    /// Refuse any request larger than `max_request_bytes`.
    pub fn new(max_request_bytes: usize) -> Self {
        Self { max_request_bytes }
    }

    /// The configured ceiling in bytes.
    pub fn max_request_bytes(&self) -> usize {
        self.max_request_bytes
    }
}

// SAFETY: either refuses the request or forwards it unchanged to `Global`.
unsafe impl RawAlloc for Capped {
    unsafe fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() > self.max_request_bytes {
            return None;
        }
        // SAFETY: same contract as ours.
        unsafe { Global.allocate_zeroed(layout) }
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        if new_size > self.max_request_bytes {
            return None;
        }
        // SAFETY: same contract as ours; every region we hand out comes
        // from `Global`.
        unsafe { Global.reallocate(ptr, old, new_size) }
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: every region we hand out comes from `Global`.
        unsafe { Global.free(ptr, layout) }
    }
}
