//! Owned raw element buffer.
//!
//! [`RawBuf`] is the only place in the workspace that turns allocator
//! pointers into element slices. It keeps three invariants:
//!
//! - `ptr` is dangling iff the region's byte size is zero, otherwise it was
//!   returned by `alloc` for `Layout::array::<T>(cap)`;
//! - all `cap` elements are initialised (zero-filled on allocation and on
//!   growth, and `T: Element` is valid when all-zero);
//! - a failed resize leaves the buffer exactly as it was.

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;
use std::slice;

use skein_core::Element;

use crate::alloc::RawAlloc;
use crate::error::StoreError;

pub(crate) struct RawBuf<T, A: RawAlloc> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _owns: PhantomData<T>,
}

impl<T: Element, A: RawAlloc> RawBuf<T, A> {
    fn layout(cap: usize) -> Result<Layout, StoreError> {
        Layout::array::<T>(cap).map_err(|_| StoreError::CapacityOverflow {
            requested: cap,
            element_size: mem::size_of::<T>(),
        })
    }

    fn alloc_failed(cap: usize) -> StoreError {
        StoreError::AllocationFailed {
            requested: cap,
            element_size: mem::size_of::<T>(),
        }
    }

    /// A zero-filled buffer of `cap` elements.
    pub(crate) fn with_capacity_in(cap: usize, alloc: A) -> Result<Self, StoreError> {
        let layout = Self::layout(cap)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                alloc,
                _owns: PhantomData,
            });
        }
        // SAFETY: the layout has a non-zero size.
        let ptr = unsafe { alloc.allocate_zeroed(layout) }.ok_or_else(|| Self::alloc_failed(cap))?;
        Ok(Self {
            ptr: ptr.cast(),
            cap,
            alloc,
            _owns: PhantomData,
        })
    }

    /// Resize to `new_cap` elements, keeping the first `min(cap, new_cap)`
    /// and zero-filling the rest. On error nothing changes.
    pub(crate) fn resize(&mut self, new_cap: usize) -> Result<(), StoreError> {
        if new_cap == self.cap {
            return Ok(());
        }
        let new_layout = Self::layout(new_cap)?;
        let old_layout = Self::layout(self.cap)?;

        match (old_layout.size(), new_layout.size()) {
            (_, 0) => self.release(),
            (0, _) => {
                // SAFETY: the layout has a non-zero size.
                let ptr = unsafe { self.alloc.allocate_zeroed(new_layout) }
                    .ok_or_else(|| Self::alloc_failed(new_cap))?;
                self.ptr = ptr.cast();
            }
            (old_size, new_size) => {
                // SAFETY: a non-zero old size means `ptr` is live and was
                // allocated by `self.alloc` for `old_layout`; `new_size` is
                // non-zero and came from a valid `Layout`.
                let ptr = unsafe { self.alloc.reallocate(self.ptr.cast(), old_layout, new_size) }
                    .ok_or_else(|| Self::alloc_failed(new_cap))?;
                if new_size > old_size {
                    // SAFETY: `[old_size, new_size)` lies inside the new region.
                    unsafe { ptr.as_ptr().add(old_size).write_bytes(0, new_size - old_size) };
                }
                self.ptr = ptr.cast();
            }
        }
        self.cap = new_cap;
        Ok(())
    }

    /// Free the region and become empty.
    pub(crate) fn release(&mut self) {
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            if layout.size() > 0 {
                // SAFETY: a non-zero size means `ptr` is live and was
                // allocated by `self.alloc` for exactly this layout.
                unsafe { self.alloc.free(self.ptr.cast(), layout) };
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is valid for `cap` initialised elements (or
        // dangling and well-aligned for a zero-byte region).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }
}

impl<T, A: RawAlloc> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            if layout.size() > 0 {
                // SAFETY: see `release`; elements have no drop glue.
                unsafe { self.alloc.free(self.ptr.cast(), layout) };
            }
        }
    }
}

impl<T: Element + fmt::Debug, A: RawAlloc> fmt::Debug for RawBuf<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// SAFETY: the region is uniquely owned, so sending or sharing the buffer is
// exactly as safe as sending or sharing its elements and allocator.
unsafe impl<T: Send, A: RawAlloc + Send> Send for RawBuf<T, A> {}
// SAFETY: shared access only hands out `&[T]` and `&A`.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for RawBuf<T, A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::{Capped, Global};

    #[test]
    fn fresh_buffer_is_zeroed() {
        let buf = RawBuf::<u64, _>::with_capacity_in(16, Global).unwrap();
        assert_eq!(buf.capacity(), 16);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn grow_preserves_prefix_and_zeroes_tail() {
        let mut buf = RawBuf::<u32, _>::with_capacity_in(3, Global).unwrap();
        buf.as_mut_slice().copy_from_slice(&[7, 8, 9]);
        buf.resize(6).unwrap();
        assert_eq!(buf.as_slice(), &[7, 8, 9, 0, 0, 0]);
    }

    #[test]
    fn shrink_keeps_prefix() {
        let mut buf = RawBuf::<u32, _>::with_capacity_in(4, Global).unwrap();
        buf.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);
        buf.resize(2).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2]);
    }

    #[test]
    fn resize_through_zero() {
        let mut buf = RawBuf::<u16, _>::with_capacity_in(4, Global).unwrap();
        buf.resize(0).unwrap();
        assert!(buf.as_slice().is_empty());
        buf.resize(3).unwrap();
        assert_eq!(buf.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn failed_resize_leaves_buffer_intact() {
        let mut buf = RawBuf::<u32, _>::with_capacity_in(2, Capped::new(8)).unwrap();
        buf.as_mut_slice().copy_from_slice(&[5, 6]);
        let err = buf.resize(3).unwrap_err();
        assert_eq!(
            err,
            StoreError::AllocationFailed {
                requested: 3,
                element_size: 4
            }
        );
        assert_eq!(buf.as_slice(), &[5, 6]);
    }

    #[test]
    fn overflowing_capacity_is_reported() {
        let err = RawBuf::<u64, _>::with_capacity_in(usize::MAX, Global).unwrap_err();
        assert!(matches!(err, StoreError::CapacityOverflow { .. }));
    }

    #[test]
    fn zero_sized_elements_never_allocate() {
        let buf = RawBuf::<(), _>::with_capacity_in(10, Capped::new(0)).unwrap();
        assert_eq!(buf.as_slice().len(), 10);
    }
}
