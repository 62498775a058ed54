//! Heap-owned, resizable storage.

use std::fmt;
use std::mem;

use skein_core::Element;

use crate::alloc::{Global, RawAlloc};
use crate::error::StoreError;
use crate::raw::RawBuf;
use crate::storage::{HeapStorage, Storage};

/// A backend that owns a zero-filled heap region.
///
/// Opened with [`open_heap`](Heap::open_heap), resized with
/// [`reopen`](Heap::reopen) and released with [`close`](Heap::close) or
/// on drop. A failed `reopen` leaves the previous region bound and its
/// contents untouched.
///
/// # Examples
///
/// ```
/// use skein_store::{Heap, Storage};
///
/// let mut heap = Heap::<i32>::open_heap(2).unwrap();
/// heap.as_mut_slice().copy_from_slice(&[1, 2]);
/// heap.reopen(4).unwrap();
/// assert_eq!(heap.as_slice(), &[1, 2, 0, 0]);
/// heap.close();
/// ```
pub struct Heap<T, A: RawAlloc = Global> {
    pub(crate) buf: RawBuf<T, A>,
}

impl<T: Element> Heap<T> {
    /// Allocate `capacity` zero-filled elements from the process allocator.
    pub fn open_heap(capacity: usize) -> Result<Self, StoreError> {
        Self::open_heap_in(capacity, Global)
    }
}

impl<T: Element, A: RawAlloc> Heap<T, A> {
    /// Allocate `capacity` zero-filled elements from `alloc`.
    ///
    /// A zero capacity never reaches the allocator.
    pub fn open_heap_in(capacity: usize, alloc: A) -> Result<Self, StoreError> {
        match RawBuf::with_capacity_in(capacity, alloc) {
            Ok(buf) => {
                tracing::debug!(
                    capacity,
                    bytes = capacity.saturating_mul(mem::size_of::<T>()),
                    "heap region bound"
                );
                Ok(Self { buf })
            }
            Err(err) => {
                tracing::warn!(capacity, %err, "heap open failed");
                Err(err)
            }
        }
    }

    /// Resize to `capacity` elements.
    ///
    /// The first `min(old, new)` elements are preserved and new slots are
    /// zero-filled. On failure the previous region stays bound, unchanged.
    pub fn reopen(&mut self, capacity: usize) -> Result<(), StoreError> {
        let old = self.buf.capacity();
        match self.buf.resize(capacity) {
            Ok(()) => {
                tracing::debug!(old, capacity, "heap region resized");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(old, capacity, %err, "heap reopen failed, keeping previous region");
                Err(err)
            }
        }
    }

    /// Release the region.
    pub fn close(self) {
        tracing::debug!(capacity = self.buf.capacity(), "heap region released");
    }

    /// Bytes held by the region.
    pub fn memory_bytes(&self) -> usize {
        self.buf.capacity() * mem::size_of::<T>()
    }

    /// The allocator the region came from.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }
}

impl<T: Element, A: RawAlloc> Storage<T> for Heap<T, A> {
    fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    fn space(&self) -> usize {
        self.buf.capacity()
    }
}

impl<T: Element, A: RawAlloc> HeapStorage<T> for Heap<T, A> {
    type Alloc = A;

    fn open_heap_in(capacity: usize, alloc: A) -> Result<Self, StoreError> {
        Heap::open_heap_in(capacity, alloc)
    }

    fn reopen(&mut self, capacity: usize) -> Result<(), StoreError> {
        Heap::reopen(self, capacity)
    }

    fn close(self) {
        Heap::close(self)
    }
}

impl<T: Element + fmt::Debug, A: RawAlloc> fmt::Debug for Heap<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("space", &self.buf.capacity())
            .field("items", &self.buf)
            .finish()
    }
}
