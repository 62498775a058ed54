//! Size-is-capacity heap storage that empties itself on allocation failure.

use std::fmt;

use skein_core::Element;

use crate::alloc::{Global, RawAlloc};
use crate::error::StoreError;
use crate::heap::Heap;
use crate::storage::{HeapStorage, Storage};

/// A heap backend whose extent is always its live length.
///
/// Differs from [`Heap`] only in what a failed [`reopen`](Space::reopen)
/// leaves behind: the previous region is released and the space becomes
/// empty. Any later access sees a zero-length region rather than a
/// capacity that no longer matches its memory.
///
/// ```
/// use skein_store::{Capped, Space, Storage};
///
/// let mut space = Space::<u32, _>::open_heap_in(2, Capped::new(8)).unwrap();
/// assert!(space.reopen(3).is_err());
/// assert_eq!(space.space(), 0);
/// ```
pub struct Space<T, A: RawAlloc = Global> {
    heap: Heap<T, A>,
}

impl<T: Element> Space<T> {
    /// Allocate `capacity` zero-filled elements from the process allocator.
    pub fn open_heap(capacity: usize) -> Result<Self, StoreError> {
        Self::open_heap_in(capacity, Global)
    }
}

impl<T: Element, A: RawAlloc> Space<T, A> {
    /// Allocate `capacity` zero-filled elements from `alloc`.
    pub fn open_heap_in(capacity: usize, alloc: A) -> Result<Self, StoreError> {
        Heap::open_heap_in(capacity, alloc).map(|heap| Self { heap })
    }

    /// Resize to `capacity` elements.
    ///
    /// On success the first `min(old, new)` elements are preserved. On
    /// failure the region is released and the space is left empty.
    pub fn reopen(&mut self, capacity: usize) -> Result<(), StoreError> {
        let result = self.heap.reopen(capacity);
        if result.is_err() {
            self.heap.buf.release();
            tracing::warn!(capacity, "space emptied after failed reopen");
        }
        result
    }

    /// Release the region.
    pub fn close(self) {
        self.heap.close()
    }

    /// Bytes held by the region.
    pub fn memory_bytes(&self) -> usize {
        self.heap.memory_bytes()
    }
}

impl<T: Element, A: RawAlloc> Storage<T> for Space<T, A> {
    fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.heap.as_mut_slice()
    }

    fn space(&self) -> usize {
        self.heap.space()
    }
}

impl<T: Element, A: RawAlloc> HeapStorage<T> for Space<T, A> {
    type Alloc = A;

    fn open_heap_in(capacity: usize, alloc: A) -> Result<Self, StoreError> {
        Space::open_heap_in(capacity, alloc)
    }

    fn reopen(&mut self, capacity: usize) -> Result<(), StoreError> {
        Space::reopen(self, capacity)
    }

    fn close(self) {
        Space::close(self)
    }
}

impl<T: Element + fmt::Debug, A: RawAlloc> fmt::Debug for Space<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Space")
            .field("space", &self.space())
            .field("items", &self.heap.buf)
            .finish()
    }
}
