//! The storage backend traits.
//!
//! A backend owns or borrows one contiguous region of initialised elements.
//! Its extent is the sequence's capacity; there is no separate live length.

use skein_core::Element;

use crate::alloc::RawAlloc;
use crate::error::StoreError;

/// A contiguous region of `space()` elements.
///
/// Indexed access and every bulk operation reach memory only through this
/// trait, so they behave identically whatever the backing.
pub trait Storage<T: Element> {
    /// All slots, in index order.
    fn as_slice(&self) -> &[T];

    /// All slots, mutably.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Number of slots (the capacity, which is also the length).
    fn space(&self) -> usize {
        self.as_slice().len()
    }
}

/// A backend that owns a heap region obtained from a [`RawAlloc`].
///
/// Only heap backends can be resized or closed; a caller-bound region has
/// neither operation, so releasing memory the backend does not own is not
/// expressible.
pub trait HeapStorage<T: Element>: Storage<T> + Sized {
    /// Allocator the region comes from.
    type Alloc: RawAlloc;

    /// Allocate a zero-filled region of `capacity` elements from `alloc`.
    fn open_heap_in(capacity: usize, alloc: Self::Alloc) -> Result<Self, StoreError>;

    /// Resize the region, preserving the first `min(old, new)` elements.
    ///
    /// What remains bound after a failure depends on the backend: see
    /// [`Heap`](crate::heap::Heap) and [`Space`](crate::space::Space).
    fn reopen(&mut self, capacity: usize) -> Result<(), StoreError>;

    /// Release the region.
    fn close(self);
}
