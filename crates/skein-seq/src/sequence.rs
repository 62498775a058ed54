//! The sequence type and its constructors.

use std::marker::PhantomData;

use skein_core::{Cursor, Element};
use skein_store::{Bound, Fixed, Heap, HeapStorage, Space, Storage, StoreError};

/// A typed, index-addressed sequence over a storage backend.
///
/// The backend decides where the elements live; the sequence adds indexed
/// access, the [`Cursor`] protocol and the bulk operations on top. Size is
/// always the backend's extent: there is no separate live length.
///
/// # Examples
///
/// ```
/// use skein_core::{Cursor, Position};
/// use skein_seq::HeapSeq;
///
/// let mut seq = HeapSeq::<i32>::open_heap(3).unwrap();
/// seq.set(0, 7).unwrap();
/// assert_eq!(seq.get(0), Ok(7));
/// assert_eq!(seq.count(seq.begin(), seq.end()), Ok(3));
/// assert_eq!(seq.find(seq.begin(), seq.end(), &0), Ok(Some(1)));
/// assert_eq!(seq.begin_back(), Position::At(2));
/// ```
#[derive(Clone, Debug)]
pub struct Sequence<T, S> {
    storage: S,
    _element: PhantomData<T>,
}

/// A sequence over an owned heap region that survives a failed reopen.
pub type HeapSeq<T> = Sequence<T, Heap<T>>;

/// A sequence over an owned heap region that empties on a failed reopen.
pub type SpaceSeq<T> = Sequence<T, Space<T>>;

/// A sequence over caller-owned memory.
pub type BoundSeq<'a, T> = Sequence<T, Bound<'a, T>>;

/// A sequence over an inline array of `N` elements.
pub type FixedSeq<T, const N: usize> = Sequence<T, Fixed<T, N>>;

impl<T: Element, S: Storage<T>> Sequence<T, S> {
    /// Wrap an already-open backend.
    pub fn from_storage(storage: S) -> Self {
        Self {
            storage,
            _element: PhantomData,
        }
    }

    /// The backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Unwrap the backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Number of slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.space()
    }

    /// `true` when the sequence has no slots.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// All elements in index order.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// All elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Iterator over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<'a, T: Element> Sequence<T, Bound<'a, T>> {
    /// Bind to a caller-owned element region.
    ///
    /// The region is never freed by the sequence.
    pub fn open(region: &'a mut [T]) -> Self {
        Self::from_storage(Bound::open(region))
    }

    /// Bind to the first `capacity` elements of a caller-owned byte region.
    pub fn open_bytes(bytes: &'a mut [u8], capacity: usize) -> Result<Self, StoreError> {
        Bound::open_bytes(bytes, capacity).map(Self::from_storage)
    }
}

impl<T: Element, const N: usize> Sequence<T, Fixed<T, N>> {
    /// A zero-filled inline sequence of `N` slots.
    pub fn new() -> Self {
        Self::from_storage(Fixed::new())
    }
}

impl<T: Element, const N: usize> Default for Sequence<T, Fixed<T, N>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Sequence<T, Fixed<T, N>> {
    fn from(items: [T; N]) -> Self {
        Self::from_storage(Fixed::from(items))
    }
}

impl<T: Element, S: HeapStorage<T>> Sequence<T, S> {
    /// Allocate `capacity` zero-filled slots from the backend's default
    /// allocator.
    pub fn open_heap(capacity: usize) -> Result<Self, StoreError>
    where
        S::Alloc: Default,
    {
        Self::open_heap_in(capacity, S::Alloc::default())
    }

    /// Allocate `capacity` zero-filled slots from `alloc`.
    pub fn open_heap_in(capacity: usize, alloc: S::Alloc) -> Result<Self, StoreError> {
        S::open_heap_in(capacity, alloc).map(Self::from_storage)
    }

    /// Resize to `capacity` slots, preserving the first `min(old, new)`.
    ///
    /// What a failure leaves behind is the backend's choice: [`Heap`] keeps
    /// the previous region, [`Space`] empties.
    pub fn reopen(&mut self, capacity: usize) -> Result<(), StoreError> {
        self.storage.reopen(capacity)
    }

    /// Release the region. Consumes the sequence, so nothing can observe
    /// the released memory.
    pub fn close(self) {
        self.storage.close()
    }
}

impl<T: Element, S: Storage<T>> Cursor for Sequence<T, S> {
    #[inline]
    fn size(&self) -> usize {
        self.storage.space()
    }
}

impl<'s, T: Element, S: Storage<T>> IntoIterator for &'s Sequence<T, S> {
    type Item = &'s T;
    type IntoIter = std::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
