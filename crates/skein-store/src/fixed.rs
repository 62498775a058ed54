//! Inline fixed-capacity storage.

use skein_core::Element;

use crate::storage::Storage;

/// A backend holding exactly `N` elements inline.
///
/// The extent is a compile-time constant; nothing is allocated and nothing
/// can be resized.
///
/// ```
/// use skein_store::{Fixed, Storage};
///
/// let mut fixed = Fixed::<u16, 4>::new();
/// fixed.as_mut_slice()[0] = 7;
/// assert_eq!(fixed.as_slice(), &[7, 0, 0, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixed<T, const N: usize> {
    items: [T; N],
}

impl<T: Element, const N: usize> Fixed<T, N> {
    /// A zero-filled backend.
    pub fn new() -> Self {
        Self {
            items: [T::zeroed(); N],
        }
    }

    /// The backing array.
    pub fn into_inner(self) -> [T; N] {
        self.items
    }
}

impl<T: Element, const N: usize> Default for Fixed<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Fixed<T, N> {
    fn from(items: [T; N]) -> Self {
        Self { items }
    }
}

impl<T: Element, const N: usize> Storage<T> for Fixed<T, N> {
    fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    fn space(&self) -> usize {
        N
    }
}
