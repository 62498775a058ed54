//! Indexed element access.
//!
//! Every read and write is bounds-checked against the current size and
//! reports [`AccessError::OutOfRange`] instead of touching memory outside
//! the region.

use skein_core::{AccessError, Element, Position};
use skein_store::Storage;

use crate::sequence::Sequence;

impl<T: Element, S: Storage<T>> Sequence<T, S> {
    /// The element at `index`.
    ///
    /// ```
    /// use skein_core::{AccessError, Position};
    /// use skein_seq::FixedSeq;
    ///
    /// let seq = FixedSeq::from([4u8, 5]);
    /// assert_eq!(seq.get(1), Ok(5));
    /// assert_eq!(
    ///     seq.get(2),
    ///     Err(AccessError::OutOfRange { position: Position::At(2), len: 2 })
    /// );
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, AccessError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(AccessError::OutOfRange {
                position: Position::At(index),
                len: self.size(),
            })
    }

    /// Store `value` at `index` and return it.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, AccessError> {
        let len = self.size();
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(value)
            }
            None => Err(AccessError::OutOfRange {
                position: Position::At(index),
                len,
            }),
        }
    }

    /// The element at a cursor position. `BeforeFirst` is never readable.
    pub fn get_at(&self, pos: Position) -> Result<T, AccessError> {
        match pos {
            Position::At(index) => self.get(index),
            Position::BeforeFirst => Err(self.out_of_range(pos)),
        }
    }

    /// Store `value` at a cursor position and return it.
    pub fn set_at(&mut self, pos: Position, value: T) -> Result<T, AccessError> {
        match pos {
            Position::At(index) => self.set(index, value),
            Position::BeforeFirst => Err(self.out_of_range(pos)),
        }
    }

    pub(crate) fn out_of_range(&self, position: Position) -> AccessError {
        AccessError::OutOfRange {
            position,
            len: self.size(),
        }
    }
}
