//! The cursor protocol.
//!
//! [`Cursor`] derives every traversal primitive from one size query, so any
//! type that knows its length can be walked in either direction without
//! exposing how its elements are stored. [`Steps`] turns a validated
//! `[start, stop)` range into an iterator of indices.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::direction::{Backward, Direction, Forward};
use crate::error::AccessError;
use crate::position::Position;

/// Bidirectional cursor protocol over `[0, size)`.
///
/// Only [`size`](Self::size) is required. The forward pair is
/// `begin()..end()`, the backward pair `begin_back()..end_back()`; in both
/// cases the end is an exclusive sentinel that is never readable.
///
/// # Examples
///
/// ```
/// use skein_core::{Cursor, Position};
///
/// struct Five;
/// impl Cursor for Five {
///     fn size(&self) -> usize { 5 }
/// }
///
/// let c = Five;
/// assert_eq!(c.begin_back(), Position::At(4));
/// assert!(c.has_prev(Position::At(0)));
/// assert_eq!(c.prev(Position::At(0)), Position::BeforeFirst);
/// assert!(!c.has_prev(Position::BeforeFirst));
/// assert_eq!(c.count(c.begin(), c.end()), Ok(5));
/// ```
pub trait Cursor {
    /// Number of addressable slots.
    fn size(&self) -> usize;

    /// First forward position.
    fn begin(&self) -> Position {
        Forward::begin(self.size())
    }

    /// Forward one-past-last sentinel, `At(size)`.
    fn end(&self) -> Position {
        Forward::end(self.size())
    }

    /// First backward position, `At(size - 1)`, or `BeforeFirst` when empty.
    fn begin_back(&self) -> Position {
        Backward::begin(self.size())
    }

    /// Backward one-past-last sentinel, always `BeforeFirst`.
    fn end_back(&self) -> Position {
        Backward::end(self.size())
    }

    /// `true` unless `pos` is the forward end.
    fn has_next(&self, pos: Position) -> bool {
        pos != self.end()
    }

    /// `true` unless `pos` is the backward end.
    fn has_prev(&self, pos: Position) -> bool {
        pos != self.end_back()
    }

    /// One step forward. Callers check [`has_next`](Self::has_next) first.
    fn next(&self, pos: Position) -> Position {
        Forward::advance(pos)
    }

    /// One step backward. Callers check [`has_prev`](Self::has_prev) first.
    fn prev(&self, pos: Position) -> Position {
        Backward::advance(pos)
    }

    /// Number of forward steps from `start` to `stop`.
    fn count(&self, start: Position, stop: Position) -> Result<usize, AccessError> {
        self.count_in::<Forward>(start, stop)
    }

    /// Number of backward steps from `start` to `stop`.
    fn count_back(&self, start: Position, stop: Position) -> Result<usize, AccessError> {
        self.count_in::<Backward>(start, stop)
    }

    /// Number of steps from `start` to `stop` in direction `D`.
    ///
    /// Fails with [`AccessError::InvalidRange`] when `stop` cannot be
    /// reached from `start` inside the sequence.
    fn count_in<D: Direction>(&self, start: Position, stop: Position) -> Result<usize, AccessError> {
        let len = self.size();
        D::distance(start, stop, len).ok_or(AccessError::InvalidRange { start, stop, len })
    }

    /// Iterator over the indices of `[start, stop)` in direction `D`.
    fn steps<D: Direction>(&self, start: Position, stop: Position) -> Result<Steps<D>, AccessError> {
        let remaining = self.count_in::<D>(start, stop)?;
        Ok(Steps::new(start, remaining))
    }
}

/// Indices visited by walking a validated range in direction `D`.
///
/// Created by [`Cursor::steps`]. Yields exactly as many indices as the
/// range's cursor distance.
#[derive(Clone, Debug)]
pub struct Steps<D> {
    pos: Position,
    remaining: usize,
    _direction: PhantomData<D>,
}

impl<D: Direction> Steps<D> {
    /// Walk `remaining` steps starting at `start`.
    ///
    /// The caller guarantees every visited position is a valid index,
    /// which holds whenever `remaining` came from [`Direction::distance`].
    pub fn new(start: Position, remaining: usize) -> Self {
        Self {
            pos: start,
            remaining,
            _direction: PhantomData,
        }
    }

    /// The position the next call to `next` would visit.
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl<D: Direction> Iterator for Steps<D> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.pos.index()?;
        self.remaining -= 1;
        self.pos = D::advance(self.pos);
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<D: Direction> ExactSizeIterator for Steps<D> {}

impl<D: Direction> FusedIterator for Steps<D> {}
