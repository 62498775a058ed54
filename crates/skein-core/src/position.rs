//! Cursor positions.

use std::fmt;

/// A location in a sequence, as seen by the cursor protocol.
///
/// Forward traversal runs from `At(0)` to the one-past-last `At(size)`.
/// Backward traversal runs from `At(size - 1)` to [`Position::BeforeFirst`],
/// which lies outside every valid index range and never collides with one.
///
/// Positions are plain values. They are not tied to a particular sequence
/// and must be re-derived after any capacity change.
///
/// # Examples
///
/// ```
/// use skein_core::Position;
///
/// let p = Position::from(3);
/// assert_eq!(p.index(), Some(3));
/// assert_eq!(Position::BeforeFirst.index(), None);
/// assert_eq!(p.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// A zero-based offset from the front. May equal the forward end.
    At(usize),
    /// The backward end: one step before index 0.
    BeforeFirst,
}

impl Position {
    /// The index this position refers to, or `None` for `BeforeFirst`.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::At(i) => Some(i),
            Self::BeforeFirst => None,
        }
    }

    /// Returns `true` for the backward end sentinel.
    #[inline]
    pub fn is_before_first(self) -> bool {
        matches!(self, Self::BeforeFirst)
    }

    /// Number of slots strictly before this position plus one.
    ///
    /// `BeforeFirst` has rank 0 and `At(i)` has rank `i + 1`, so ranks are
    /// totally ordered in the same sense as indices. Saturates for
    /// `At(usize::MAX)`, which no sequence can address anyway.
    #[inline]
    pub(crate) fn rank(self) -> usize {
        match self {
            Self::At(i) => i.saturating_add(1),
            Self::BeforeFirst => 0,
        }
    }

    /// Inverse of [`rank`](Self::rank).
    #[inline]
    pub(crate) fn from_rank(rank: usize) -> Self {
        match rank {
            0 => Self::BeforeFirst,
            r => Self::At(r - 1),
        }
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Self::At(index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(i) => write!(f, "{i}"),
            Self::BeforeFirst => write!(f, "before-first"),
        }
    }
}
