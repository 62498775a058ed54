//! Traversal directions.
//!
//! A [`Direction`] is a zero-sized marker that knows where a traversal of a
//! sequence of a given size begins and ends and how to take one step. Bulk
//! operations are written once, generic over the direction of their source
//! and destination, and share a single loop shape:
//!
//! ```text
//! pos = start
//! while pos != stop { visit(pos); pos = D::advance(pos) }
//! ```

use std::fmt;

use crate::position::Position;

/// A traversal direction over `[0, size)`.
pub trait Direction: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Short lowercase name, used in trace output.
    const NAME: &'static str;

    /// Index delta of one step: `1` forward, `-1` backward.
    const STEP: isize;

    /// The first readable position, or [`end`](Self::end) when `size == 0`.
    fn begin(size: usize) -> Position;

    /// The one-past-last sentinel of this direction. Never readable.
    fn end(size: usize) -> Position;

    /// One step in this direction.
    ///
    /// Stepping past the end of the direction is a contract violation:
    /// it trips a debug assertion and otherwise saturates.
    fn advance(pos: Position) -> Position;

    /// Number of steps from `start` to `stop`.
    ///
    /// Returns `None` unless both positions lie within `[begin, end]` of
    /// this direction and `stop` is reachable from `start`.
    fn distance(start: Position, stop: Position, size: usize) -> Option<usize>;

    /// The position reached after `count` steps from `start`.
    ///
    /// Returns `None` if the walk would leave `[begin, end]`.
    fn span(start: Position, count: usize, size: usize) -> Option<Position>;
}

/// Front-to-back traversal: `0, 1, …, size - 1`, ending at `At(size)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Back-to-front traversal: `size - 1, …, 0`, ending at `BeforeFirst`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Backward;

impl Direction for Forward {
    const NAME: &'static str = "forward";
    const STEP: isize = 1;

    #[inline]
    fn begin(_size: usize) -> Position {
        Position::At(0)
    }

    #[inline]
    fn end(size: usize) -> Position {
        Position::At(size)
    }

    #[inline]
    fn advance(pos: Position) -> Position {
        match pos {
            Position::At(i) => Position::At(i.saturating_add(1)),
            Position::BeforeFirst => Position::At(0),
        }
    }

    fn distance(start: Position, stop: Position, size: usize) -> Option<usize> {
        match (start, stop) {
            (Position::At(s), Position::At(t)) if s <= t && t <= size => Some(t - s),
            _ => None,
        }
    }

    fn span(start: Position, count: usize, size: usize) -> Option<Position> {
        let Position::At(s) = start else {
            return None;
        };
        let t = s.checked_add(count)?;
        (t <= size).then_some(Position::At(t))
    }
}

impl Direction for Backward {
    const NAME: &'static str = "backward";
    const STEP: isize = -1;

    #[inline]
    fn begin(size: usize) -> Position {
        Position::from_rank(size)
    }

    #[inline]
    fn end(_size: usize) -> Position {
        Position::BeforeFirst
    }

    #[inline]
    fn advance(pos: Position) -> Position {
        match pos {
            Position::At(0) => Position::BeforeFirst,
            Position::At(i) => Position::At(i - 1),
            Position::BeforeFirst => {
                debug_assert!(false, "advanced backward past before-first");
                Position::BeforeFirst
            }
        }
    }

    fn distance(start: Position, stop: Position, size: usize) -> Option<usize> {
        let (from, to) = (start.rank(), stop.rank());
        (from <= size && to <= from).then(|| from - to)
    }

    fn span(start: Position, count: usize, size: usize) -> Option<Position> {
        let from = start.rank();
        if from > size {
            return None;
        }
        from.checked_sub(count).map(Position::from_rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_bounds() {
        assert_eq!(Forward::begin(5), Position::At(0));
        assert_eq!(Forward::end(5), Position::At(5));
        assert_eq!(Forward::advance(Position::At(4)), Position::At(5));
    }

    #[test]
    fn backward_bounds() {
        assert_eq!(Backward::begin(5), Position::At(4));
        assert_eq!(Backward::end(5), Position::BeforeFirst);
        assert_eq!(Backward::advance(Position::At(0)), Position::BeforeFirst);
    }

    #[test]
    fn empty_ranges_begin_at_end() {
        assert_eq!(Forward::begin(0), Forward::end(0));
        assert_eq!(Backward::begin(0), Backward::end(0));
    }

    #[test]
    fn forward_distance_rejects_reversed_range() {
        assert_eq!(Forward::distance(Position::At(3), Position::At(1), 5), None);
        assert_eq!(Forward::distance(Position::At(1), Position::At(6), 5), None);
        assert_eq!(
            Forward::distance(Position::BeforeFirst, Position::At(1), 5),
            None
        );
        assert_eq!(Forward::distance(Position::At(1), Position::At(4), 5), Some(3));
    }

    #[test]
    fn backward_distance_counts_to_sentinel() {
        assert_eq!(
            Backward::distance(Position::At(4), Position::BeforeFirst, 5),
            Some(5)
        );
        assert_eq!(Backward::distance(Position::At(1), Position::At(3), 5), None);
        assert_eq!(
            Backward::distance(Position::At(5), Position::BeforeFirst, 5),
            None
        );
    }

    #[test]
    fn span_stays_inside_sequence() {
        assert_eq!(Forward::span(Position::At(2), 3, 5), Some(Position::At(5)));
        assert_eq!(Forward::span(Position::At(3), 3, 5), None);
        assert_eq!(
            Backward::span(Position::At(2), 3, 5),
            Some(Position::BeforeFirst)
        );
        assert_eq!(Backward::span(Position::At(1), 3, 5), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn walk<D: Direction>(mut pos: Position, steps: usize) -> Position {
            for _ in 0..steps {
                pos = D::advance(pos);
            }
            pos
        }

        proptest! {
            #[test]
            fn forward_span_agrees_with_walk(size in 0usize..64, start in 0usize..64, n in 0usize..64) {
                let start = Position::At(start);
                if let Some(stop) = Forward::span(start, n, size) {
                    prop_assert_eq!(walk::<Forward>(start, n), stop);
                    prop_assert_eq!(Forward::distance(start, stop, size), Some(n));
                }
            }

            #[test]
            fn backward_span_agrees_with_walk(size in 0usize..64, start in 0usize..64, n in 0usize..64) {
                let start = Position::At(start);
                if let Some(stop) = Backward::span(start, n, size) {
                    prop_assert_eq!(walk::<Backward>(start, n), stop);
                    prop_assert_eq!(Backward::distance(start, stop, size), Some(n));
                }
            }

            #[test]
            fn full_traversal_visits_every_slot(size in 0usize..64) {
                prop_assert_eq!(Forward::distance(Forward::begin(size), Forward::end(size), size), Some(size));
                prop_assert_eq!(Backward::distance(Backward::begin(size), Backward::end(size), size), Some(size));
            }
        }
    }
}
