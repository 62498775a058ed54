//! Range-based bulk operations.
//!
//! Every operation takes a start cursor and an exclusive stop cursor of its
//! own direction and walks them with [`Steps`]. The range is validated
//! against the current size before any slot is read or written, so a bad
//! range never causes a partial write.
//!
//! The directional variants are thin wrappers over generic `*_in` methods
//! parameterised by [`Direction`]:
//!
//! | operation          | source   | destination |
//! |--------------------|----------|-------------|
//! | `copy`             | forward  | forward     |
//! | `copy_down`        | forward  | backward    |
//! | `copy_back`        | backward | forward     |
//! | `copy_back_down`   | backward | backward    |
//!
//! # Overlap
//!
//! Copies run element by element, reading each source slot just before
//! writing its destination slot. If the destination run overlaps the
//! source run ahead of the read cursor, later reads see already-written
//! values. Picking the variant whose directions avoid that is the caller's
//! job; a hazardous copy is recorded as a `debug` trace event and otherwise
//! proceeds.

use smallvec::SmallVec;

use skein_core::{AccessError, Backward, Cursor, Direction, Element, Forward, Position, Steps};
use skein_store::Storage;

use crate::sequence::Sequence;

/// Indices collected by [`Sequence::find_all`]. Stays inline up to eight
/// matches.
pub type Matches = SmallVec<[usize; 8]>;

impl<T: Element, S: Storage<T>> Sequence<T, S> {
    /// Copy `[start, stop)` forward into `out`; returns the number copied.
    ///
    /// ```
    /// use skein_core::{Cursor, Position};
    /// use skein_seq::FixedSeq;
    ///
    /// let seq = FixedSeq::from([1u8, 2, 3, 4]);
    /// let mut out = [0u8; 2];
    /// assert_eq!(seq.get_many(Position::At(1), seq.end(), &mut out), Ok(2));
    /// assert_eq!(out, [2, 3]);
    /// ```
    pub fn get_many(&self, start: Position, stop: Position, out: &mut [T]) -> Result<usize, AccessError> {
        self.get_many_in::<Forward>(start, stop, out)
    }

    /// Copy `[start, stop)` backward into `out`; returns the number copied.
    pub fn get_back_many(&self, start: Position, stop: Position, out: &mut [T]) -> Result<usize, AccessError> {
        self.get_many_in::<Backward>(start, stop, out)
    }

    /// Store `src` forward over `[start, stop)`; returns the number stored.
    pub fn set_many(&mut self, start: Position, stop: Position, src: &[T]) -> Result<usize, AccessError> {
        self.set_many_in::<Forward>(start, stop, src)
    }

    /// Store `src` backward over `[start, stop)`; returns the number stored.
    pub fn set_back_many(&mut self, start: Position, stop: Position, src: &[T]) -> Result<usize, AccessError> {
        self.set_many_in::<Backward>(start, stop, src)
    }

    /// Read the range in direction `D` into `out`, stopping when either
    /// runs out.
    pub fn get_many_in<D: Direction>(
        &self,
        start: Position,
        stop: Position,
        out: &mut [T],
    ) -> Result<usize, AccessError> {
        let steps = self.steps::<D>(start, stop)?;
        let items = self.as_slice();
        let mut moved = 0;
        for (slot, index) in out.iter_mut().zip(steps) {
            *slot = items[index];
            moved += 1;
        }
        Ok(moved)
    }

    /// Write `src` over the range in direction `D`, stopping when either
    /// runs out.
    pub fn set_many_in<D: Direction>(
        &mut self,
        start: Position,
        stop: Position,
        src: &[T],
    ) -> Result<usize, AccessError> {
        let steps = self.steps::<D>(start, stop)?;
        let items = self.as_mut_slice();
        let mut moved = 0;
        for (value, index) in src.iter().zip(steps) {
            items[index] = *value;
            moved += 1;
        }
        Ok(moved)
    }

    /// Write `value` to every slot of `[start, stop)`; returns the count.
    ///
    /// ```
    /// use skein_core::{Cursor, Position};
    /// use skein_seq::FixedSeq;
    ///
    /// let mut seq = FixedSeq::<i16, 4>::new();
    /// assert_eq!(seq.fill(Position::At(1), Position::At(3), -1), Ok(2));
    /// assert_eq!(seq.as_slice(), &[0, -1, -1, 0]);
    /// ```
    pub fn fill(&mut self, start: Position, stop: Position, value: T) -> Result<usize, AccessError> {
        let steps = self.steps::<Forward>(start, stop)?;
        let written = steps.len();
        let items = self.as_mut_slice();
        for index in steps {
            items[index] = value;
        }
        Ok(written)
    }

    /// Copy `[start, stop)` forward onto the run starting at `dest`, forward.
    pub fn copy(&mut self, start: Position, stop: Position, dest: Position) -> Result<usize, AccessError> {
        self.copy_in::<Forward, Forward>(start, stop, dest)
    }

    /// Copy `[start, stop)` forward onto the run ending at `dest`, written
    /// backward.
    ///
    /// ```
    /// use skein_core::Position;
    /// use skein_seq::FixedSeq;
    ///
    /// let mut seq = FixedSeq::from([10, 20, 30, 40, 50]);
    /// seq.copy_down(Position::At(0), Position::At(3), Position::At(4)).unwrap();
    /// assert_eq!(seq.as_slice(), &[10, 20, 30, 20, 10]);
    /// ```
    pub fn copy_down(&mut self, start: Position, stop: Position, dest: Position) -> Result<usize, AccessError> {
        self.copy_in::<Forward, Backward>(start, stop, dest)
    }

    /// Copy `[start, stop)` backward onto the run starting at `dest`, forward.
    pub fn copy_back(&mut self, start: Position, stop: Position, dest: Position) -> Result<usize, AccessError> {
        self.copy_in::<Backward, Forward>(start, stop, dest)
    }

    /// Copy `[start, stop)` backward onto the run ending at `dest`, written
    /// backward.
    pub fn copy_back_down(&mut self, start: Position, stop: Position, dest: Position) -> Result<usize, AccessError> {
        self.copy_in::<Backward, Backward>(start, stop, dest)
    }

    /// Copy the source range, walked in `Src`, onto the destination run
    /// beginning at `dest`, walked in `Dst`. Returns the number copied.
    ///
    /// Fails with [`AccessError::InvalidRange`] for a bad source range and
    /// [`AccessError::OutOfRange`] when a non-empty destination run would
    /// leave the sequence. Nothing is written on failure.
    pub fn copy_in<Src: Direction, Dst: Direction>(
        &mut self,
        start: Position,
        stop: Position,
        dest: Position,
    ) -> Result<usize, AccessError> {
        let count = self.count_in::<Src>(start, stop)?;
        if count == 0 {
            return Ok(0);
        }
        if Dst::span(dest, count, self.size()).is_none() {
            return Err(self.out_of_range(dest));
        }
        if let (Some(from), Some(to)) = (start.index(), dest.index()) {
            if overlap_hazard(Src::STEP, Dst::STEP, from, to, count) {
                tracing::debug!(
                    source = Src::NAME,
                    destination = Dst::NAME,
                    from,
                    to,
                    count,
                    "copy reads slots it has already overwritten"
                );
            }
        }

        let items = self.as_mut_slice();
        for (src, dst) in Steps::<Src>::new(start, count).zip(Steps::<Dst>::new(dest, count)) {
            items[dst] = items[src];
        }
        Ok(count)
    }
}

impl<T: Element + PartialEq, S: Storage<T>> Sequence<T, S> {
    /// First index of `[start, stop)`, scanning forward, holding `value`.
    ///
    /// ```
    /// use skein_core::Cursor;
    /// use skein_seq::FixedSeq;
    ///
    /// let seq = FixedSeq::from([3u8, 7, 3]);
    /// assert_eq!(seq.find(seq.begin(), seq.end(), &3), Ok(Some(0)));
    /// assert_eq!(seq.find_back(seq.begin_back(), seq.end_back(), &3), Ok(Some(2)));
    /// assert_eq!(seq.find(seq.begin(), seq.end(), &9), Ok(None));
    /// ```
    pub fn find(&self, start: Position, stop: Position, value: &T) -> Result<Option<usize>, AccessError> {
        self.find_in::<Forward>(start, stop, value)
    }

    /// First index of `[start, stop)`, scanning backward, holding `value`.
    pub fn find_back(&self, start: Position, stop: Position, value: &T) -> Result<Option<usize>, AccessError> {
        self.find_in::<Backward>(start, stop, value)
    }

    /// Collect matching indices forward into `out`; returns the count.
    pub fn find_many(
        &self,
        start: Position,
        stop: Position,
        value: &T,
        out: &mut [usize],
    ) -> Result<usize, AccessError> {
        self.find_many_in::<Forward>(start, stop, value, out)
    }

    /// Collect matching indices backward into `out`; returns the count.
    pub fn find_back_many(
        &self,
        start: Position,
        stop: Position,
        value: &T,
        out: &mut [usize],
    ) -> Result<usize, AccessError> {
        self.find_many_in::<Backward>(start, stop, value, out)
    }

    /// Every matching index of `[start, stop)`, in forward scan order.
    pub fn find_all(&self, start: Position, stop: Position, value: &T) -> Result<Matches, AccessError> {
        self.find_all_in::<Forward>(start, stop, value)
    }

    /// Every matching index of `[start, stop)`, in backward scan order.
    pub fn find_back_all(&self, start: Position, stop: Position, value: &T) -> Result<Matches, AccessError> {
        self.find_all_in::<Backward>(start, stop, value)
    }

    /// First match scanning in direction `D`.
    pub fn find_in<D: Direction>(
        &self,
        start: Position,
        stop: Position,
        value: &T,
    ) -> Result<Option<usize>, AccessError> {
        let items = self.as_slice();
        Ok(self.steps::<D>(start, stop)?.find(|&i| items[i] == *value))
    }

    /// Matches scanning in direction `D`, stopping when the range is
    /// exhausted or `out` is full.
    pub fn find_many_in<D: Direction>(
        &self,
        start: Position,
        stop: Position,
        value: &T,
        out: &mut [usize],
    ) -> Result<usize, AccessError> {
        let items = self.as_slice();
        let matches = self.steps::<D>(start, stop)?.filter(|&i| items[i] == *value);
        let mut found = 0;
        for (slot, index) in out.iter_mut().zip(matches) {
            *slot = index;
            found += 1;
        }
        Ok(found)
    }

    /// All matches scanning in direction `D`.
    pub fn find_all_in<D: Direction>(
        &self,
        start: Position,
        stop: Position,
        value: &T,
    ) -> Result<Matches, AccessError> {
        let items = self.as_slice();
        Ok(self
            .steps::<D>(start, stop)?
            .filter(|&i| items[i] == *value)
            .collect())
    }
}

/// Whether walking a `count`-long source from `from` (step `src`) onto a
/// destination from `to` (step `dst`) reads some slot after writing it.
///
/// The `k`-th read is `from + src*k` and the `j`-th write `to + dst*j`; a
/// hazard is any `j < k < count` where they coincide.
fn overlap_hazard(src: isize, dst: isize, from: usize, to: usize, count: usize) -> bool {
    let (from, to, count) = (from as i128, to as i128, count as i128);
    if src == dst {
        // j = k - dst * (to - from)
        let lead = dst as i128 * (to - from);
        0 < lead && lead < count
    } else {
        // j = dst * (from - to) - k, so k ranges over (gap / 2, gap]
        let gap = dst as i128 * (from - to);
        gap >= 1 && gap / 2 + 1 < count
    }
}
