//! Errors raised by indexed access and range validation.

use std::error::Error;
use std::fmt;

use crate::position::Position;

/// Errors from element access and bulk operations.
///
/// Both variants are reported before any slot is read or written, so a
/// failed call leaves the sequence untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// A position lies outside `[0, len)`, or a destination run would
    /// leave the sequence.
    OutOfRange {
        /// The offending position.
        position: Position,
        /// Number of elements in the sequence at the time of the call.
        len: usize,
    },
    /// `stop` cannot be reached from `start` by advancing in the
    /// operation's direction without leaving the sequence.
    InvalidRange {
        /// First position of the range.
        start: Position,
        /// Exclusive end of the range.
        stop: Position,
        /// Number of elements in the sequence at the time of the call.
        len: usize,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { position, len } => {
                write!(f, "position {position} out of range for length {len}")
            }
            Self::InvalidRange { start, stop, len } => {
                write!(
                    f,
                    "invalid range: {stop} is not reachable from {start} in a sequence of length {len}"
                )
            }
        }
    }
}

impl Error for AccessError {}
