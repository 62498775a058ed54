//! Storage-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while binding or resizing a storage region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The allocator could not satisfy the request.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },
    /// `requested * element_size` does not fit in the address space.
    CapacityOverflow {
        /// Number of elements requested.
        requested: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },
    /// A caller-supplied byte region is shorter than the requested capacity.
    RegionTooSmall {
        /// Bytes needed for the requested capacity.
        required: usize,
        /// Bytes actually supplied.
        available: usize,
    },
    /// A caller-supplied byte region is not aligned for the element type.
    Misaligned {
        /// Alignment the element type requires.
        align: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                requested,
                element_size,
            } => {
                write!(
                    f,
                    "allocation failed: {requested} elements of {element_size} bytes"
                )
            }
            Self::CapacityOverflow {
                requested,
                element_size,
            } => {
                write!(
                    f,
                    "capacity overflow: {requested} elements of {element_size} bytes"
                )
            }
            Self::RegionTooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "region too small: need {required} bytes, got {available} bytes"
                )
            }
            Self::Misaligned { align } => {
                write!(f, "region is not aligned to {align} bytes")
            }
        }
    }
}

impl Error for StoreError {}
