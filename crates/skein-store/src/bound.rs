//! Storage bound to caller-owned memory.

use std::mem;

use bytemuck::PodCastError;
use skein_core::Element;

use crate::error::StoreError;
use crate::storage::Storage;

/// A backend over a region the caller owns.
///
/// The borrow keeps the region alive for as long as the binding exists, and
/// the binding never frees it: there is no `close`, and dropping a `Bound`
/// only ends the borrow. The extent is fixed at bind time; bind again to use
/// a different region.
///
/// # Examples
///
/// ```
/// use skein_store::{Bound, Storage};
///
/// let mut backing = [0u32; 4];
/// let mut bound = Bound::open(&mut backing);
/// bound.as_mut_slice()[3] = 0x0BAD_B055;
/// assert_eq!(bound.space(), 4);
/// assert_eq!(backing[3], 0x0BAD_B055);
/// ```
#[derive(Debug)]
pub struct Bound<'a, T> {
    region: &'a mut [T],
}

impl<'a, T: Element> Bound<'a, T> {
    /// Bind to an element region; the capacity is `region.len()`.
    pub fn open(region: &'a mut [T]) -> Self {
        tracing::trace!(capacity = region.len(), "bound caller region");
        Self { region }
    }

    /// Bind to the first `capacity` elements of a caller byte region.
    ///
    /// `capacity` counts elements, not bytes. Fails when the region is too
    /// short or not aligned for `T`.
    ///
    /// ```
    /// use skein_store::{Bound, Storage, StoreError};
    ///
    /// #[repr(align(8))]
    /// struct Aligned([u8; 32]);
    ///
    /// let mut buf = Aligned([0; 32]);
    /// let bound = Bound::<u32>::open_bytes(&mut buf.0, 32 / 4).unwrap();
    /// assert_eq!(bound.space(), 8);
    ///
    /// let mut short = Aligned([0; 32]);
    /// let err = Bound::<u64>::open_bytes(&mut short.0, 5).unwrap_err();
    /// assert_eq!(err, StoreError::RegionTooSmall { required: 40, available: 32 });
    /// ```
    pub fn open_bytes(bytes: &'a mut [u8], capacity: usize) -> Result<Self, StoreError> {
        let element_size = mem::size_of::<T>();
        let required = capacity
            .checked_mul(element_size)
            .ok_or(StoreError::CapacityOverflow {
                requested: capacity,
                element_size,
            })?;
        let available = bytes.len();
        if available < required {
            return Err(StoreError::RegionTooSmall {
                required,
                available,
            });
        }
        let region = bytemuck::try_cast_slice_mut::<u8, T>(&mut bytes[..required]).map_err(
            |err| match err {
                PodCastError::TargetAlignmentGreaterAndInputNotAligned
                | PodCastError::AlignmentMismatch => StoreError::Misaligned {
                    align: mem::align_of::<T>(),
                },
                _ => StoreError::RegionTooSmall {
                    required,
                    available,
                },
            },
        )?;
        Ok(Self::open(region))
    }

    /// End the binding and hand the region back.
    pub fn into_inner(self) -> &'a mut [T] {
        self.region
    }
}

impl<T: Element> Storage<T> for Bound<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.region
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.region
    }
}
