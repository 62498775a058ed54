//! The element capability required by every sequence.

use bytemuck::Pod;

/// A type that can live in a Skein sequence.
///
/// Elements are plain old data: bit-copyable, free of drop glue, and valid
/// when every byte is zero. Storage backends rely on this to hand out
/// zero-filled heap regions, to move elements with `realloc`, and to view a
/// caller's byte buffer as a slice of elements.
///
/// Implemented for every [`bytemuck::Pod`] type; there is nothing to
/// implement by hand.
///
/// ```
/// fn assert_element<T: skein_core::Element>() {}
///
/// assert_element::<u8>();
/// assert_element::<[f32; 4]>();
/// ```
pub trait Element: Pod {}

impl<T: Pod> Element for T {}
