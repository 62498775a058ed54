//! Typed, index-addressed sequences.
//!
//! [`Sequence<T, S>`] layers indexed access, the
//! [`Cursor`](skein_core::Cursor) protocol and a family of range-based bulk
//! operations on top of any [`Storage`](skein_store::Storage) backend:
//!
//! - **Indexed access**: `get`, `set`, `get_at`, `set_at`.
//! - **Bulk transfer**: `get_many`, `get_back_many`, `set_many`,
//!   `set_back_many`, `fill`.
//! - **In-place copies**: `copy`, `copy_down`, `copy_back`,
//!   `copy_back_down`.
//! - **Search**: `find`, `find_back`, `find_many`, `find_back_many`,
//!   `find_all`, `find_back_all`.
//!
//! Ranges are a start cursor and an exclusive stop cursor of the
//! operation's direction, validated against the current size before any
//! memory is touched.
//!
//! [`declare_sequence!`] gives a sequence over one element type a name.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod access;
pub mod bulk;
mod macros;
pub mod sequence;

pub use bulk::Matches;
pub use sequence::{BoundSeq, FixedSeq, HeapSeq, Sequence, SpaceSeq};

#[doc(hidden)]
pub mod __private {
    pub use skein_core::Element;
    pub use skein_store::Heap;
}
