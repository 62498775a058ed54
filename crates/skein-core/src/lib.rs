//! Core types for Skein sequences.
//!
//! This is the leaf crate of the workspace. It defines what an element is,
//! what a position inside a sequence is, and the cursor protocol that every
//! traversal and bulk operation is written against:
//!
//! - [`Element`]: the capability an element type must have (plain old data).
//! - [`Position`]: a cursor value, either an index or the backward
//!   one-past-last sentinel [`Position::BeforeFirst`].
//! - [`Direction`]: compile-time traversal direction ([`Forward`] or
//!   [`Backward`]), shared by all bulk operations.
//! - [`Cursor`]: begin/end/has-next/next primitives derived from a single
//!   size query.
//! - [`AccessError`]: index and range errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod direction;
pub mod element;
pub mod error;
pub mod position;

pub use cursor::{Cursor, Steps};
pub use direction::{Backward, Direction, Forward};
pub use element::Element;
pub use error::AccessError;
pub use position::Position;
