//! Skein: typed, index-addressed sequences over pluggable storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Skein sub-crates. For most users, adding `skein` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! declare_sequence!(Readings, i32);
//!
//! let mut seq: Readings = Readings::open_heap(5).unwrap();
//! seq.set_many(seq.begin(), seq.end(), &[10, 20, 30, 40, 50]).unwrap();
//!
//! // Shift everything left by one; the forward/forward copy is safe here.
//! seq.copy(Position::At(1), seq.end(), Position::At(0)).unwrap();
//! assert_eq!(seq.as_slice(), &[20, 30, 40, 50, 50]);
//!
//! assert_eq!(seq.find_back(seq.begin_back(), seq.end_back(), &50), Ok(Some(4)));
//! assert!(matches!(seq.get(5), Err(AccessError::OutOfRange { .. })));
//!
//! seq.reopen(8).unwrap();
//! assert_eq!(seq.count(seq.begin(), seq.end()), Ok(8));
//! seq.close();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `skein-core` | Positions, directions, the cursor protocol, access errors |
//! | [`store`] | `skein-store` | Storage backends, allocators, store configuration |
//! | [`seq`] | `skein-seq` | `Sequence`, bulk operations, `declare_sequence!` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Positions, directions and the cursor protocol (`skein-core`).
///
/// [`types::Cursor`] is the traversal protocol every bulk operation is
/// written against; [`types::Position`] is its cursor value.
pub use skein_core as types;

/// Storage backends (`skein-store`).
///
/// [`store::Bound`] for caller memory, [`store::Fixed`] for inline arrays,
/// [`store::Heap`] and [`store::Space`] for owned heap regions.
pub use skein_store as store;

/// Sequences and bulk operations (`skein-seq`).
pub use skein_seq as seq;

pub use skein_seq::declare_sequence;

/// Common imports for typical Skein usage.
///
/// ```rust
/// use skein::prelude::*;
/// ```
///
/// This imports the sequence types, the cursor protocol, the backends and
/// both error types.
pub mod prelude {
    // Core types and traits
    pub use skein_core::{Backward, Cursor, Direction, Element, Forward, Position};

    // Errors
    pub use skein_core::AccessError;
    pub use skein_store::StoreError;

    // Storage
    pub use skein_store::{Bound, Fixed, Heap, Space, Storage, StoreConfig};

    // Sequences
    pub use skein_seq::{declare_sequence, BoundSeq, FixedSeq, HeapSeq, Sequence, SpaceSeq};
}
