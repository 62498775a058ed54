//! Storage backends for Skein sequences.
//!
//! A backend owns or borrows one contiguous region of elements and exposes
//! it as a slice through [`Storage`]. Sequences never touch memory any
//! other way, so every operation works the same over every backend.
//!
//! # Backends
//!
//! ```text
//! Storage (as_slice / as_mut_slice / space)
//! ├── Bound<'a, T>      caller-owned region, fixed extent, never freed here
//! ├── Fixed<T, N>       inline array, compile-time extent
//! └── HeapStorage       (open_heap_in / reopen / close)
//!     ├── Heap<T, A>    failed reopen keeps the previous region
//!     └── Space<T, A>   failed reopen releases and empties
//! ```
//!
//! Heap regions come from a [`RawAlloc`]: [`Global`] for the process
//! allocator, or [`Capped`] built from a [`StoreConfig`] to bound request
//! sizes. Heap regions are zero-filled on allocation and on growth.
//!
//! # Unsafe code
//!
//! This is the only crate in the workspace with `unsafe`, confined to the
//! `alloc` and `raw` modules. Every block carries a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod alloc;
pub mod bound;
pub mod config;
pub mod error;
pub mod fixed;
pub mod heap;
mod raw;
pub mod space;
pub mod storage;

pub use alloc::{Capped, Global, RawAlloc};
pub use bound::Bound;
pub use config::StoreConfig;
pub use error::StoreError;
pub use fixed::Fixed;
pub use heap::Heap;
pub use space::Space;
pub use storage::{HeapStorage, Storage};
