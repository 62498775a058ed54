//! Test fixtures for Skein development.
//!
//! Plain value generators shared by unit tests, integration tests and
//! benchmarks. Nothing here depends on the sequence crates, so any of them
//! can take this as a dev-dependency.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ascending, canned, seeded_small, seeded_values, CANNED};
