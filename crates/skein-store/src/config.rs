//! Storage configuration parameters.

use crate::alloc::Capped;

/// Configuration for heap-backed storage.
///
/// Controls the largest single allocation a heap backend may request.
/// Immutable once an allocator has been built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Largest single allocate or reallocate request, in bytes.
    ///
    /// Default: `isize::MAX`, the most `std::alloc` can ever satisfy.
    pub max_request_bytes: usize,
}

impl StoreConfig {
    /// Default ceiling: the largest size a `Layout` can describe.
    pub const DEFAULT_MAX_REQUEST_BYTES: usize = isize::MAX as usize;

    /// Create a config with the given request ceiling in bytes.
    pub fn new(max_request_bytes: usize) -> Self {
        Self { max_request_bytes }
    }

    /// Largest element count of type `T` a single request may cover.
    pub fn max_elements<T>(&self) -> usize {
        match std::mem::size_of::<T>() {
            0 => usize::MAX,
            size => self.max_request_bytes / size,
        }
    }

    /// Build the allocator that enforces this config.
    pub fn allocator(&self) -> Capped {
        Capped::new(self.max_request_bytes)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_REQUEST_BYTES)
    }
}
