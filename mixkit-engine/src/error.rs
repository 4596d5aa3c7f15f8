//! Error types for mixkit-engine
//!
//! Defines module-specific error types using thiserror for clear error propagation.

use std::collections::TryReserveError;
use thiserror::Error;

/// Main error type for mixkit-engine
#[derive(Error, Debug)]
pub enum Error {
    /// Sample buffer errors
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Errors from shared configuration and settings
    #[error(transparent)]
    Common(#[from] mixkit_common::Error),
}

/// Sample buffer errors
///
/// Only raised on the control path (capacity changes); hot-path
/// operations clamp instead of failing.
#[derive(Error, Debug)]
pub enum BufferError {
    /// Storage for the requested capacity could not be allocated
    #[error("Failed to allocate sample buffer of {capacity} samples: {source}")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Convenience Result type using mixkit-engine Error
pub type Result<T> = std::result::Result<T, Error>;
