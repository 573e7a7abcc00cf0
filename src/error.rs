//! Error types for memc
//!
//! Every failure path carries exactly one [`ErrorKind`], so callers can
//! discriminate programmatically instead of inspecting messages.

use std::time::Duration;

use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias using MemcError
pub type Result<T> = std::result::Result<T, MemcError>;

/// Unified error type for client operations
#[derive(Debug, Error)]
pub enum MemcError {
    // -------------------------------------------------------------------------
    // Validation Errors (raised before any network attempt)
    // -------------------------------------------------------------------------
    #[error("key not valid: {0}")]
    KeyNotValid(String),

    #[error("expiration not valid: {0:?} is not a whole number of seconds in range")]
    ExpirationNotValid(Duration),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("encoding failed: {0}")]
    Encoding(String),

    #[error("decoding failed: {0}")]
    Decoding(String),

    // -------------------------------------------------------------------------
    // Lookup Outcome
    // -------------------------------------------------------------------------
    #[error("cache miss")]
    CacheMiss,

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

/// Closed set of error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    KeyNotValid,
    ExpirationNotValid,
    EncodingFailure,
    DecodingFailure,
    CacheMiss,
    TransportFailure,
}

impl MemcError {
    /// The kind tag of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemcError::KeyNotValid(_) => ErrorKind::KeyNotValid,
            MemcError::ExpirationNotValid(_) => ErrorKind::ExpirationNotValid,
            MemcError::Encoding(_) => ErrorKind::EncodingFailure,
            MemcError::Decoding(_) => ErrorKind::DecodingFailure,
            MemcError::CacheMiss => ErrorKind::CacheMiss,
            MemcError::Transport(_) => ErrorKind::TransportFailure,
        }
    }

    /// True when a lookup found no entry for the key.
    ///
    /// A miss is an expected outcome of `get`, not a failure of the client.
    pub fn is_cache_miss(&self) -> bool {
        matches!(self, MemcError::CacheMiss)
    }
}
