//! Key validation
//!
//! Mirrors the memcached key rules locally so malformed keys fail before a
//! round-trip instead of as opaque `CLIENT_ERROR` replies.

use crate::error::{MemcError, Result};

/// Longest key the protocol accepts, in bytes
pub const MAX_KEY_LEN: usize = 250;

/// Check that `key` is a legal cache key.
///
/// A legal key is 1 to 250 bytes long and contains no whitespace or control
/// characters.
pub fn check(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(MemcError::KeyNotValid("key is empty".to_string()));
    }

    if key.len() > MAX_KEY_LEN {
        return Err(MemcError::KeyNotValid(format!(
            "key is {} bytes (max {})",
            key.len(),
            MAX_KEY_LEN
        )));
    }

    if let Some(c) = key.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(MemcError::KeyNotValid(format!(
            "key contains illegal character {:?}",
            c
        )));
    }

    Ok(())
}
