//! Expiration conversion
//!
//! memcached takes expiration as whole seconds relative to now, with zero
//! meaning "never expire".
//!
//! Known limitation: the server reads any value above 30 days as an absolute
//! unix timestamp. Durations past that boundary are still sent as relative
//! seconds (the entry then expires immediately server-side); a warning is
//! logged but the value is not rewritten.

use std::time::Duration;

use crate::error::{MemcError, Result};

/// Largest ttl the server treats as relative seconds (30 days)
pub const RELATIVE_TTL_LIMIT: u32 = 60 * 60 * 24 * 30;

/// Largest ttl the server parses; exptime is a signed 32-bit field
pub const MAX_TTL_SECS: u32 = i32::MAX as u32;

/// Convert a ttl into the protocol's relative-seconds representation
pub fn seconds(ttl: Duration) -> Result<u32> {
    if ttl.is_zero() {
        return Ok(0);
    }

    if ttl.subsec_nanos() != 0 {
        return Err(MemcError::ExpirationNotValid(ttl));
    }

    let secs = u32::try_from(ttl.as_secs())
        .ok()
        .filter(|&secs| secs <= MAX_TTL_SECS)
        .ok_or(MemcError::ExpirationNotValid(ttl))?;

    if secs > RELATIVE_TTL_LIMIT {
        tracing::warn!(
            "ttl of {}s exceeds {}s and will be read by the server as a unix timestamp",
            secs,
            RELATIVE_TTL_LIMIT
        );
    }

    Ok(secs)
}
