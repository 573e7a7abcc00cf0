//! Record layout
//!
//! Records are serde types encoded with bincode using a fixed option set:
//! fixint integers, little-endian, u64 length prefixes, trailing bytes
//! rejected. The field order of the struct declaration is the byte order.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{MemcError, Result};

/// Upper bound on a decoded record (matches the server's default item size)
pub const MAX_RECORD_SIZE: u64 = 1024 * 1024;

fn encoder() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}

fn decoder() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .with_limit(MAX_RECORD_SIZE)
        .reject_trailing_bytes()
}

/// Encode a serde record with the cache record layout
pub fn encode_record<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    encoder()
        .serialize(value)
        .map_err(|e| MemcError::Encoding(e.to_string()))
}

/// Decode a serde record from the cache record layout
pub fn decode_record<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    decoder()
        .deserialize(bytes)
        .map_err(|e| MemcError::Decoding(e.to_string()))
}
