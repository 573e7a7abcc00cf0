//! Scalar layouts: raw bytes, text and fixed-width integers.

use bytes::Bytes;

use super::{Decode, Encode};
use crate::error::{MemcError, Result};

fn width_mismatch(type_name: &str, expected: usize, got: usize) -> MemcError {
    MemcError::Decoding(format!(
        "{} needs exactly {} bytes, got {}",
        type_name, expected, got
    ))
}

// =============================================================================
// Byte Sequences
// =============================================================================

impl Encode for [u8] {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.to_vec())
    }
}

impl Encode for Vec<u8> {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.clone())
    }
}

impl Decode for Vec<u8> {
    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bytes.to_vec())
    }
}

impl Encode for Bytes {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.to_vec())
    }
}

impl Decode for Bytes {
    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(Bytes::copy_from_slice(bytes))
    }
}

// =============================================================================
// Text
// =============================================================================

impl Encode for str {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.as_bytes().to_vec())
    }
}

impl Encode for String {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.as_bytes().to_vec())
    }
}

impl Decode for String {
    fn decode(bytes: &[u8]) -> Result<Self> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| MemcError::Decoding(format!("text is not valid UTF-8: {}", e)))
    }
}

// =============================================================================
// Fixed-Width Integers
// =============================================================================

macro_rules! fixed_width {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Result<Vec<u8>> {
                    Ok(self.to_le_bytes().to_vec())
                }
            }

            impl Decode for $ty {
                fn decode(bytes: &[u8]) -> Result<Self> {
                    const WIDTH: usize = std::mem::size_of::<$ty>();
                    let raw: [u8; WIDTH] = bytes
                        .try_into()
                        .map_err(|_| width_mismatch(stringify!($ty), WIDTH, bytes.len()))?;
                    Ok(<$ty>::from_le_bytes(raw))
                }
            }
        )+
    };
}

fixed_width!(i8, u8, i16, u16, i32, u32, i64, u64);

// Platform-width integers always travel as 64 bits so payloads written on one
// target decode on another.

impl Encode for isize {
    fn encode(&self) -> Result<Vec<u8>> {
        (*self as i64).encode()
    }
}

impl Decode for isize {
    fn decode(bytes: &[u8]) -> Result<Self> {
        let wide = i64::decode(bytes).map_err(|_| width_mismatch("isize", 8, bytes.len()))?;
        isize::try_from(wide)
            .map_err(|_| MemcError::Decoding(format!("{} does not fit in isize", wide)))
    }
}

impl Encode for usize {
    fn encode(&self) -> Result<Vec<u8>> {
        (*self as u64).encode()
    }
}

impl Decode for usize {
    fn decode(bytes: &[u8]) -> Result<Self> {
        let wide = u64::decode(bytes).map_err(|_| width_mismatch("usize", 8, bytes.len()))?;
        usize::try_from(wide)
            .map_err(|_| MemcError::Decoding(format!("{} does not fit in usize", wide)))
    }
}
