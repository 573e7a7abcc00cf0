//! Value Codec Module
//!
//! Converts typed values to the opaque byte payloads the cache stores, and
//! back. This is the only place where type information survives the trip
//! through the server, so every layout is fixed and exact.
//!
//! ## Layouts
//! ```text
//! ┌──────────────────────┬────────────────────────────────────────────┐
//! │ Type                 │ Payload                                    │
//! ├──────────────────────┼────────────────────────────────────────────┤
//! │ [u8] / Vec<u8>       │ bytes unchanged                            │
//! │ str / String         │ UTF-8 bytes                                │
//! │ i8 .. u64            │ little-endian, width bytes                 │
//! │ isize / usize        │ little-endian, 8 bytes                     │
//! │ record (serde)       │ fields in declaration order, fixint LE,    │
//! │                      │ strings/vecs prefixed with u64 length      │
//! │ Box<T> / &T          │ same as T                                  │
//! └──────────────────────┴────────────────────────────────────────────┘
//! ```
//!
//! Decoding is dispatched statically on the requested type. A payload whose
//! length does not match the expected width or structure is rejected with
//! [`MemcError::Decoding`](crate::MemcError::Decoding), never truncated.

mod record;
mod scalar;

pub use record::{decode_record, encode_record};

use crate::error::Result;

/// A value that can be written to the cache
pub trait Encode {
    /// Produce the byte payload for this value
    fn encode(&self) -> Result<Vec<u8>>;
}

/// A value that can be read back from the cache
pub trait Decode: Sized {
    /// Rebuild a value from a payload produced by the matching `Encode`
    fn decode(bytes: &[u8]) -> Result<Self>;
}

/// Encode any supported value
pub fn encode<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    value.encode()
}

/// Decode a payload as `T`
pub fn decode<T: Decode>(bytes: &[u8]) -> Result<T> {
    T::decode(bytes)
}

// =============================================================================
// Pointer Forms
// =============================================================================

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> Result<Vec<u8>> {
        (**self).encode()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self) -> Result<Vec<u8>> {
        (**self).encode()
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(bytes: &[u8]) -> Result<Self> {
        T::decode(bytes).map(Box::new)
    }
}

/// Register serde records with the codec.
///
/// The types must implement `serde::Serialize` and `serde::Deserialize`.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Person {
///     name: String,
///     age: i64,
/// }
///
/// memc::record!(Person);
///
/// let bytes = memc::codec::encode(&Person { name: "bob".into(), age: 32 }).unwrap();
/// assert_eq!(bytes.len(), 19);
/// ```
#[macro_export]
macro_rules! record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::codec::Encode for $ty {
                fn encode(&self) -> $crate::Result<::std::vec::Vec<u8>> {
                    $crate::codec::encode_record(self)
                }
            }

            impl $crate::codec::Decode for $ty {
                fn decode(bytes: &[u8]) -> $crate::Result<Self> {
                    $crate::codec::decode_record(bytes)
                }
            }
        )+
    };
}
