//! # memc
//!
//! A typed client for memcached-compatible caches:
//! - Type-preserving value codec (bytes, text, integers, serde records)
//! - Local key and expiration validation before any network call
//! - Pooled TCP transport with checksum routing across servers
//! - Errors tagged by kind, with cache misses distinct from failures
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Client<T>                              │
//! │        set: check → encode → ttl → store                     │
//! │        get: check → retrieve → decode                        │
//! └──────┬──────────────┬──────────────┬────────────────────────┘
//!        │              │              │
//!        ▼              ▼              ▼
//!   ┌─────────┐   ┌───────────┐  ┌────────────┐
//!   │   key   │   │   codec   │  │ expiration │
//!   └─────────┘   └───────────┘  └────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Transport                                 │
//! │     TcpTransport (crc32 routing, pools)  │  MemoryTransport  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  memcached ASCII protocol
//!                       ▼
//!               ┌──────────────┐
//!               │   servers    │
//!               └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use memc::{Client, MemcError};
//!
//! let client = Client::new(["127.0.0.1:11211"]);
//! client.set("greeting", "hello")?;
//! let value: String = client.get("greeting")?;
//! assert_eq!(value, "hello");
//!
//! match client.get::<u64>("never-set") {
//!     Err(MemcError::CacheMiss) => {}
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Ok::<(), MemcError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod key;
pub mod expiration;
pub mod protocol;
pub mod transport;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, MemcError, Result};
pub use config::{Config, ConfigBuilder};
pub use codec::{Decode, Encode};
pub use client::Client;
pub use transport::{MemoryTransport, TcpTransport, Transport, TransportError};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of memc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
