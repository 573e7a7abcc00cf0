//! Transport Module
//!
//! Moves opaque payloads between the client and the cache servers.
//!
//! ## Architecture
//! - [`TcpTransport`]: one connection pool per server, keys routed by
//!   CRC32 checksum, memcached ASCII protocol on the wire
//! - [`MemoryTransport`]: in-process map with the same store/retrieve
//!   semantics, for tests and embedding
//!
//! Transports are shared by every caller of a client, so implementations
//! must accept concurrent calls on unrelated keys.

mod connection;
mod memory;
mod pool;
mod tcp;

use std::sync::Arc;

use thiserror::Error;

pub use connection::Connection;
pub use memory::MemoryTransport;
pub use pool::{PooledConnection, ServerPool};
pub use tcp::TcpTransport;

/// Result type alias using TransportError
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Failures below the typed client: network, framing and server replies
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Item not stored")]
    NotStored,

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("No servers configured")]
    NoServers,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Transport is closed")]
    Closed,
}

/// Byte-level store/retrieve against a cache
pub trait Transport: Send + Sync {
    /// Store `payload` under `key` with opaque `flags`, expiring after `ttl`
    /// seconds (0 = never)
    fn store(&self, key: &str, flags: u32, ttl: u32, payload: &[u8]) -> TransportResult<()>;

    /// Fetch the payload stored under `key`, `None` when absent
    fn retrieve(&self, key: &str) -> TransportResult<Option<Vec<u8>>>;

    /// Release held resources. Later calls fail with [`TransportError::Closed`].
    fn close(&self);
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn store(&self, key: &str, flags: u32, ttl: u32, payload: &[u8]) -> TransportResult<()> {
        (**self).store(key, flags, ttl, payload)
    }

    fn retrieve(&self, key: &str) -> TransportResult<Option<Vec<u8>>> {
        (**self).retrieve(key)
    }

    fn close(&self) {
        (**self).close()
    }
}
