//! Client Module
//!
//! The typed front of the cache. Every call is a single attempt:
//!
//! ```text
//! set:  key check → encode → ttl → transport.store
//! get:  key check → transport.retrieve → (miss | decode)
//! ```
//!
//! Validation, encoding and ttl conversion all run before the transport is
//! touched, so a rejected call never sends anything to a server.

use std::time::Duration;

use crate::codec::{Decode, Encode};
use crate::config::Config;
use crate::error::{MemcError, Result};
use crate::expiration;
use crate::key;
use crate::transport::{TcpTransport, Transport};

/// Flags written with every item. The client keeps type information in the
/// caller's static types, not on the server.
const ITEM_FLAGS: u32 = 0;

/// Typed cache client
///
/// Configuration is fixed at construction. The client is `Send + Sync` and
/// meant to be shared (e.g. in an `Arc`) by many threads.
pub struct Client<T: Transport = TcpTransport> {
    config: Config,
    transport: T,
}

impl Client<TcpTransport> {
    /// Client over TCP to `servers` with default settings
    pub fn new<I, S>(servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(Config::builder().servers(servers).build())
    }

    /// Client over TCP with a custom configuration
    pub fn with_config(config: Config) -> Self {
        let transport = TcpTransport::new(&config);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Client over a caller-provided transport
    pub fn with_transport(config: Config, transport: T) -> Self {
        tracing::debug!(
            "Client created for {} server(s), dial_timeout={:?}, default_ttl={:?}",
            config.servers.len(),
            config.dial_timeout,
            config.default_ttl
        );
        Self { config, transport }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Store `value` under `key` with the configured default ttl
    pub fn set<V: Encode + ?Sized>(&self, key: &str, value: &V) -> Result<()> {
        self.store(key, value, None)
    }

    /// Store `value` under `key`, expiring after `ttl` instead of the default.
    ///
    /// `ttl` must be whole seconds; zero means never expire.
    pub fn set_with_ttl<V: Encode + ?Sized>(&self, key: &str, value: &V, ttl: Duration) -> Result<()> {
        self.store(key, value, Some(ttl))
    }

    fn store<V: Encode + ?Sized>(&self, key: &str, value: &V, ttl: Option<Duration>) -> Result<()> {
        key::check(key)?;
        let payload = value.encode()?;
        let ttl = expiration::seconds(ttl.unwrap_or(self.config.default_ttl))?;

        tracing::debug!("set {} ({} bytes, ttl={}s)", key, payload.len(), ttl);

        self.transport.store(key, ITEM_FLAGS, ttl, &payload)?;
        Ok(())
    }

    /// Fetch the value under `key` decoded as `V`.
    ///
    /// An absent key yields [`MemcError::CacheMiss`].
    pub fn get<V: Decode>(&self, key: &str) -> Result<V> {
        key::check(key)?;

        match self.transport.retrieve(key)? {
            Some(payload) => {
                tracing::debug!("get {} hit ({} bytes)", key, payload.len());
                V::decode(&payload)
            }
            None => {
                tracing::debug!("get {} miss", key);
                Err(MemcError::CacheMiss)
            }
        }
    }

    /// Release transport resources. Safe to call more than once; later
    /// operations fail with a transport error.
    pub fn close(&self) {
        tracing::debug!("Closing client");
        self.transport.close();
    }
}
