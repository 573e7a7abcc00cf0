//! Configuration for memc
//!
//! Centralized client configuration with documented defaults. A `Config` is
//! applied once when the client is constructed and is read-only afterwards.

use std::time::Duration;

/// Main configuration for a memc client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Routing Configuration
    // -------------------------------------------------------------------------
    /// Ordered server addresses (`host:port`). Keys are routed across them by
    /// checksum, so the order matters and must match other clients sharing
    /// the same cache.
    pub servers: Vec<String>,

    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Timeout for establishing a TCP connection.
    /// Zero means no timeout (blocking connect).
    pub dial_timeout: Duration,

    /// Max idle connections kept per server
    pub max_idle_per_server: usize,

    // -------------------------------------------------------------------------
    // Expiration Configuration
    // -------------------------------------------------------------------------
    /// Expiration applied by `set` when no per-call ttl is given.
    /// Zero means entries never expire.
    pub default_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            dial_timeout: Duration::ZERO,
            max_idle_per_server: 2,
            default_ttl: Duration::ZERO,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Append one server address
    pub fn server(mut self, addr: impl Into<String>) -> Self {
        self.config.servers.push(addr.into());
        self
    }

    /// Replace the server list
    pub fn servers<I, S>(mut self, addrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.servers = addrs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the connection dial timeout
    pub fn dial_timeout(mut self, timeout: Duration) -> Self {
        self.config.dial_timeout = timeout;
        self
    }

    /// Set the default ttl used by `set`
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.config.default_ttl = ttl;
        self
    }

    /// Set the number of idle connections retained per server
    pub fn max_idle_per_server(mut self, count: usize) -> Self {
        self.config.max_idle_per_server = count;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
