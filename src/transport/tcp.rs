//! TCP Transport
//!
//! Routes each key to one server of an ordered list and runs the command
//! over a pooled connection to it.
//!
//! Server selection is `crc32(key) % servers`, so every client configured
//! with the same ordered list agrees on where a key lives.

use std::sync::atomic::{AtomicBool, Ordering};

use super::{PooledConnection, ServerPool, Transport, TransportError, TransportResult};
use crate::config::Config;
use crate::protocol::{Command, Response};

/// Pooled TCP transport over the memcached ASCII protocol
pub struct TcpTransport {
    servers: Vec<ServerPool>,
    closed: AtomicBool,
}

impl TcpTransport {
    /// Build pools for every configured server. Nothing is dialed yet.
    pub fn new(config: &Config) -> Self {
        let servers = config
            .servers
            .iter()
            .map(|addr| ServerPool::new(addr.as_str(), config.dial_timeout, config.max_idle_per_server))
            .collect();

        Self {
            servers,
            closed: AtomicBool::new(false),
        }
    }

    /// Index of the server responsible for `key`
    pub fn route(&self, key: &str) -> TransportResult<usize> {
        match self.servers.len() {
            0 => Err(TransportError::NoServers),
            1 => Ok(0),
            n => Ok((crc32fast::hash(key.as_bytes()) % n as u32) as usize),
        }
    }

    fn pool_for(&self, key: &str) -> TransportResult<&ServerPool> {
        if self.closed.load(Ordering::Acquire) {
            return Err(TransportError::Closed);
        }
        let idx = self.route(key)?;
        Ok(&self.servers[idx])
    }
}

/// Map a reply that is not the command's success outcome to an error.
///
/// After `ERROR` or `CLIENT_ERROR` the server may still read the rest of the
/// rejected command (a `set` data block) as a new request, so the connection
/// is out of step and gets dropped. `SERVER_ERROR` comes after the request
/// was consumed and keeps it.
fn rejection(conn: &mut PooledConnection<'_>, response: Response) -> TransportError {
    match response {
        Response::ServerError(msg) => TransportError::Server(msg),
        Response::ClientError(msg) => {
            conn.discard();
            TransportError::Server(msg)
        }
        other if other.is_error() => {
            conn.discard();
            TransportError::Server("ERROR".to_string())
        }
        other => {
            conn.discard();
            TransportError::UnexpectedResponse(format!("{:?}", other))
        }
    }
}

impl Transport for TcpTransport {
    fn store(&self, key: &str, flags: u32, ttl: u32, payload: &[u8]) -> TransportResult<()> {
        let pool = self.pool_for(key)?;
        let mut conn = pool.acquire()?;

        let response = conn.exec(&Command::Set {
            key,
            flags,
            exptime: ttl,
            data: payload,
        })?;

        match response {
            Response::Stored => Ok(()),
            Response::NotStored => Err(TransportError::NotStored),
            other => Err(rejection(&mut conn, other)),
        }
    }

    fn retrieve(&self, key: &str) -> TransportResult<Option<Vec<u8>>> {
        let pool = self.pool_for(key)?;
        let mut conn = pool.acquire()?;

        match conn.exec(&Command::Get { key })? {
            response if response.is_miss() => Ok(None),
            Response::Values(mut values) => {
                let value = values.swap_remove(0);
                if values.is_empty() && value.key == key.as_bytes() {
                    return Ok(Some(value.data));
                }
                conn.discard();
                Err(TransportError::UnexpectedResponse(format!(
                    "reply for key {:?} to get {:?}",
                    String::from_utf8_lossy(&value.key),
                    key
                )))
            }
            other => Err(rejection(&mut conn, other)),
        }
    }

    fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        for pool in &self.servers {
            pool.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(servers: &[&str]) -> TcpTransport {
        TcpTransport::new(&Config::builder().servers(servers.iter().copied()).build())
    }

    #[test]
    fn test_route_without_servers() {
        let t = transport(&[]);
        assert!(matches!(t.route("k"), Err(TransportError::NoServers)));
    }

    #[test]
    fn test_route_single_server() {
        let t = transport(&["a:11211"]);
        assert_eq!(t.route("anything").unwrap(), 0);
    }

    #[test]
    fn test_route_is_checksum_modulo() {
        let t = transport(&["a:11211", "b:11211", "c:11211"]);
        for key in ["alpha", "beta", "gamma", "delta"] {
            let expected = (crc32fast::hash(key.as_bytes()) % 3) as usize;
            assert_eq!(t.route(key).unwrap(), expected);
            assert_eq!(t.route(key).unwrap(), t.route(key).unwrap());
        }
    }

    #[test]
    fn test_route_spreads_keys() {
        let t = transport(&["a:11211", "b:11211", "c:11211"]);
        let mut counts = [0u32; 3];
        for i in 0..3000 {
            counts[t.route(&format!("key-{}", i)).unwrap()] += 1;
        }
        for count in counts {
            assert!((700..=1300).contains(&count), "uneven spread: {:?}", counts);
        }
    }

    #[test]
    fn test_closed_transport_refuses_work() {
        let t = transport(&["127.0.0.1:1"]);
        t.close();
        t.close();
        assert!(matches!(t.retrieve("k"), Err(TransportError::Closed)));
        assert!(matches!(t.store("k", 0, 0, b"v"), Err(TransportError::Closed)));
    }
}
