//! In-process transport
//!
//! A `HashMap` behind a `RwLock` with memcached's store/retrieve semantics:
//! relative ttl in seconds, zero meaning no expiry, flags kept opaque.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::{Transport, TransportError, TransportResult};

struct Item {
    flags: u32,
    data: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Item {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

/// Transport keeping items in process memory
#[derive(Default)]
pub struct MemoryTransport {
    items: RwLock<HashMap<String, Item>>,
    closed: AtomicBool,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.items.read().values().filter(|item| item.is_live(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flags stored with a live item
    pub fn flags(&self, key: &str) -> Option<u32> {
        let now = Instant::now();
        self.items
            .read()
            .get(key)
            .filter(|item| item.is_live(now))
            .map(|item| item.flags)
    }

    fn ensure_open(&self) -> TransportResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(TransportError::Closed);
        }
        Ok(())
    }
}

impl Transport for MemoryTransport {
    fn store(&self, key: &str, flags: u32, ttl: u32, payload: &[u8]) -> TransportResult<()> {
        self.ensure_open()?;

        let expires_at = match ttl {
            0 => None,
            secs => Some(Instant::now() + Duration::from_secs(u64::from(secs))),
        };

        self.items.write().insert(
            key.to_string(),
            Item {
                flags,
                data: payload.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }

    fn retrieve(&self, key: &str) -> TransportResult<Option<Vec<u8>>> {
        self.ensure_open()?;

        let now = Instant::now();
        let items = self.items.read();
        Ok(items
            .get(key)
            .filter(|item| item.is_live(now))
            .map(|item| item.data.clone()))
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.items.write().clear();
    }
}
