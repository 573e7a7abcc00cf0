//! Connection Pool
//!
//! Reuses TCP connections to one server so concurrent callers do not pay a
//! handshake per operation.
//!
//! Idle connections sit in a bounded lock-free queue. A connection that saw
//! an IO or framing error is never returned to the queue, since its stream
//! position is unknown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossbeam::queue::ArrayQueue;

use super::{Connection, TransportError, TransportResult};
use crate::protocol::{Command, Response};

/// Pool of connections to a single server
pub struct ServerPool {
    addr: String,
    dial_timeout: Duration,
    max_idle: usize,
    idle: ArrayQueue<Connection>,
    closed: AtomicBool,
}

impl ServerPool {
    /// Create an empty pool; connections are dialed on demand
    pub fn new(addr: impl Into<String>, dial_timeout: Duration, max_idle: usize) -> Self {
        Self {
            addr: addr.into(),
            dial_timeout,
            max_idle,
            // ArrayQueue needs a non-zero capacity; max_idle == 0 never pushes
            idle: ArrayQueue::new(max_idle.max(1)),
            closed: AtomicBool::new(false),
        }
    }

    /// Server address this pool dials
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Number of idle connections currently held
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Take an idle connection or dial a new one
    pub fn acquire(&self) -> TransportResult<PooledConnection<'_>> {
        if self.closed.load(Ordering::Acquire) {
            return Err(TransportError::Closed);
        }

        let conn = match self.idle.pop() {
            Some(conn) => conn,
            None => Connection::connect(&self.addr, self.dial_timeout)?,
        };

        Ok(PooledConnection {
            pool: self,
            conn: Some(conn),
            valid: true,
        })
    }

    /// Drop idle connections and refuse further checkouts
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        let mut dropped = 0;
        while self.idle.pop().is_some() {
            dropped += 1;
        }
        tracing::debug!("Closed pool for {} ({} idle connections dropped)", self.addr, dropped);
    }

    fn release(&self, conn: Connection) {
        if self.max_idle == 0 || self.closed.load(Ordering::Acquire) {
            return;
        }
        // Queue full: the surplus connection is simply dropped
        let _ = self.idle.push(conn);
    }
}

/// RAII checkout returning the connection to its pool on drop
pub struct PooledConnection<'a> {
    pool: &'a ServerPool,
    conn: Option<Connection>,
    valid: bool,
}

impl PooledConnection<'_> {
    /// Execute a command; IO or framing failure poisons the connection
    pub fn exec(&mut self, command: &Command<'_>) -> TransportResult<Response> {
        let conn = self.conn.as_mut().ok_or(TransportError::Closed)?;
        let response = conn.exec(command);
        if let Err(ref e) = response {
            tracing::warn!("Discarding connection to {}: {}", conn.peer_addr(), e);
            self.valid = false;
        }
        response
    }

    /// Mark the connection unusable so it is closed instead of reused
    pub fn discard(&mut self) {
        self.valid = false;
    }
}

impl Drop for PooledConnection<'_> {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            if self.valid {
                self.pool.release(conn);
            }
        }
    }
}
