//! Server Connection
//!
//! A single TCP connection to one cache server.

use std::io::{BufReader, BufWriter};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use bytes::BytesMut;

use super::{TransportError, TransportResult};
use crate::protocol::{read_response, write_command, Command, Response};

/// A connection to one server with reusable buffers
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Reply line scratch buffer
    line_buf: Vec<u8>,

    /// Command encoding buffer
    write_buf: BytesMut,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Dial `addr`, trying every address it resolves to.
    ///
    /// A zero `dial_timeout` blocks until the OS gives up.
    pub fn connect(addr: &str, dial_timeout: Duration) -> TransportResult<Self> {
        let candidates: Vec<SocketAddr> = addr
            .to_socket_addrs()
            .map_err(|e| TransportError::InvalidAddress(format!("{}: {}", addr, e)))?
            .collect();

        let mut last_err =
            TransportError::InvalidAddress(format!("{}: resolved to no addresses", addr));

        for candidate in candidates {
            let attempt = if dial_timeout.is_zero() {
                TcpStream::connect(candidate)
            } else {
                TcpStream::connect_timeout(&candidate, dial_timeout)
            };

            match attempt {
                Ok(stream) => return Self::new(stream),
                Err(e) => {
                    tracing::debug!("Dial {} ({}) failed: {}", addr, candidate, e);
                    last_err = TransportError::Io(e);
                }
            }
        }

        Err(last_err)
    }

    /// Wrap an established stream
    pub fn new(stream: TcpStream) -> TransportResult<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        tracing::debug!("Connected to {}", peer_addr);

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            line_buf: Vec::with_capacity(128),
            write_buf: BytesMut::with_capacity(256),
            peer_addr,
        })
    }

    /// Send one command and read its reply
    pub fn exec(&mut self, command: &Command<'_>) -> TransportResult<Response> {
        tracing::trace!(
            "Sending {:?} for key {} to {}",
            command.command_type(),
            command.key(),
            self.peer_addr
        );

        write_command(&mut self.writer, command, &mut self.write_buf)?;
        read_response(&mut self.reader, &mut self.line_buf)
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
