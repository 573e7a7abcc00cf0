//! Protocol codec
//!
//! Encoding of commands and stream-based parsing of replies.
//!
//! Replies are read line by line from a buffered reader; item payloads are
//! read by their declared length so binary data containing `\r\n` is safe.

use std::io::{BufRead, Read, Write};

use bytes::{BufMut, BytesMut};

use super::{Command, Response, Value};
use crate::transport::{TransportError, TransportResult};

/// Largest item payload accepted from the server (128 MB, memcached's `-I` ceiling
/// in common deployments)
pub const MAX_VALUE_SIZE: usize = 128 * 1024 * 1024;

/// Longest reply line accepted, terminator included. A `VALUE` header with a
/// maximal key and every numeric field fits well inside it.
pub const MAX_LINE_LEN: usize = 1024;

const CRLF: &[u8] = b"\r\n";

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command into the provided buffer
pub fn encode_command(command: &Command<'_>, out: &mut BytesMut) {
    out.put_slice(command.command_type().verb());
    out.put_u8(b' ');
    out.put_slice(command.key().as_bytes());

    match command {
        Command::Get { .. } => out.put_slice(CRLF),
        Command::Set {
            flags,
            exptime,
            data,
            ..
        } => {
            out.put_slice(format!(" {} {} {}\r\n", flags, exptime, data.len()).as_bytes());
            out.put_slice(data);
            out.put_slice(CRLF);
        }
    }
}

/// Write a command to a stream
pub fn write_command<W: Write>(
    writer: &mut W,
    command: &Command<'_>,
    buf: &mut BytesMut,
) -> TransportResult<()> {
    buf.clear();
    encode_command(command, buf);
    writer.write_all(&buf[..])?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Response Parsing
// =============================================================================

/// Read one complete reply from a stream
///
/// Blocks until the reply is complete, the stream ends, or an error occurs.
pub fn read_response<R: BufRead>(reader: &mut R, line_buf: &mut Vec<u8>) -> TransportResult<Response> {
    read_line(reader, line_buf)?;
    let line = line_buf.as_slice();

    if line == b"STORED" {
        return Ok(Response::Stored);
    }
    if line == b"NOT_STORED" {
        return Ok(Response::NotStored);
    }
    if line == b"END" {
        return Ok(Response::Values(Vec::new()));
    }
    if line == b"ERROR" {
        return Ok(Response::Error);
    }
    if let Some(msg) = line.strip_prefix(b"CLIENT_ERROR ") {
        return Ok(Response::ClientError(String::from_utf8_lossy(msg).into_owned()));
    }
    if let Some(msg) = line.strip_prefix(b"SERVER_ERROR ") {
        return Ok(Response::ServerError(String::from_utf8_lossy(msg).into_owned()));
    }
    if line.starts_with(b"VALUE ") {
        return read_values(reader, line_buf);
    }

    Err(TransportError::Protocol(format!(
        "unknown response line: {:?}",
        String::from_utf8_lossy(line)
    )))
}

/// Read `VALUE` blocks until the terminating `END`
///
/// `line_buf` holds the first `VALUE` header on entry.
fn read_values<R: BufRead>(reader: &mut R, line_buf: &mut Vec<u8>) -> TransportResult<Response> {
    let mut values = Vec::new();

    loop {
        if line_buf.as_slice() == b"END" {
            return Ok(Response::Values(values));
        }

        let (key, flags, len, cas) = parse_value_header(line_buf)?;

        let mut data = vec![0u8; len];
        reader.read_exact(&mut data)?;

        let mut terminator = [0u8; 2];
        reader.read_exact(&mut terminator)?;
        if terminator != *b"\r\n" {
            return Err(TransportError::Protocol(
                "missing data terminator".to_string(),
            ));
        }

        values.push(Value {
            key,
            flags,
            data,
            cas,
        });

        read_line(reader, line_buf)?;
    }
}

/// Parse `VALUE <key> <flags> <bytes> [<cas>]`
fn parse_value_header(line: &[u8]) -> TransportResult<(Vec<u8>, u32, usize, Option<u64>)> {
    let rest = line
        .strip_prefix(b"VALUE ")
        .ok_or_else(|| TransportError::Protocol("expected VALUE or END".to_string()))?;

    let parts: Vec<&[u8]> = rest.split(|&b| b == b' ').collect();
    if parts.len() < 3 || parts.len() > 4 {
        return Err(TransportError::Protocol(format!(
            "invalid VALUE line: {:?}",
            String::from_utf8_lossy(line)
        )));
    }

    let key = parts[0].to_vec();
    let flags: u32 = parse_number(parts[1])?;
    let len: usize = parse_number(parts[2])?;
    if len > MAX_VALUE_SIZE {
        return Err(TransportError::Protocol(format!(
            "value too large: {} bytes (max {})",
            len, MAX_VALUE_SIZE
        )));
    }
    let cas = match parts.get(3) {
        Some(raw) => Some(parse_number(raw)?),
        None => None,
    };

    Ok((key, flags, len, cas))
}

fn parse_number<N: std::str::FromStr>(raw: &[u8]) -> TransportResult<N> {
    std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            TransportError::Protocol(format!(
                "invalid number: {:?}",
                String::from_utf8_lossy(raw)
            ))
        })
}

/// Read a `\r\n` terminated line into `buf`, without the terminator
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> TransportResult<()> {
    buf.clear();
    let bytes = reader
        .by_ref()
        .take(MAX_LINE_LEN as u64)
        .read_until(b'\n', buf)?;
    if bytes == 0 {
        return Err(TransportError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "connection closed by server",
        )));
    }
    if bytes == MAX_LINE_LEN && !buf.ends_with(b"\n") {
        return Err(TransportError::Protocol(format!(
            "reply line exceeds {} bytes",
            MAX_LINE_LEN
        )));
    }
    if !buf.ends_with(CRLF) {
        return Err(TransportError::Protocol("line not terminated by CRLF".to_string()));
    }
    buf.truncate(buf.len() - 2);
    Ok(())
}
