//! Command definitions
//!
//! Represents commands sent to the server.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Set,
}

impl CommandType {
    /// Wire verb for this command
    pub fn verb(&self) -> &'static [u8] {
        match self {
            CommandType::Get => b"get",
            CommandType::Set => b"set",
        }
    }
}

/// A command borrowing its key and payload from the caller
#[derive(Debug, Clone)]
pub enum Command<'a> {
    /// Fetch the item stored under a key
    Get { key: &'a str },

    /// Store an item unconditionally
    Set {
        key: &'a str,
        flags: u32,
        exptime: u32,
        data: &'a [u8],
    },
}

impl<'a> Command<'a> {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Set { .. } => CommandType::Set,
        }
    }

    /// Key the command addresses
    pub fn key(&self) -> &'a str {
        match self {
            Command::Get { key } | Command::Set { key, .. } => key,
        }
    }
}
