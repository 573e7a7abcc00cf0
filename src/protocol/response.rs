//! Response definitions
//!
//! Represents replies parsed from the server.

/// A single item from a `get` reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub key: Vec<u8>,
    pub flags: u32,
    pub data: Vec<u8>,
    /// CAS token, present when the server includes it
    pub cas: Option<u64>,
}

/// A parsed server reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Items returned by `get` (empty on a miss)
    Values(Vec<Value>),

    /// `set` succeeded
    Stored,

    /// `set` condition not met
    NotStored,

    /// Unknown command
    Error,

    /// Malformed request, with the server's message
    ClientError(String),

    /// Server-side failure, with the server's message
    ServerError(String),
}

impl Response {
    /// True for ERROR, CLIENT_ERROR and SERVER_ERROR replies
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Response::Error | Response::ClientError(_) | Response::ServerError(_)
        )
    }

    /// True for a `get` reply carrying no items
    pub fn is_miss(&self) -> bool {
        matches!(self, Response::Values(values) if values.is_empty())
    }
}
