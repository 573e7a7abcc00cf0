//! Protocol Module
//!
//! memcached ASCII protocol, client side: the two storage/retrieval
//! commands this client issues and the replies the server sends back.
//!
//! ## Request Format
//! ```text
//! get <key>\r\n
//! set <key> <flags> <exptime> <bytes>\r\n<data>\r\n
//! ```
//!
//! ## Response Format
//! ```text
//! VALUE <key> <flags> <bytes> [<cas>]\r\n<data>\r\n ... END\r\n   (hit)
//! END\r\n                                                      (miss)
//! STORED\r\n | NOT_STORED\r\n
//! ERROR\r\n | CLIENT_ERROR <msg>\r\n | SERVER_ERROR <msg>\r\n
//! ```

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{Response, Value};
pub use codec::{encode_command, read_response, write_command, MAX_LINE_LEN, MAX_VALUE_SIZE};
