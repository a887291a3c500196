//! Messages exchanged with the browser extension.
//!
//! Requests carry a `command` string and command-specific fields. Responses
//! carry a `success` flag plus either `data`/`message` or `error`.

mod request;
mod response;

pub use request::Request;
pub use response::{Response, ResponseData};

/// Largest frame payload accepted or produced, in bytes.
pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024;
