//! Inbound requests.

use serde_json::{Map, Value};

/// A decoded request from the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `{"command": "getBookmarks"}` - return the whole bookmarks document.
    GetBookmarks,

    /// `{"command": "getReadingList"}` - return the flattened reading list.
    GetReadingList,

    /// `{"command": "deleteBookmark", "url": "..."}`.
    ///
    /// `url` is `None` when the field is absent or not a string.
    DeleteBookmark { url: Option<String> },

    /// Any other command string.
    Unknown(String),
}

impl Request {
    pub const GET_BOOKMARKS: &'static str = "getBookmarks";
    pub const GET_READING_LIST: &'static str = "getReadingList";
    pub const DELETE_BOOKMARK: &'static str = "deleteBookmark";

    /// Interpret a decoded message object.
    ///
    /// Returns `None` when the message has no string `command`; such
    /// messages get no response at all.
    pub fn from_message(message: &Map<String, Value>) -> Option<Self> {
        let command = message.get("command")?.as_str()?;

        let request = match command {
            Self::GET_BOOKMARKS => Request::GetBookmarks,
            Self::GET_READING_LIST => Request::GetReadingList,
            Self::DELETE_BOOKMARK => Request::DeleteBookmark {
                url: message.get("url").and_then(Value::as_str).map(str::to_string),
            },
            other => Request::Unknown(other.to_string()),
        };

        Some(request)
    }

    /// The command name as sent on the wire.
    pub fn command(&self) -> &str {
        match self {
            Request::GetBookmarks => Self::GET_BOOKMARKS,
            Request::GetReadingList => Self::GET_READING_LIST,
            Request::DeleteBookmark { .. } => Self::DELETE_BOOKMARK,
            Request::Unknown(command) => command,
        }
    }
}
