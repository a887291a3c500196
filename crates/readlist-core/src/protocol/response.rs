//! Outbound responses.

use std::fmt;

use serde::Serialize;

use crate::bookmarks::ReadingListItem;
use crate::document::Document;

/// Payload of a successful data response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Document(Document),
    ReadingList(Vec<ReadingListItem>),
}

impl From<Document> for ResponseData {
    fn from(document: Document) -> Self {
        ResponseData::Document(document)
    }
}

impl From<Vec<ReadingListItem>> for ResponseData {
    fn from(items: Vec<ReadingListItem>) -> Self {
        ResponseData::ReadingList(items)
    }
}

/// A response to the extension.
///
/// Serializes as `{"success": true, "data": ...}`,
/// `{"success": true, "message": "..."}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// A successful response carrying data.
    pub fn data(data: impl Into<ResponseData>) -> Self {
        Self {
            success: true,
            data: Some(data.into()),
            message: None,
            error: None,
        }
    }

    /// A successful response carrying a human-readable message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// A failure response.
    pub fn error(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.to_string()),
        }
    }
}
