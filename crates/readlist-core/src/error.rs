//! Error types for the reading list host.
//!
//! Document errors describe values that do not have the shape an operation
//! expects. Store errors describe failures at the file boundary and render
//! the exact text reported back to the extension.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::document::DocumentKind;

/// Structural errors raised while navigating or converting a [`Document`].
///
/// [`Document`]: crate::Document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A value had a different variant than the one required.
    #[error("expected {expected}, found {found}")]
    VariantMismatch {
        expected: DocumentKind,
        found: DocumentKind,
    },

    /// A mapping lacked a required key.
    #[error("missing field '{key}'")]
    MissingField { key: String },

    /// A value cannot be represented in the target encoding.
    #[error("{what} values cannot be encoded as {format}")]
    Unsupported { what: String, format: &'static str },
}

/// Errors raised by a [`DocumentCodec`](crate::DocumentCodec).
#[derive(Debug, Error)]
pub enum CodecError {
    /// The encoded bytes are malformed.
    #[error("{message}")]
    Format { message: String },

    /// The document holds a value the encoding cannot express.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Reading or writing the underlying stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failures at the bookmarks file boundary.
///
/// `Open` and `Decode` separate an unreadable file from malformed content.
/// The remaining variants follow the steps of an atomic save.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be opened for reading.
    #[error("Error opening bookmarks file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but its content could not be decoded.
    #[error("Error decoding plist: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// The existing file could not be moved aside.
    #[error("Error creating backup: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The replacement file could not be created.
    #[error("Error creating new bookmarks file: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the document into the replacement file failed.
    #[error("Error encoding plist: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

impl StoreError {
    /// Check if the file was readable but held malformed content.
    pub fn is_decode(&self) -> bool {
        matches!(self, StoreError::Decode { .. })
    }
}
