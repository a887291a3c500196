//! Document codec trait.

use std::io::{Read, Seek, Write};

use crate::document::Document;
use crate::error::CodecError;

/// Converts between a [`Document`] and its on-disk encoding.
pub trait DocumentCodec {
    /// Decode a document from `reader`.
    fn decode<R: Read + Seek>(&self, reader: R) -> Result<Document, CodecError>;

    /// Encode `document` into `writer`.
    ///
    /// May have written a partial encoding when it fails.
    fn encode<W: Write>(&self, writer: W, document: &Document) -> Result<(), CodecError>;
}
