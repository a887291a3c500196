//! Property-list codec.

use std::io::{Read, Seek, Write};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use plist::{Dictionary, Value};

use readlist_core::document::{Document, Number};
use readlist_core::error::{CodecError, DocumentError};
use readlist_core::traits::DocumentCodec;

const FORMAT_NAME: &str = "a property list";

/// On-disk property-list encoding used when saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlistFormat {
    /// Apple's binary `bplist00` encoding, the one Safari writes.
    #[default]
    Binary,
    /// The XML encoding.
    Xml,
}

/// Encodes documents as property lists.
///
/// Decoding accepts both encodings regardless of the configured format.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlistCodec {
    format: PlistFormat,
}

impl PlistCodec {
    pub fn new(format: PlistFormat) -> Self {
        Self { format }
    }
}

impl DocumentCodec for PlistCodec {
    fn decode<R: Read + Seek>(&self, reader: R) -> Result<Document, CodecError> {
        let value = Value::from_reader(reader).map_err(format_error)?;
        Ok(from_plist(value)?)
    }

    fn encode<W: Write>(&self, writer: W, document: &Document) -> Result<(), CodecError> {
        let value = to_plist(document)?;
        match self.format {
            PlistFormat::Binary => value.to_writer_binary(writer),
            PlistFormat::Xml => value.to_writer_xml(writer),
        }
        .map_err(format_error)
    }
}

fn format_error(err: plist::Error) -> CodecError {
    CodecError::Format {
        message: err.to_string(),
    }
}

/// Convert a decoded property list into a document.
///
/// UIDs carry no meaning in a bookmarks file and load as unsigned numbers.
pub(crate) fn from_plist(value: Value) -> Result<Document, DocumentError> {
    let document = match value {
        Value::Boolean(b) => Document::Bool(b),
        Value::Integer(n) => match n.as_signed() {
            Some(signed) => Document::Number(Number::Integer(signed)),
            None => Document::Number(Number::Unsigned(n.as_unsigned().unwrap_or_default())),
        },
        Value::Real(n) => Document::Number(Number::Real(n)),
        Value::String(s) => Document::String(s),
        Value::Date(date) => Document::Date(DateTime::<Utc>::from(SystemTime::from(date))),
        Value::Data(bytes) => Document::Data(bytes),
        Value::Uid(uid) => Document::Number(Number::Unsigned(uid.get())),
        Value::Array(items) => Document::Sequence(
            items
                .into_iter()
                .map(from_plist)
                .collect::<Result<_, _>>()?,
        ),
        Value::Dictionary(dict) => Document::Mapping(
            dict.into_iter()
                .map(|(key, value)| Ok((key, from_plist(value)?)))
                .collect::<Result<_, DocumentError>>()?,
        ),
        other => {
            return Err(DocumentError::Unsupported {
                what: format!("{other:?}"),
                format: "a document",
            });
        }
    };
    Ok(document)
}

/// Convert a document into a property list.
///
/// Fails on `Null`, which property lists cannot express.
pub(crate) fn to_plist(document: &Document) -> Result<Value, DocumentError> {
    let value = match document {
        Document::Null => {
            return Err(DocumentError::Unsupported {
                what: document.kind().to_string(),
                format: FORMAT_NAME,
            });
        }
        Document::Bool(b) => Value::Boolean(*b),
        Document::Number(Number::Integer(n)) => Value::Integer((*n).into()),
        Document::Number(Number::Unsigned(n)) => Value::Integer((*n).into()),
        Document::Number(Number::Real(n)) => Value::Real(*n),
        Document::String(s) => Value::String(s.clone()),
        Document::Date(date) => Value::Date(SystemTime::from(*date).into()),
        Document::Data(bytes) => Value::Data(bytes.clone()),
        Document::Sequence(items) => {
            Value::Array(items.iter().map(to_plist).collect::<Result<_, _>>()?)
        }
        Document::Mapping(map) => {
            let mut dict = Dictionary::new();
            for (key, value) in map {
                dict.insert(key.clone(), to_plist(value)?);
            }
            Value::Dictionary(dict)
        }
    };
    Ok(value)
}
