//! Tagged document value.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::Number;
use crate::error::DocumentError;

/// An ordered mapping from string keys to document values.
///
/// Key order follows the source file and is kept on save.
pub type Mapping = IndexMap<String, Document>;

/// A loosely-typed nested value mirroring a property list.
///
/// `Null` has no property-list encoding; it exists so documents built from
/// JSON can be represented, and is rejected when such a document is saved.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(DateTime<Utc>),
    Data(Vec<u8>),
    Sequence(Vec<Document>),
    Mapping(Mapping),
}

/// The variant of a [`Document`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Null,
    Bool,
    Number,
    String,
    Date,
    Data,
    Sequence,
    Mapping,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Null => "null",
            DocumentKind::Bool => "bool",
            DocumentKind::Number => "number",
            DocumentKind::String => "string",
            DocumentKind::Date => "date",
            DocumentKind::Data => "data",
            DocumentKind::Sequence => "sequence",
            DocumentKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

impl Document {
    /// Create an empty mapping.
    pub fn mapping() -> Self {
        Document::Mapping(Mapping::new())
    }

    /// Returns the variant of this value.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Null => DocumentKind::Null,
            Document::Bool(_) => DocumentKind::Bool,
            Document::Number(_) => DocumentKind::Number,
            Document::String(_) => DocumentKind::String,
            Document::Date(_) => DocumentKind::Date,
            Document::Data(_) => DocumentKind::Data,
            Document::Sequence(_) => DocumentKind::Sequence,
            Document::Mapping(_) => DocumentKind::Mapping,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key. Returns `None` if this is not a mapping or the key is absent.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Mutable counterpart of [`Document::get`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Document> {
        match self {
            Document::Mapping(map) => map.get_mut(key),
            _ => None,
        }
    }

    /// Borrow the items of a sequence, or fail with a variant mismatch.
    pub fn expect_sequence(&self) -> Result<&[Document], DocumentError> {
        match self {
            Document::Sequence(items) => Ok(items),
            other => Err(other.mismatch(DocumentKind::Sequence)),
        }
    }

    pub fn expect_sequence_mut(&mut self) -> Result<&mut Vec<Document>, DocumentError> {
        match self {
            Document::Sequence(items) => Ok(items),
            other => Err(other.mismatch(DocumentKind::Sequence)),
        }
    }

    /// Borrow the entries of a mapping, or fail with a variant mismatch.
    pub fn expect_mapping(&self) -> Result<&Mapping, DocumentError> {
        match self {
            Document::Mapping(map) => Ok(map),
            other => Err(other.mismatch(DocumentKind::Mapping)),
        }
    }

    pub fn expect_mapping_mut(&mut self) -> Result<&mut Mapping, DocumentError> {
        match self {
            Document::Mapping(map) => Ok(map),
            other => Err(other.mismatch(DocumentKind::Mapping)),
        }
    }

    /// Look up a required key in a mapping.
    pub fn field(&self, key: &str) -> Result<&Document, DocumentError> {
        self.expect_mapping()?
            .get(key)
            .ok_or_else(|| DocumentError::MissingField {
                key: key.to_string(),
            })
    }

    pub fn field_mut(&mut self, key: &str) -> Result<&mut Document, DocumentError> {
        self.expect_mapping_mut()?
            .get_mut(key)
            .ok_or_else(|| DocumentError::MissingField {
                key: key.to_string(),
            })
    }

    fn mismatch(&self, expected: DocumentKind) -> DocumentError {
        DocumentError::VariantMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<bool> for Document {
    fn from(b: bool) -> Self {
        Document::Bool(b)
    }
}

impl From<i64> for Document {
    fn from(n: i64) -> Self {
        Document::Number(Number::Integer(n))
    }
}

impl From<f64> for Document {
    fn from(n: f64) -> Self {
        Document::Number(Number::Real(n))
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Document::String(s.to_string())
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Document::String(s)
    }
}

impl From<DateTime<Utc>> for Document {
    fn from(date: DateTime<Utc>) -> Self {
        Document::Date(date)
    }
}

impl From<Vec<Document>> for Document {
    fn from(items: Vec<Document>) -> Self {
        Document::Sequence(items)
    }
}

impl From<Mapping> for Document {
    fn from(map: Mapping) -> Self {
        Document::Mapping(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Document)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Document)>>(iter: I) -> Self {
        Document::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FromIterator<Document> for Document {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Document::Sequence(iter.into_iter().collect())
    }
}
