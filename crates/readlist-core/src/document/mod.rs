//! The in-memory bookmarks document.
//!
//! A [`Document`] mirrors the shape of a property list: mappings, ordered
//! sequences and scalar leaves. No schema is imposed; callers navigate it
//! with pattern matching and the checked accessors on [`Document`].

mod json;
mod number;
mod value;

pub use number::Number;
pub use value::{Document, DocumentKind, Mapping};
