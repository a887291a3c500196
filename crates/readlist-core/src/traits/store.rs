//! Document store trait.

use crate::document::Document;
use crate::error::StoreError;

/// A location holding one bookmarks document.
///
/// Implementations perform no interpretation of the document; they only
/// move it across the storage boundary.
pub trait DocumentStore {
    /// Load the current document.
    fn load(&self) -> Result<Document, StoreError>;

    /// Replace the stored document.
    ///
    /// After this returns, the store holds either the previous document or
    /// `document` in full, never a partial write.
    fn save(&self, document: &Document) -> Result<(), StoreError>;
}
