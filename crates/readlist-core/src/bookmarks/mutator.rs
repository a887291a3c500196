//! Removing entries from the reading list.

use tracing::debug;

use super::{CHILDREN_KEY, TITLE_KEY, URL_KEY};
use crate::document::Document;
use crate::error::DocumentError;

/// Output from [`delete_by_url`].
#[derive(Debug, Clone)]
pub struct DeleteBookmarkOutput {
    /// The document after removal. Unchanged when nothing matched.
    pub document: Document,
    /// Number of entries removed.
    pub removed: usize,
}

impl DeleteBookmarkOutput {
    /// Whether any entry was removed and the document needs saving.
    pub fn modified(&self) -> bool {
        self.removed > 0
    }
}

/// Remove every entry of the list titled `list_title` whose `URLString`
/// equals `url` exactly.
///
/// Only the first node with the given title is considered. Sibling order and
/// the order of the remaining entries are preserved. A document without the
/// expected shape is returned untouched with nothing removed.
pub fn delete_by_url(mut document: Document, list_title: &str, url: &str) -> DeleteBookmarkOutput {
    let removed = match list_entries_mut(&mut document, list_title) {
        Ok(Some(entries)) => {
            debug!(count = entries.len(), "found reading list");
            let before = entries.len();
            entries.retain(|entry| entry_url(entry) != Some(url));
            before - entries.len()
        }
        Ok(None) => {
            debug!(list = list_title, "no list with this title");
            0
        }
        Err(err) => {
            debug!(error = %err, "bookmarks document has an unexpected shape");
            0
        }
    };

    if removed > 0 {
        debug!(%url, removed, "removed reading list entries");
    } else {
        debug!(%url, "URL not found in reading list");
    }

    DeleteBookmarkOutput { document, removed }
}

fn entry_url(entry: &Document) -> Option<&str> {
    entry.get(URL_KEY).and_then(Document::as_str)
}

fn list_entries_mut<'a>(
    document: &'a mut Document,
    list_title: &str,
) -> Result<Option<&'a mut Vec<Document>>, DocumentError> {
    let Some(children) = document.get_mut(CHILDREN_KEY) else {
        return Ok(None);
    };

    let node = children
        .expect_sequence_mut()?
        .iter_mut()
        .find(|child| child.get(TITLE_KEY).and_then(Document::as_str) == Some(list_title));

    match node {
        Some(node) => Ok(Some(node.field_mut(CHILDREN_KEY)?.expect_sequence_mut()?)),
        None => Ok(None),
    }
}
