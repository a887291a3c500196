//! Read-only view of the reading list.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::{CHILDREN_KEY, TITLE_KEY, URL_KEY};
use crate::document::Document;
use crate::error::DocumentError;

const UNTITLED: &str = "Untitled";

/// A reading list entry flattened for display.
///
/// The title prefers the fetched page title, then the title Safari recorded
/// when the entry was added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListItem {
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_viewed: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_fetched: Option<DateTime<Utc>>,
}

impl ReadingListItem {
    /// Build an item from a reading list entry.
    ///
    /// Returns `None` for entries without a string `URLString`.
    pub fn from_entry(entry: &Document) -> Option<Self> {
        let url = entry.get(URL_KEY)?.as_str()?.to_string();

        let non_sync = entry.get("ReadingListNonSync");
        let synced = entry.get("ReadingList");
        let uri_dictionary = entry.get("URIDictionary");

        let title = text(non_sync, TITLE_KEY)
            .or_else(|| text(uri_dictionary, "title"))
            .unwrap_or(UNTITLED)
            .to_string();

        Some(Self {
            url,
            title,
            date_added: date(synced, "DateAdded"),
            date_last_viewed: date(synced, "DateLastViewed"),
            preview_text: text(non_sync, "PreviewText")
                .or_else(|| text(synced, "PreviewText"))
                .map(str::to_string),
            site_name: text(non_sync, "siteName").map(str::to_string),
            date_last_fetched: date(non_sync, "DateLastFetched"),
        })
    }
}

fn text<'a>(node: Option<&'a Document>, key: &str) -> Option<&'a str> {
    node?.get(key)?.as_str().filter(|s| !s.is_empty())
}

fn date(node: Option<&Document>, key: &str) -> Option<DateTime<Utc>> {
    match node?.get(key)? {
        Document::Date(date) => Some(*date),
        Document::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.with_timezone(&Utc)),
        _ => None,
    }
}

/// Locate the children of the list titled `list_title`.
///
/// `Ok(None)` means the root has no children or no node with that title.
/// A matching node whose children are missing or not a sequence is a
/// structural mismatch.
pub fn find_list<'a>(
    document: &'a Document,
    list_title: &str,
) -> Result<Option<&'a [Document]>, DocumentError> {
    let Some(children) = document.get(CHILDREN_KEY) else {
        return Ok(None);
    };

    let node = children
        .expect_sequence()?
        .iter()
        .find(|child| child.get(TITLE_KEY).and_then(Document::as_str) == Some(list_title));

    match node {
        Some(node) => Ok(Some(node.field(CHILDREN_KEY)?.expect_sequence()?)),
        None => Ok(None),
    }
}

/// Flatten the reading list into display items, in file order.
///
/// A missing or malformed reading list yields an empty list.
pub fn reading_list_items(document: &Document, list_title: &str) -> Vec<ReadingListItem> {
    match find_list(document, list_title) {
        Ok(Some(entries)) => entries.iter().filter_map(ReadingListItem::from_entry).collect(),
        Ok(None) => Vec::new(),
        Err(err) => {
            debug!(error = %err, "reading list has an unexpected shape");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::bookmarks::READING_LIST_TITLE;

    fn bookmarks(reading_list: Document) -> Document {
        Document::from_iter([(
            CHILDREN_KEY,
            Document::from_iter([
                Document::from(json!({"Title": "BookmarksBar", "Children": []})),
                reading_list,
            ]),
        )])
    }

    #[test]
    fn test_item_title_fallbacks() {
        let fetched = Document::from(json!({
            "URLString": "https://a.example",
            "URIDictionary": {"title": "Recorded"},
            "ReadingListNonSync": {"Title": "Fetched", "siteName": "A"},
        }));
        let item = ReadingListItem::from_entry(&fetched).unwrap();
        assert_eq!(item.title, "Fetched");
        assert_eq!(item.site_name.as_deref(), Some("A"));

        let recorded = Document::from(json!({
            "URLString": "https://b.example",
            "URIDictionary": {"title": "Recorded"},
        }));
        assert_eq!(ReadingListItem::from_entry(&recorded).unwrap().title, "Recorded");

        let bare = Document::from(json!({"URLString": "https://c.example"}));
        assert_eq!(ReadingListItem::from_entry(&bare).unwrap().title, "Untitled");
    }

    #[test]
    fn test_item_dates_and_preview() {
        let added = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        let mut entry = Document::from(json!({
            "URLString": "https://a.example",
            "ReadingList": {"PreviewText": "synced preview", "DateLastViewed": "2024-05-03T10:00:00Z"},
        }));
        entry
            .field_mut("ReadingList")
            .unwrap()
            .expect_mapping_mut()
            .unwrap()
            .insert("DateAdded".to_string(), Document::Date(added));

        let item = ReadingListItem::from_entry(&entry).unwrap();
        assert_eq!(item.date_added, Some(added));
        assert_eq!(
            item.date_last_viewed,
            Some(Utc.with_ymd_and_hms(2024, 5, 3, 10, 0, 0).unwrap())
        );
        assert_eq!(item.preview_text.as_deref(), Some("synced preview"));
        assert_eq!(item.date_last_fetched, None);
    }

    #[test]
    fn test_item_serializes_camel_case_without_empty_fields() {
        let entry = Document::from(json!({
            "URLString": "https://a.example",
            "ReadingListNonSync": {"PreviewText": "hello"},
        }));
        let item = ReadingListItem::from_entry(&entry).unwrap();
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"url": "https://a.example", "title": "Untitled", "previewText": "hello"})
        );
    }

    #[test]
    fn test_reading_list_items_skips_entries_without_url() {
        let doc = bookmarks(Document::from(json!({
            "Title": READING_LIST_TITLE,
            "Children": [
                {"URLString": "https://a.example"},
                {"Title": "no url"},
                "not a mapping",
                {"URLString": "https://b.example"},
            ],
        })));

        let urls: Vec<_> = reading_list_items(&doc, READING_LIST_TITLE)
            .into_iter()
            .map(|item| item.url)
            .collect();
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_find_list_absent_and_malformed() {
        let empty = Document::mapping();
        assert!(find_list(&empty, READING_LIST_TITLE).unwrap().is_none());

        let no_list = bookmarks(Document::from(json!({"Title": "Other", "Children": []})));
        assert!(find_list(&no_list, READING_LIST_TITLE).unwrap().is_none());

        let bad_root = Document::from(json!({"Children": "oops"}));
        assert!(find_list(&bad_root, READING_LIST_TITLE).is_err());
        assert!(reading_list_items(&bad_root, READING_LIST_TITLE).is_empty());

        let bad_list = bookmarks(Document::from(json!({"Title": READING_LIST_TITLE})));
        assert!(matches!(
            find_list(&bad_list, READING_LIST_TITLE),
            Err(DocumentError::MissingField { .. })
        ));
    }
}
