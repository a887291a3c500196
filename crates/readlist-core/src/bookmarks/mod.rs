//! Reading list navigation and mutation.
//!
//! Safari keeps the reading list as one child of the bookmarks root:
//!
//! ```text
//! { Children: [ ..., { Title: "com.apple.ReadingList", Children: [ entry, ... ] }, ... ] }
//! ```
//!
//! Each entry is a mapping keyed by `URLString`. Anything that does not
//! match this shape is treated as "no reading list" rather than an error.

mod mutator;
mod reading_list;

pub use mutator::{DeleteBookmarkOutput, delete_by_url};
pub use reading_list::{ReadingListItem, find_list, reading_list_items};

/// Title of the reading list node inside the bookmarks root.
pub const READING_LIST_TITLE: &str = "com.apple.ReadingList";

/// Key holding the ordered children of a node.
pub const CHILDREN_KEY: &str = "Children";

/// Key holding the title of a node.
pub const TITLE_KEY: &str = "Title";

/// Key holding the URL of a reading list entry.
pub const URL_KEY: &str = "URLString";
