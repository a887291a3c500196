//! readlist-core - Core types for the Safari reading list host.
//!
//! This crate holds everything that does not touch a file or a stream: the
//! tagged [`Document`] value mirroring a property list, the reading-list
//! mutations over it, the request/response shapes spoken with the browser
//! extension, and the traits the storage and transport layers implement.

pub mod bookmarks;
pub mod document;
pub mod error;
pub mod protocol;
pub mod traits;

pub use bookmarks::{DeleteBookmarkOutput, ReadingListItem, delete_by_url, reading_list_items};
pub use document::{Document, DocumentKind, Mapping, Number};
pub use error::{CodecError, DocumentError, StoreError};
pub use protocol::{Request, Response, ResponseData};
pub use traits::{Direction, DocumentCodec, DocumentStore, MessageLog, NullMessageLog};
