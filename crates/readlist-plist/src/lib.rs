//! readlist-plist - Property-list backed bookmarks store.

mod codec;
mod store;

pub use codec::{PlistCodec, PlistFormat};
pub use store::FileStore;
