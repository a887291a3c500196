//! Host configuration and path resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;

use readlist_core::bookmarks::READING_LIST_TITLE;
use readlist_core::protocol::MAX_MESSAGE_SIZE;
use readlist_plist::PlistFormat;

/// Location of Safari's bookmarks file, relative to the home directory.
const BOOKMARKS_RELATIVE_PATH: &str = "Library/Safari/Bookmarks.plist";

/// Location of the diagnostic log, relative to the home directory.
const LOG_RELATIVE_PATH: &str = "Desktop/safari_reading_list.log";


/// Runtime settings for the host.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Bookmarks file, if it could be located.
    pub bookmarks_path: Option<PathBuf>,
    /// Diagnostic log file.
    pub log_path: PathBuf,
    /// Title of the list that deletions apply to.
    pub reading_list_title: String,
    /// Frame size limit for both directions.
    pub max_message_size: usize,
    /// Encoding used when rewriting the bookmarks file.
    pub plist_format: PlistFormat,
}

impl HostConfig {
    /// Resolve paths from the current user's home directory.
    ///
    /// Fails when there is no home directory; the host cannot start without
    /// a place for its log file.
    pub fn discover() -> Result<Self> {
        Self::resolve(BaseDirs::new().as_ref().map(BaseDirs::home_dir))
    }

    fn resolve(home: Option<&Path>) -> Result<Self> {
        let home = home.context("Could not determine home directory")?;
        Ok(Self::for_home(home))
    }

    /// Lay out paths under an explicit home directory.
    pub fn for_home(home: &Path) -> Self {
        Self {
            bookmarks_path: Some(home.join(BOOKMARKS_RELATIVE_PATH)),
            log_path: home.join(LOG_RELATIVE_PATH),
            reading_list_title: READING_LIST_TITLE.to_string(),
            max_message_size: MAX_MESSAGE_SIZE,
            plist_format: PlistFormat::default(),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_home_layout() {
        let config = HostConfig::for_home(Path::new("/Users/alice"));
        assert_eq!(
            config.bookmarks_path,
            Some(PathBuf::from("/Users/alice/Library/Safari/Bookmarks.plist"))
        );
        assert_eq!(
            config.log_path,
            PathBuf::from("/Users/alice/Desktop/safari_reading_list.log")
        );
        assert_eq!(config.reading_list_title, "com.apple.ReadingList");
        assert_eq!(config.max_message_size, 1_048_576);
        assert_eq!(config.plist_format, PlistFormat::Binary);
    }

    #[test]
    fn test_missing_home_is_startup_error() {
        let err = HostConfig::resolve(None).unwrap_err();
        assert_eq!(err.to_string(), "Could not determine home directory");
    }
}
