//! File-backed bookmarks store.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, error, instrument, warn};

use readlist_core::document::Document;
use readlist_core::error::{CodecError, StoreError};
use readlist_core::traits::{DocumentCodec, DocumentStore};

use crate::codec::PlistCodec;

/// A bookmarks document stored in a single file.
///
/// Saving moves the current file to `<path>.bak`, writes the new document to
/// `<path>`, then deletes the backup. If writing fails the backup is moved
/// back, so a reader only ever sees the old or the new file in full.
#[derive(Debug, Clone)]
pub struct FileStore<C = PlistCodec> {
    path: PathBuf,
    codec: C,
}

impl FileStore {
    /// Create a store for the property list at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_codec(path, PlistCodec::default())
    }
}

impl<C: DocumentCodec> FileStore<C> {
    /// Create a store using a specific codec.
    pub fn with_codec(path: impl AsRef<Path>, codec: C) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            codec,
        }
    }

    /// Get the path of the stored document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the path the current file is moved to while saving.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".bak");
        PathBuf::from(name)
    }

    fn write_document(&self, document: &Document) -> Result<(), StoreError> {
        let file = File::create(&self.path).map_err(|source| StoreError::Create {
            path: self.path.clone(),
            source,
        })?;

        let encode_error = |source: CodecError| StoreError::Encode {
            path: self.path.clone(),
            source,
        };

        let mut writer = BufWriter::new(file);
        self.codec
            .encode(&mut writer, document)
            .map_err(encode_error)?;
        let file = writer
            .into_inner()
            .map_err(|err| encode_error(err.into_error().into()))?;
        file.sync_all().map_err(|err| encode_error(err.into()))?;

        Ok(())
    }
}

impl<C: DocumentCodec> DocumentStore for FileStore<C> {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Document, StoreError> {
        let file = File::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;

        let document = self
            .codec
            .decode(BufReader::new(file))
            .map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        debug!("loaded bookmarks document");
        Ok(document)
    }

    #[instrument(skip(self, document), fields(path = %self.path.display()))]
    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let backup = self.backup_path();

        fs::rename(&self.path, &backup).map_err(|source| StoreError::Backup {
            path: self.path.clone(),
            source,
        })?;
        debug!(backup = %backup.display(), "created backup");

        if let Err(err) = self.write_document(document) {
            warn!(error = %err, "write failed, restoring backup");
            if let Err(restore) = fs::rename(&backup, &self.path) {
                error!(
                    error = %restore,
                    backup = %backup.display(),
                    "failed to restore backup"
                );
            }
            return Err(err);
        }

        // A leftover backup is harmless; the new file is already complete.
        if let Err(err) = fs::remove_file(&backup) {
            warn!(error = %err, backup = %backup.display(), "failed to remove backup");
        }

        debug!("saved bookmarks document");
        Ok(())
    }
}
