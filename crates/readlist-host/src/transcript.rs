//! Diagnostic transcript of every message on the channel.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use readlist_core::traits::{Direction, MessageLog};

/// Appends timestamped message bodies to a log file.
///
/// Write failures are ignored so a full disk or revoked file never stops
/// the host from answering.
#[derive(Debug)]
pub struct FileMessageLog {
    file: File,
}

impl FileMessageLog {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

impl MessageLog for FileMessageLog {
    fn record(&self, direction: Direction, body: &[u8]) {
        let line = format!(
            "[{}] {}: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            direction,
            String::from_utf8_lossy(body)
        );
        let _ = (&self.file).write_all(line.as_bytes());
    }
}

/// Open the log file for appending, creating it and its directory if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create log directory")?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
