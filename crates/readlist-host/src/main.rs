//! safari-reading-list - Native messaging host for the Safari reading list.
//!
//! The browser starts this binary and talks to it over stdin/stdout with
//! length-prefixed JSON frames. Diagnostics go to stderr and a log file,
//! never to stdout.

mod channel;
mod config;
mod dispatch;
mod transcript;

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use readlist_plist::{FileStore, PlistCodec};

use channel::Channel;
use config::HostConfig;
use dispatch::{ReadingListService, serve};
use transcript::{FileMessageLog, open_log_file};

fn main() -> Result<()> {
    // Arguments passed by the browser (manifest path, extension origin) are
    // not used.
    let config = HostConfig::discover()?;

    let log_file = open_log_file(&config.log_path)?;
    init_logging(&log_file)?;

    info!("native messaging host started");

    let store = config
        .bookmarks_path
        .as_ref()
        .map(|path| FileStore::with_codec(path, PlistCodec::new(config.plist_format)));
    let service = ReadingListService::new(store, config.reading_list_title.as_str());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut channel = Channel::new(stdin.lock(), stdout.lock(), FileMessageLog::new(log_file))
        .with_max_message_size(config.max_message_size);

    serve(&mut channel, &service).context("Native messaging session failed")?;

    info!("native messaging host exiting");
    Ok(())
}

fn init_logging(log_file: &File) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_writer = log_file.try_clone().context("Failed to share log file")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file_writer))
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(())
}
