//! Request dispatch and the serve loop.

use std::io::{Read, Write};

use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use readlist_core::traits::{DocumentStore, MessageLog};
use readlist_core::{Document, Request, Response, delete_by_url, reading_list_items};

use crate::channel::{Channel, ChannelError};

const NO_BOOKMARKS_PATH: &str = "Could not determine bookmarks path";
const URL_REQUIRED: &str = "URL parameter is required for deleteBookmark command";

/// Answers requests against a bookmarks store.
///
/// The document is loaded fresh for every request and never cached.
#[derive(Debug)]
pub struct ReadingListService<S> {
    store: Option<S>,
    list_title: String,
}

impl<S: DocumentStore> ReadingListService<S> {
    /// Create a service. `store` is `None` when the bookmarks file could not
    /// be located; every store command then fails.
    pub fn new(store: Option<S>, list_title: impl Into<String>) -> Self {
        Self {
            store,
            list_title: list_title.into(),
        }
    }

    /// Produce the response for one request.
    pub fn handle(&self, request: &Request) -> Response {
        match request {
            Request::GetBookmarks => self.get_bookmarks(),
            Request::GetReadingList => self.get_reading_list(),
            Request::DeleteBookmark { url: Some(url) } => self.delete_bookmark(url),
            Request::DeleteBookmark { url: None } => Response::error(URL_REQUIRED),
            Request::Unknown(command) => Response::error(format!("Unknown command: {command}")),
        }
    }

    /// Load the current document, or the failure response to send instead.
    fn load(&self) -> Result<(&S, Document), Response> {
        let Some(store) = self.store.as_ref() else {
            warn!("{NO_BOOKMARKS_PATH}");
            return Err(Response::error(NO_BOOKMARKS_PATH));
        };

        match store.load() {
            Ok(document) => Ok((store, document)),
            Err(err) if err.is_decode() => {
                warn!(error = %err, "bookmarks file is malformed");
                Err(Response::error(err))
            }
            Err(err) => {
                warn!(error = %err, "failed to read bookmarks");
                Err(Response::error(err))
            }
        }
    }

    fn get_bookmarks(&self) -> Response {
        match self.load() {
            Ok((_, document)) => Response::data(document),
            Err(response) => response,
        }
    }

    fn get_reading_list(&self) -> Response {
        match self.load() {
            Ok((_, document)) => Response::data(reading_list_items(&document, &self.list_title)),
            Err(response) => response,
        }
    }

    #[instrument(skip(self))]
    fn delete_bookmark(&self, url: &str) -> Response {
        info!("attempting to delete bookmark");
        let (store, document) = match self.load() {
            Ok(loaded) => loaded,
            Err(response) => return response,
        };

        let output = delete_by_url(document, &self.list_title, url);
        if !output.modified() {
            info!("URL not found in reading list");
            return Response::error(format!("URL not found in reading list: {url}"));
        }

        if let Err(err) = store.save(&output.document) {
            warn!(error = %err, "failed to save bookmarks");
            return Response::error(err);
        }

        info!(removed = output.removed, "deleted bookmark");
        Response::message(format!("Successfully deleted bookmark with URL: {url}"))
    }
}

/// Answer requests until the peer disconnects or the channel fails.
///
/// Each message must be a JSON object or `null`. Objects without a string
/// `command`, and `null`, are dropped without a reply. Any other body ends
/// the session with a decode error. Returns `Ok(())` on a clean disconnect.
pub fn serve<R, W, L, S>(
    channel: &mut Channel<R, W, L>,
    service: &ReadingListService<S>,
) -> Result<(), ChannelError>
where
    R: Read,
    W: Write,
    L: MessageLog,
    S: DocumentStore,
{
    loop {
        let message = match channel.read_message::<Option<Map<String, Value>>>() {
            Ok(message) => message,
            Err(err) if err.is_disconnect() => {
                info!("browser disconnected");
                return Ok(());
            }
            Err(err) => {
                warn!(error = %err, "error reading message");
                return Err(err);
            }
        };

        let Some(request) = message.as_ref().and_then(Request::from_message) else {
            debug!("ignoring message without a command");
            continue;
        };

        debug!(command = request.command(), "dispatching request");
        let response = service.handle(&request);

        if let Err(err) = channel.write_message(&response) {
            warn!(error = %err, "error sending message");
            return Err(err);
        }
    }
}
