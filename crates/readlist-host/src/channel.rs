//! Length-prefixed JSON framing over a byte stream pair.
//!
//! Each frame is a 4-byte unsigned length in the host's native byte order,
//! followed by that many bytes of UTF-8 JSON. The browser side writes the
//! prefix the same way, so network byte order would break the pairing.

use std::io::{self, ErrorKind, Read, Write};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use readlist_core::protocol::MAX_MESSAGE_SIZE;
use readlist_core::traits::{Direction, MessageLog};

const HEADER_LEN: usize = 4;

/// Errors on the message channel.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The peer closed the stream between frames.
    #[error("browser disconnected")]
    PeerDisconnected,

    /// A frame exceeded the size limit.
    #[error("message size {size} exceeds maximum allowed size of {max}")]
    MessageTooLarge { size: usize, max: usize },

    /// The stream ended inside a frame.
    #[error("stream ended inside a frame: expected {expected} bytes, received {received}")]
    Truncated { expected: usize, received: usize },

    /// The payload was not valid JSON or did not have the expected shape.
    #[error("failed to decode message: {0}")]
    Decode(#[source] serde_json::Error),

    /// A response could not be serialized.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    /// Reading or writing the stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ChannelError {
    /// Check if this is the clean end of the session.
    pub fn is_disconnect(&self) -> bool {
        matches!(self, ChannelError::PeerDisconnected)
    }
}

/// A framed message channel over a reader and a writer.
#[derive(Debug)]
pub struct Channel<R, W, L> {
    reader: R,
    writer: W,
    log: L,
    max_message_size: usize,
}

impl<R: Read, W: Write, L: MessageLog> Channel<R, W, L> {
    /// Create a channel with the default size limit.
    pub fn new(reader: R, writer: W, log: L) -> Self {
        Self {
            reader,
            writer,
            log,
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }

    /// Override the frame size limit.
    pub fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size;
        self
    }

    /// Read one frame and decode its JSON body as `T`.
    ///
    /// An oversized length prefix is rejected before any of the body is read.
    /// A body that is valid JSON but does not fit `T` is a decode error.
    pub fn read_message<T: DeserializeOwned>(&mut self) -> Result<T, ChannelError> {
        let length = u32::from_ne_bytes(self.read_header()?) as usize;
        if length > self.max_message_size {
            return Err(ChannelError::MessageTooLarge {
                size: length,
                max: self.max_message_size,
            });
        }

        let mut body = vec![0u8; length];
        let received = read_full(&mut self.reader, &mut body)?;
        if received < length {
            return Err(ChannelError::Truncated {
                expected: length,
                received,
            });
        }

        self.log.record(Direction::Inbound, &body);
        serde_json::from_slice(&body).map_err(ChannelError::Decode)
    }

    /// Encode `message` as JSON and write it as one frame.
    ///
    /// Nothing is written when the encoded message is over the size limit.
    pub fn write_message<T: Serialize + ?Sized>(&mut self, message: &T) -> Result<(), ChannelError> {
        let body = serde_json::to_vec(message).map_err(ChannelError::Encode)?;
        let too_large = || ChannelError::MessageTooLarge {
            size: body.len(),
            max: self.max_message_size,
        };
        if body.len() > self.max_message_size {
            return Err(too_large());
        }
        let length = u32::try_from(body.len()).map_err(|_| too_large())?;

        self.log.record(Direction::Outbound, &body);

        let mut frame = Vec::with_capacity(HEADER_LEN + body.len());
        frame.extend_from_slice(&length.to_ne_bytes());
        frame.extend_from_slice(&body);

        self.writer.write_all(&frame)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the channel, returning the underlying streams.
    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_header(&mut self) -> Result<[u8; HEADER_LEN], ChannelError> {
        let mut header = [0u8; HEADER_LEN];
        match read_full(&mut self.reader, &mut header)? {
            0 => Err(ChannelError::PeerDisconnected),
            HEADER_LEN => Ok(header),
            received => Err(ChannelError::Truncated {
                expected: HEADER_LEN,
                received,
            }),
        }
    }
}

/// Fill `buf` unless the stream ends first. Returns the number of bytes read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
