//! Message transcript trait.

use std::fmt;

/// Which way a message travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Read from the extension.
    Inbound,
    /// Written to the extension.
    Outbound,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => f.write_str("Received message"),
            Direction::Outbound => f.write_str("Sending message"),
        }
    }
}

/// Records raw message bodies for diagnostics.
///
/// Recording is best-effort: implementations must not fail or panic when
/// their sink is unavailable.
pub trait MessageLog {
    fn record(&self, direction: Direction, body: &[u8]);
}

impl<L: MessageLog + ?Sized> MessageLog for &L {
    fn record(&self, direction: Direction, body: &[u8]) {
        (**self).record(direction, body)
    }
}

/// A transcript that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMessageLog;

impl MessageLog for NullMessageLog {
    fn record(&self, _direction: Direction, _body: &[u8]) {}
}
