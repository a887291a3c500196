//! Core traits for storage, encoding and message logging.

mod codec;
mod log;
mod store;

pub use codec::DocumentCodec;
pub use log::{Direction, MessageLog, NullMessageLog};
pub use store::DocumentStore;
