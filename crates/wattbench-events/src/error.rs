//! Wire decoding errors.

use thiserror::Error;

/// Failure to interpret a server-sent frame as a bench log event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventParseError {
    /// The frame carried no `event:` field, so it is an unnamed `message`.
    #[error("frame has no event name")]
    MissingKind,
    /// The frame named a category the bench does not publish.
    #[error("unknown event category `{name}`")]
    UnknownKind {
        /// Event name as received.
        name: String,
    },
}

/// Result wrapper for wire decoding.
pub type EventParseResult<T> = Result<T, EventParseError>;
