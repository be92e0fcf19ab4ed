//! Browser-glue failures surfaced to the console.

use thiserror::Error;

/// Failures the wasm entry point reports instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A page element that a behaviour needs was not found.
    #[error("element `#{id}` not found")]
    MissingElement {
        /// Element id looked up.
        id: String,
    },
    /// The browser refused to construct the event source.
    #[error("failed to open event stream `{url}`: {message}")]
    EventSource {
        /// Endpoint requested.
        url: String,
        /// Browser-provided detail.
        message: String,
    },
}

/// Result wrapper for browser glue.
pub type UiResult<T> = Result<T, UiError>;
