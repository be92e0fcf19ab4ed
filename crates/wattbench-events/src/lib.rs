#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Wire contract for the wattbench live log stream.
//!
//! The bench publishes plain-text log lines on a single server-sent event
//! endpoint ([`EVENTS_PATH`]). Each line is a *named* event whose name is one
//! of four categories; consumers map the category onto a display
//! [`Severity`]. This crate is DOM-free so the browser console and any native
//! consumer share the same category table.

pub mod error;
pub mod frame;
pub mod kinds;

pub use error::{EventParseError, EventParseResult};
pub use frame::{SseFrame, SseParser, StreamEvent};
pub use kinds::{Severity, StreamEventKind};

/// Relative path of the bench's event-stream endpoint.
pub const EVENTS_PATH: &str = "/events";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_relative() {
        assert!(EVENTS_PATH.starts_with('/'));
        assert_eq!(EVENTS_PATH, "/events");
    }
}
