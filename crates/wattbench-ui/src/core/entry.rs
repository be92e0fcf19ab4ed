//! Rendered log lines.

use wattbench_events::{Severity, StreamEvent, StreamEventKind};

/// Class every log line carries in addition to its severity.
pub const ENTRY_CLASS: &str = "log-entry";

/// One received stream event, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Localized wall-clock time of receipt.
    pub timestamp: String,
    /// Display severity derived from the event category.
    pub severity: Severity,
    /// Event payload, verbatim.
    pub message: String,
}

impl LogEntry {
    /// Build an entry for an event of `kind` received at `timestamp`.
    #[must_use]
    pub fn from_event(
        kind: StreamEventKind,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            severity: kind.severity(),
            message: message.into(),
        }
    }

    /// Build an entry from a decoded wire event.
    #[must_use]
    pub fn from_stream_event(event: StreamEvent, timestamp: impl Into<String>) -> Self {
        Self::from_event(event.kind, event.data, timestamp)
    }

    /// Text content of the line: `[<time>] (<severity>) <message>`.
    #[must_use]
    pub fn render_line(&self) -> String {
        format!("[{}] ({}) {}", self.timestamp, self.severity, self.message)
    }

    /// Class attribute of the line element.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("{ENTRY_CLASS} {}", self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_line_matches_display_contract() {
        let entry = LogEntry::from_event(StreamEventKind::Warning, "disk usage high", "14:03:10");
        assert_eq!(entry.render_line(), "[14:03:10] (warning) disk usage high");
        assert_eq!(entry.css_class(), "log-entry warning");
    }

    #[test]
    fn debug_and_log_render_as_info() {
        for kind in [StreamEventKind::Debug, StreamEventKind::Log] {
            let entry = LogEntry::from_event(kind, "armed", "9:00:01 AM");
            assert_eq!(entry.severity, Severity::Info);
            assert_eq!(entry.render_line(), "[9:00:01 AM] (info) armed");
            assert_eq!(entry.css_class(), "log-entry info");
        }
    }

    #[test]
    fn error_events_render_as_error() {
        let entry = LogEntry::from_event(StreamEventKind::Error, "scale offline", "14:03:11");
        assert_eq!(entry.render_line(), "[14:03:11] (error) scale offline");
        assert_eq!(entry.css_class(), "log-entry error");
    }

    #[test]
    fn payload_is_kept_verbatim() {
        let entry = LogEntry::from_event(StreamEventKind::Log, "  padded\tline ", "t");
        assert_eq!(entry.render_line(), "[t] (info)   padded\tline ");
        let empty = LogEntry::from_event(StreamEventKind::Log, "", "t");
        assert_eq!(empty.render_line(), "[t] (info) ");
    }

    #[test]
    fn wire_events_carry_their_severity_through() {
        let event = StreamEvent::new(StreamEventKind::Warning, "vbat low").with_id(7);
        let entry = LogEntry::from_stream_event(event, "14:03:12");
        assert_eq!(entry.severity, Severity::Warning);
        assert_eq!(entry.message, "vbat low");
    }
}
