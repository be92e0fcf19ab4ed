//! Server-sent event framing for the log stream.
//!
//! # Design
//! - Emitters build a [`StreamEvent`] and write [`StreamEvent::encode`] to the
//!   `text/event-stream` response.
//! - Consumers outside the browser feed raw chunks to [`SseParser`] and turn
//!   dispatched frames into [`StreamEvent`]s; frames with other names are not
//!   bench log events.
//! - [`SseParser`] dispatches exactly what a browser `EventSource` would: a
//!   block without `data` fires nothing, the last event id carries over to
//!   later frames, and a block cut off by the end of the stream is dropped.

use crate::error::{EventParseError, EventParseResult};
use crate::kinds::{Severity, StreamEventKind};

/// One named log event as it travels over the stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamEvent {
    /// Declared category.
    pub kind: StreamEventKind,
    /// Plain-text payload.
    pub data: String,
    /// Emitter-assigned id; the bench stamps its uptime in milliseconds.
    pub id: Option<u64>,
}

impl StreamEvent {
    /// Build an event without an id.
    #[must_use]
    pub fn new(kind: StreamEventKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
            id: None,
        }
    }

    /// Attach an emitter id.
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Display severity of the event's category.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Serialize the event as a complete frame, blank-line terminated.
    ///
    /// Payload line breaks (`\n`, `\r\n` or `\r`) become separate `data:`
    /// lines, which consumers join back with `\n`.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(self.data.len() + 32);
        push_field(&mut out, "event", self.kind.as_str());
        if let Some(id) = self.id {
            push_field(&mut out, "id", &id.to_string());
        }
        for line in self.data.split("\r\n").flat_map(|part| part.split(['\r', '\n'])) {
            push_field(&mut out, "data", line);
        }
        out.push('\n');
        out
    }
}

fn push_field(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}

impl TryFrom<SseFrame> for StreamEvent {
    type Error = EventParseError;

    fn try_from(frame: SseFrame) -> EventParseResult<Self> {
        let name = frame.event.ok_or(EventParseError::MissingKind)?;
        let kind = name.parse::<StreamEventKind>()?;
        Ok(Self {
            kind,
            data: frame.data,
            id: frame.id.and_then(|value| value.trim().parse::<u64>().ok()),
        })
    }
}

/// A dispatched frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SseFrame {
    /// Event name, if the block declared one.
    pub event: Option<String>,
    /// Last event id seen on the stream when this frame was dispatched.
    pub id: Option<String>,
    /// Data lines joined with `\n`.
    pub data: String,
}

/// Incremental parser for streamed chunks.
#[derive(Debug, Default)]
pub struct SseParser {
    partial: String,
    after_cr: bool,
    event: Option<String>,
    data_lines: Vec<String>,
    last_id: Option<String>,
    retry_ms: Option<u64>,
}

impl SseParser {
    /// Feed a chunk and collect every frame it dispatches.
    pub fn push(&mut self, chunk: &str) -> Vec<SseFrame> {
        let mut frames = Vec::new();
        let mut rest = chunk;
        if self.after_cr && !rest.is_empty() {
            self.after_cr = false;
            rest = rest.strip_prefix('\n').unwrap_or(rest);
        }
        while let Some(end) = rest.find(['\r', '\n']) {
            self.partial.push_str(&rest[..end]);
            let line = std::mem::take(&mut self.partial);
            frames.extend(self.process_line(&line));
            let (terminator_len, split_crlf) = match &rest.as_bytes()[end..] {
                [b'\r', b'\n', ..] => (2, false),
                [b'\r'] => (1, true),
                _ => (1, false),
            };
            self.after_cr = split_crlf;
            rest = &rest[end + terminator_len..];
        }
        self.partial.push_str(rest);
        frames
    }

    /// Drop whatever block was still open when the stream ended.
    ///
    /// The last event id and retry hint survive, as they do across a browser
    /// reconnect.
    pub fn finish(&mut self) {
        self.partial.clear();
        self.after_cr = false;
        self.event = None;
        self.data_lines.clear();
    }

    /// Id the next frame will carry unless the stream sends a new one.
    #[must_use]
    pub fn last_event_id(&self) -> Option<&str> {
        self.last_id.as_deref()
    }

    /// Reconnect delay most recently requested by the server.
    #[must_use]
    pub const fn retry_ms(&self) -> Option<u64> {
        self.retry_ms
    }

    fn process_line(&mut self, line: &str) -> Option<SseFrame> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }
        let (field, value) = line.split_once(':').map_or((line, ""), |(field, value)| {
            (field, value.strip_prefix(' ').unwrap_or(value))
        });
        match field {
            "event" => self.event = Some(value.to_string()),
            "data" => self.data_lines.push(value.to_string()),
            "id" if !value.contains('\0') => {
                self.last_id = (!value.is_empty()).then(|| value.to_string());
            }
            "retry" => {
                if let Ok(retry) = value.parse::<u64>() {
                    self.retry_ms = Some(retry);
                }
            }
            _ => {}
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        let event = self.event.take();
        if self.data_lines.is_empty() {
            return None;
        }
        let data = std::mem::take(&mut self.data_lines).join("\n");
        Some(SseFrame {
            event,
            id: self.last_id.clone(),
            data,
        })
    }
}
