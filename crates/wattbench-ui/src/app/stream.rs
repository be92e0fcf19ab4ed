//! Event-stream connector.
//!
//! # Design
//! - Use the browser `EventSource`; its built-in reconnect is the only retry.
//! - One listener per bench category, all feeding a single callback.
//! - Transport `error` events share a name with the bench's `error` category
//!   but carry no payload; they are dropped here.

use crate::core::error::{UiError, UiResult};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wattbench_events::{StreamEvent, StreamEventKind};
use web_sys::{Event, EventSource, MessageEvent};
use yew::Callback;

/// Open event source plus its category listeners.
pub(crate) struct LogStreamHandle {
    source: EventSource,
    _listeners: Vec<EventListener>,
}

impl LogStreamHandle {
    pub(crate) fn close(&self) {
        self.source.close();
    }
}

/// Open `url` and forward every bench log event to `on_event`.
pub(crate) fn connect_event_stream(
    url: &str,
    on_event: &Callback<StreamEvent>,
) -> UiResult<LogStreamHandle> {
    let source = EventSource::new(url).map_err(|err| UiError::EventSource {
        url: url.to_string(),
        message: describe_js_error(&err),
    })?;
    let listeners = StreamEventKind::ALL
        .into_iter()
        .map(|kind| {
            let on_event = on_event.clone();
            EventListener::new(&source, kind.as_str(), move |event| {
                decode_event(kind, event).map_or_else(
                    || console::debug!("ignoring payload-less stream event", kind.as_str()),
                    |decoded| on_event.emit(decoded),
                );
            })
        })
        .collect();
    Ok(LogStreamHandle {
        source,
        _listeners: listeners,
    })
}

fn decode_event(kind: StreamEventKind, event: &Event) -> Option<StreamEvent> {
    let message = event.dyn_ref::<MessageEvent>()?;
    let data = message.data().as_string()?;
    let id = message.last_event_id().trim().parse::<u64>().ok();
    Some(StreamEvent { kind, data, id })
}

fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
