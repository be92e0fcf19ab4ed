//! Live log console.
//!
//! # Design
//! - Mounted directly into the page's log container, which is also passed in
//!   as a prop so scrolling never looks the element up again.
//! - Entries render oldest first; the container is pinned to its bottom after
//!   every append.
//! - The buffer is capped (see [`LogBuffer`]).

use crate::app::stream::{LogStreamHandle, connect_event_stream};
use crate::core::buffer::LogBuffer;
use crate::core::entry::LogEntry;
use gloo::console;
use js_sys::Date;
use wattbench_events::StreamEvent;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LogConsoleProps {
    pub(crate) container: Element,
    pub(crate) events_url: AttrValue,
    pub(crate) max_lines: usize,
}

#[function_component(LogConsole)]
pub(crate) fn log_console(props: &LogConsoleProps) -> Html {
    let max_lines = props.max_lines;
    let buffer = use_mut_ref(|| LogBuffer::new(max_lines));
    let render_tick = use_state(|| 0u64);
    let handle_ref = use_mut_ref(|| None as Option<LogStreamHandle>);

    {
        let buffer = buffer.clone();
        let render_tick = render_tick.clone();
        let handle_ref = handle_ref.clone();
        use_effect_with_deps(
            move |events_url: &AttrValue| {
                let on_event = Callback::from(move |event: StreamEvent| {
                    let received = {
                        let mut buffer = buffer.borrow_mut();
                        buffer.push(LogEntry::from_stream_event(event, local_time_label()));
                        buffer.received()
                    };
                    render_tick.set(received);
                });
                *handle_ref.borrow_mut() = connect_event_stream(events_url, &on_event)
                    .inspect_err(|err| console::error!(err.to_string()))
                    .ok();
                move || {
                    if let Some(handle) = handle_ref.borrow_mut().take() {
                        handle.close();
                    }
                }
            },
            props.events_url.clone(),
        );
    }

    {
        let container = props.container.clone();
        use_effect_with_deps(
            move |_| {
                container.set_scroll_top(container.scroll_height());
                || ()
            },
            *render_tick,
        );
    }

    buffer.borrow().iter().map(render_entry).collect::<Html>()
}

fn render_entry(entry: &LogEntry) -> Html {
    html! {
        <div class={entry.css_class()}>{entry.render_line()}</div>
    }
}

fn local_time_label() -> String {
    String::from(Date::new_0().to_locale_time_string("default"))
}
