use wattbench_events::{Severity, SseParser, StreamEvent, StreamEventKind};
use wattbench_ui::core::buffer::LogBuffer;
use wattbench_ui::core::entry::LogEntry;

fn receive(buffer: &mut LogBuffer, wire: &str, timestamp: &str) {
    let mut parser = SseParser::default();
    for frame in parser.push(wire) {
        if let Ok(event) = StreamEvent::try_from(frame) {
            buffer.push(LogEntry::from_stream_event(event, timestamp));
        }
    }
}

#[test]
fn stream_lines_render_in_arrival_order_with_mapped_severity() {
    let mut buffer = LogBuffer::default();
    let wire = concat!(
        "event: debug\ndata: hx711 ready\n\n",
        "event: log\nid: 1200\ndata: phase 2 of 5\n\n",
        ": heartbeat\n\n",
        "event: warning\ndata: disk usage high\n\n",
        "event: telemetry\ndata: 11.9\n\n",
        "event: error\ndata: esc not responding\n\n",
    );
    receive(&mut buffer, wire, "14:03:10");

    let lines: Vec<String> = buffer.iter().map(LogEntry::render_line).collect();
    assert_eq!(
        lines,
        [
            "[14:03:10] (info) hx711 ready",
            "[14:03:10] (info) phase 2 of 5",
            "[14:03:10] (warning) disk usage high",
            "[14:03:10] (error) esc not responding",
        ]
    );
    let classes: Vec<String> = buffer.iter().map(LogEntry::css_class).collect();
    assert_eq!(
        classes,
        [
            "log-entry info",
            "log-entry info",
            "log-entry warning",
            "log-entry error",
        ]
    );
}

#[test]
fn each_info_category_event_yields_exactly_one_entry() {
    let mut buffer = LogBuffer::default();
    let wire: String = (0..25)
        .map(|n| {
            let kind = if n % 2 == 0 {
                StreamEventKind::Debug
            } else {
                StreamEventKind::Log
            };
            StreamEvent::new(kind, format!("sample {n}")).encode()
        })
        .collect();
    receive(&mut buffer, &wire, "08:00:00");

    assert_eq!(buffer.len(), 25);
    assert!(buffer.iter().all(|entry| entry.severity == Severity::Info));
    assert_eq!(
        buffer.newest().map(LogEntry::render_line).as_deref(),
        Some("[08:00:00] (info) sample 24")
    );
}

#[test]
fn long_sessions_keep_only_the_newest_lines() {
    let mut buffer = LogBuffer::new(3);
    let wire: String = (0..10)
        .map(|n| StreamEvent::new(StreamEventKind::Log, n.to_string()).encode())
        .collect();
    receive(&mut buffer, &wire, "t");

    let kept: Vec<&str> = buffer.iter().map(|entry| entry.message.as_str()).collect();
    assert_eq!(kept, ["7", "8", "9"]);
    assert_eq!(buffer.received(), 10);
}
