use wattbench_events::{EventParseError, Severity, SseParser, StreamEvent, StreamEventKind};

fn bench_session() -> Vec<StreamEvent> {
    vec![
        StreamEvent::new(StreamEventKind::Debug, "adc sample 512").with_id(1_000),
        StreamEvent::new(StreamEventKind::Log, "test phase 1 started").with_id(1_250),
        StreamEvent::new(StreamEventKind::Warning, "disk usage high").with_id(2_000),
        StreamEvent::new(StreamEventKind::Error, "thrust exceeded limit").with_id(2_100),
        StreamEvent::new(StreamEventKind::Log, "").with_id(2_200),
    ]
}

#[test]
fn emitted_stream_decodes_in_arrival_order_regardless_of_chunking() {
    let sent = bench_session();
    let wire: String = sent.iter().map(StreamEvent::encode).collect();

    for chunk_size in [1, 3, 7, 64, wire.len()] {
        let mut parser = SseParser::default();
        let mut received = Vec::new();
        let chars: Vec<char> = wire.chars().collect();
        for chunk in chars.chunks(chunk_size) {
            let chunk: String = chunk.iter().collect();
            for frame in parser.push(&chunk) {
                received.push(StreamEvent::try_from(frame).expect("bench frame"));
            }
        }
        parser.finish();
        assert_eq!(parser.last_event_id(), Some("2200"));
        assert_eq!(received, sent, "chunk size {chunk_size}");
    }
}

#[test]
fn every_category_maps_to_its_display_severity() {
    let severities: Vec<Severity> = bench_session().iter().map(StreamEvent::severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Info,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Info,
        ]
    );
}

#[test]
fn foreign_event_names_are_rejected_not_remapped() {
    let mut parser = SseParser::default();
    let frames = parser.push("event: telemetry\ndata: 12.5V\n\ndata: unnamed\n\n");
    let decoded: Vec<_> = frames.into_iter().map(StreamEvent::try_from).collect();
    assert_eq!(
        decoded,
        vec![
            Err(EventParseError::UnknownKind {
                name: "telemetry".to_string()
            }),
            Err(EventParseError::MissingKind),
        ]
    );
}
