use chrono::{TimeZone, Utc};
use live_probe_protocol::event::{
    LiveBreakpointHit, LiveInstrumentEventType, LiveInstrumentRemoved, TrackedLiveEvent,
};
use live_probe_protocol::instrument::{LiveInstrument, MeterType, SourceLocation};
use live_probe_protocol::output::{from_json_value, to_json_value};
use live_probe_protocol::parser::detect_and_parse;
use live_probe_protocol::trace::{ArtifactLanguage, FrameElement, StackTrace};
use pretty_assertions::assert_eq;

fn nested_trace() -> StackTrace {
    let cause = StackTrace::new(
        "java.io.IOException",
        Some("disk full".to_string()),
        vec![FrameElement::new("com.foo.Io.write", "Io.java:9")],
    )
    .with_language(ArtifactLanguage::Jvm);

    StackTrace::new(
        "java.lang.RuntimeException",
        Some("save failed".to_string()),
        vec![
            FrameElement::new("com.foo.Store.save", "Store.java:30"),
            FrameElement::new("app", "/app/x.js:1").with_column(4).with_source_line(1),
        ],
    )
    .with_language(ArtifactLanguage::Jvm)
    .with_caused_by(cause)
}

#[test]
fn test_stack_trace_round_trip_with_cause() {
    let trace = nested_trace();
    let value = to_json_value(&trace).unwrap();
    assert_eq!(value["causedBy"]["exceptionType"], "java.io.IOException");

    let decoded: StackTrace = from_json_value(value).unwrap();
    assert_eq!(decoded, trace);
}

#[test]
fn test_breakpoint_hit_round_trip() {
    let hit = LiveBreakpointHit {
        breakpoint_id: "bp-1".to_string(),
        trace_id: "trace-9".to_string(),
        occurred_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        service_instance: "orders-7f9".to_string(),
        service: "orders".to_string(),
        stack_trace: detect_and_parse("Error: oops\n    at foo (/app/index.js:10:5)\n").unwrap(),
    };

    let value = to_json_value(&hit).unwrap();
    assert_eq!(value["occurredAt"], "2024-03-01T12:00:00Z");
    assert_eq!(value["stackTrace"]["language"], "NODEJS");

    let decoded: LiveBreakpointHit = from_json_value(value).unwrap();
    assert_eq!(decoded, hit);
    assert_eq!(decoded.event_type(), LiveInstrumentEventType::BreakpointHit);
}

#[test]
fn test_removed_event_type_follows_instrument() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let location = SourceLocation::at_line("A.java", 1);

    let cases = [
        (LiveInstrument::breakpoint(location.clone()), LiveInstrumentEventType::BreakpointRemoved),
        (
            LiveInstrument::log(location.clone(), "hi", Vec::new()),
            LiveInstrumentEventType::LogRemoved,
        ),
        (
            LiveInstrument::meter(location.clone(), MeterType::Count, None),
            LiveInstrumentEventType::MeterRemoved,
        ),
        (LiveInstrument::span(location, "op"), LiveInstrumentEventType::SpanRemoved),
    ];
    for (instrument, expected) in cases {
        let removed = LiveInstrumentRemoved::new(instrument, at);
        assert_eq!(removed.event_type(), expected);
        assert_eq!(removed.occurred_at(), at);
    }
}

#[test]
fn test_removed_round_trip_with_cause() {
    let removed = LiveInstrumentRemoved::new(
        LiveInstrument::breakpoint(SourceLocation::at_line("A.java", 1)).with_id("bp-2"),
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    )
    .with_cause(nested_trace());

    let decoded: LiveInstrumentRemoved = from_json_value(to_json_value(&removed).unwrap()).unwrap();
    assert_eq!(decoded, removed);
}

#[test]
fn test_empty_frame_source_rejected_on_decode() {
    let result: Result<StackTrace, _> = from_json_value(serde_json::json!({
        "exceptionType": "E",
        "message": null,
        "elements": [{"method": "m", "source": ""}]
    }));
    assert!(result.is_err());
}
