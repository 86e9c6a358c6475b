use live_probe_protocol::parser::{detect_and_parse, detect_format, parse_stack_trace};
use live_probe_protocol::trace::{ArtifactLanguage, FrameElement};
use live_probe_protocol::utils::config::NOT_AVAILABLE;
use pretty_assertions::assert_eq;

const JVM_TRACE: &str = "java.lang.IllegalStateException: connection closed\n\
\tat com.example.db.Pool.acquire(Pool.java:88)\n\
\tat com.example.db.Repository.find(Repository.java:31)\n\
\tat com.example.web.Controller.get(Controller.java:17)\n";

const NODE_TRACE: &str = "TypeError: Cannot read properties of undefined (reading 'id')\n\
    at getUser (/srv/app/users.js:42:17)\n\
    at Layer.handle (/srv/app/node_modules/express/lib/router/layer.js:95:5)\n";

const PYTHON_TRACE: &str = concat!(
    "Traceback (most recent call last):\n",
    "  File \"/app/main.py\", line 10, in <module>\n",
    "    main()\n",
    "  File \"/app/main.py\", line 6, in main\n",
    "    divide(1, 0)\n",
    "  File \"/app/calc.py\", line 2, in divide\n",
    "    return a / b\n",
    "ZeroDivisionError: division by zero\n",
);

#[test]
fn test_jvm_single_frame() {
    let text = "java.lang.RuntimeException: boom\n\tat com.foo.Bar.baz(Bar.java:42)\n";
    let trace = detect_and_parse(text).unwrap();

    assert_eq!(trace.exception_type, "java.lang.RuntimeException");
    assert_eq!(trace.message.as_deref(), Some("boom"));
    assert_eq!(trace.elements, vec![FrameElement::new("com.foo.Bar.baz", "Bar.java:42")]);
    assert_eq!(trace.language, Some(ArtifactLanguage::Jvm));
}

#[test]
fn test_jvm_header_without_message() {
    let text = "java.lang.NullPointerException\n\tat com.foo.Bar.baz(Bar.java:42)\n";
    let trace = detect_and_parse(text).unwrap();
    assert_eq!(trace.exception_type, "java.lang.NullPointerException");
    assert_eq!(trace.message, None);
}

#[test]
fn test_node_single_frame() {
    let trace = detect_and_parse("Error: oops\n    at foo (/app/index.js:10:5)\n").unwrap();

    assert_eq!(trace.exception_type, "Error");
    assert_eq!(trace.message.as_deref(), Some("oops"));
    assert_eq!(
        trace.elements,
        vec![FrameElement::new("foo", "/app/index.js:10").with_column(5)]
    );
    assert_eq!(trace.language, Some(ArtifactLanguage::NodeJs));
}

#[test]
fn test_python_frames_are_innermost_first() {
    let text = concat!(
        "Traceback (most recent call last):\n",
        "  File \"/app/a.py\", line 1, in outer\n",
        "    inner()\n",
        "  File \"/app/b.py\", line 2, in inner\n",
        "    raise ValueError()\n",
    );
    let trace = detect_and_parse(text).unwrap();

    assert_eq!(
        trace.elements,
        vec![
            FrameElement::new("inner", "/app/b.py:2").with_source_code("raise ValueError()"),
            FrameElement::new("outer", "/app/a.py:1").with_source_code("inner()"),
        ]
    );
    assert_eq!(trace.exception_type, NOT_AVAILABLE);
    assert_eq!(trace.message.as_deref(), Some(NOT_AVAILABLE));
}

#[test]
fn test_frame_counts_per_language() {
    for (text, language, frames) in [
        (JVM_TRACE, ArtifactLanguage::Jvm, 3),
        (NODE_TRACE, ArtifactLanguage::NodeJs, 2),
        (PYTHON_TRACE, ArtifactLanguage::Python, 3),
    ] {
        assert_eq!(detect_format(text), Some(language));
        let trace = parse_stack_trace(text).unwrap().unwrap();
        assert_eq!(trace.language, Some(language));
        assert_eq!(trace.len(), frames, "frame count for {}", language);
    }
}

#[test]
fn test_node_message_with_parentheses() {
    let trace = detect_and_parse(NODE_TRACE).unwrap();
    assert_eq!(trace.exception_type, "TypeError");
    assert_eq!(
        trace.message.as_deref(),
        Some("Cannot read properties of undefined (reading 'id')")
    );
    assert_eq!(trace.elements[1].method, "Layer.handle");
}

#[test]
fn test_unrecognized_text_is_absent() {
    assert_eq!(detect_and_parse("2024-01-01 INFO server started"), None);
    assert_eq!(detect_and_parse(""), None);
}
