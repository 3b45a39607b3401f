#![allow(clippy::unwrap_used, clippy::expect_used)]

use trivia_core::errors::TriviaError;
use trivia_core::logging_facility::test_capture::init_test_capture;
use trivia_core::{log_op_end, log_op_error, log_op_start};
use trivia_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(start_events, 1);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = TriviaError::QuestionNotFound { question_id: 8 };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field("err.code"), Some("ERR_NOT_FOUND"));
    assert_eq!(events[0].field("err.kind"), Some("NotFound"));
}

#[test]
fn test_start_fields_are_recorded() {
    let capture = init_test_capture();
    let op_name = "test_start_fields_unique_4";

    log_op_start!(op_name, question_id = 12, filter = "search");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("question_id"), Some("12"));
    assert_eq!(events[0].field("filter"), Some("search"));
    assert!(events[0]
        .component
        .as_deref()
        .is_some_and(|c| c.starts_with("logging_facility_tests")));
}
