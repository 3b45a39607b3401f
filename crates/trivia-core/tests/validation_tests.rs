use serde_json::json;
use trivia_core::errors::{ExErrorKind, TriviaError};
use trivia_core::rules::validation::validate_draft;
use trivia_core::{NewQuestion, QuestionDraft};

fn decode(value: serde_json::Value) -> QuestionDraft {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_complete_payload_validates() {
    let draft = decode(json!({
        "question": "What is the largest lake in Africa?",
        "answer": "Lake Victoria",
        "category": 3,
        "difficulty": 2
    }));
    let new = validate_draft(draft).unwrap();
    assert_eq!(new.category(), 3);
    assert_eq!(new.into_question(8).id, 8);
}

#[test]
fn test_first_failing_field_wins() {
    let draft = decode(json!({"question": "", "answer": "", "category": 0, "difficulty": 0}));
    assert_eq!(validate_draft(draft), Err(TriviaError::EmptyQuestion));

    let draft = decode(json!({"question": "Q", "category": 0}));
    assert_eq!(
        validate_draft(draft),
        Err(TriviaError::MissingField { field: "answer" })
    );
}

#[test]
fn test_null_counts_as_missing() {
    let draft = decode(json!({"question": "Q", "answer": "A", "category": null, "difficulty": 1}));
    assert_eq!(
        validate_draft(draft),
        Err(TriviaError::MissingField { field: "category" })
    );
}

#[test]
fn test_wrongly_typed_fields_do_not_decode() {
    let as_string = json!({"question": "Q", "answer": "A", "category": "1", "difficulty": 1});
    assert!(serde_json::from_value::<QuestionDraft>(as_string).is_err());

    let as_float = json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 1.5});
    assert!(serde_json::from_value::<QuestionDraft>(as_float).is_err());
}

#[test]
fn test_new_question_constructor_reports_kind() {
    let err = NewQuestion::new("Q", "A", 1, 0).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.field(), Some("difficulty"));

    assert!(NewQuestion::new("Q", "A", 1, 1).is_ok());
}
