mod common;

use common::{ids, store_with_questions};
use trivia_core::ops::question_ops::{create_question, delete_question};
use trivia_core::queries::list_questions;
use trivia_core::{
    ExErrorKind, MemoryStore, PageRequest, QuestionDraft, QuestionFilter, QuestionStore,
};

fn draft(question: &str, answer: &str, category: i64, difficulty: i64) -> QuestionDraft {
    QuestionDraft {
        question: Some(question.to_string()),
        answer: Some(answer.to_string()),
        category: Some(category),
        difficulty: Some(difficulty),
    }
}

#[test]
fn test_create_with_empty_question_is_validation_error() {
    let mut store = MemoryStore::new();

    let err = create_question(&mut store, draft("", "A", 1, 1)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.field(), Some("question"));
    assert!(store.is_empty());
}

#[test]
fn test_create_with_missing_field_is_validation_error() {
    let mut store = MemoryStore::new();
    let mut d = draft("Q?", "A", 1, 1);
    d.answer = None;

    let err = create_question(&mut store, d).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingField);
    assert!(err.kind().is_user_correctable());
}

#[test]
fn test_created_question_visible_in_listing() {
    let mut store = store_with_questions(10, 1);

    let created =
        create_question(&mut store, draft("Who painted the Mona Lisa?", "Da Vinci", 2, 3))
            .unwrap();

    assert_eq!(created.id, 11);
    let page = list_questions(&store, &QuestionFilter::All, PageRequest::new(2)).unwrap();
    assert_eq!(page.total_questions, 11);
    assert_eq!(page.questions, vec![created.clone()]);

    let by_category =
        list_questions(&store, &QuestionFilter::category(2), PageRequest::first()).unwrap();
    assert_eq!(ids(&by_category.questions), vec![created.id]);
}

#[test]
fn test_create_accepts_unknown_category() {
    let mut store = MemoryStore::new();

    let created = create_question(&mut store, draft("Q?", "A", 77, 1)).unwrap();

    assert_eq!(created.category, 77);
    assert!(store.list_categories().unwrap().is_empty());
}

#[test]
fn test_create_changes_exactly_one_row() {
    let mut store = store_with_questions(5, 1);
    let before = store
        .fetch_questions(&QuestionFilter::All, 0, u64::MAX)
        .unwrap();

    let created = create_question(&mut store, draft("Q?", "A", 1, 1)).unwrap();

    let after = store
        .fetch_questions(&QuestionFilter::All, 0, u64::MAX)
        .unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last(), Some(&created));
}

#[test]
fn test_delete_missing_is_not_found() {
    let mut store = store_with_questions(3, 1);

    let err = delete_question(&mut store, 4).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_deleted_question_gone_from_listing_and_search() {
    let mut store = store_with_questions(3, 1);

    delete_question(&mut store, 2).unwrap();

    let page = list_questions(&store, &QuestionFilter::All, PageRequest::first()).unwrap();
    assert_eq!(ids(&page.questions), vec![1, 3]);
    let search = list_questions(
        &store,
        &QuestionFilter::search("Question 2"),
        PageRequest::first(),
    )
    .unwrap();
    assert_eq!(search.total_questions, 0);
}

#[test]
fn test_delete_twice_second_is_not_found() {
    let mut store = store_with_questions(1, 1);

    delete_question(&mut store, 1).unwrap();
    let err = delete_question(&mut store, 1).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
}
