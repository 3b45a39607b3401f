use crate::errors::TriviaError;
use crate::model::{NewQuestion, QuestionDraft};

/// Validate a creation payload
///
/// Fields are checked in the order question, answer, category, difficulty
/// and the first failure is returned. A missing field fails the same way as
/// an invalid one, so callers never reach a store with partial data.
///
/// Category ids are only checked for being positive; whether a category with
/// that id exists is deliberately not verified.
///
/// # Errors
///
/// - `MissingField` if any field is absent
/// - `EmptyQuestion` / `EmptyAnswer` for empty text
/// - `InvalidCategory` / `InvalidDifficulty` for values below 1
pub fn validate_draft(draft: QuestionDraft) -> Result<NewQuestion, TriviaError> {
    let question = draft
        .question
        .ok_or(TriviaError::MissingField { field: "question" })?;
    if question.is_empty() {
        return Err(TriviaError::EmptyQuestion);
    }

    let answer = draft
        .answer
        .ok_or(TriviaError::MissingField { field: "answer" })?;
    if answer.is_empty() {
        return Err(TriviaError::EmptyAnswer);
    }

    let category = draft
        .category
        .ok_or(TriviaError::MissingField { field: "category" })?;
    if category <= 0 {
        return Err(TriviaError::InvalidCategory { value: category });
    }

    let difficulty = draft
        .difficulty
        .ok_or(TriviaError::MissingField { field: "difficulty" })?;
    if difficulty <= 0 {
        return Err(TriviaError::InvalidDifficulty { value: difficulty });
    }

    Ok(NewQuestion::from_validated(
        question, answer, category, difficulty,
    ))
}
