//! Mutation gateway: the only paths that change stored questions
//!
//! Both operations validate before touching the store. Atomicity of the
//! write itself is the store's contract (see [`QuestionStore`]), so a failed
//! insert or delete surfaces as `Persistence` with the row set unchanged.

use crate::errors::{Result, TriviaError};
use crate::model::{NewQuestion, Question, QuestionDraft, QuestionId};
use crate::ops::store::QuestionStore;
use crate::rules::validation::validate_draft;

/// Validate a draft and store it
///
/// # Errors
///
/// - `MissingField` / `InvalidInput` if the draft fails validation; the
///   store is not called
/// - `Persistence` if the insert fails
pub fn create_question<S>(store: &mut S, draft: QuestionDraft) -> Result<Question>
where
    S: QuestionStore + ?Sized,
{
    let new = validate_draft(draft)?;
    insert_validated(store, &new)
}

/// Store an already validated question
///
/// # Errors
///
/// Returns `Persistence` if the insert fails.
pub fn insert_validated<S>(store: &mut S, question: &NewQuestion) -> Result<Question>
where
    S: QuestionStore + ?Sized,
{
    store.insert_question(question)
}

/// Delete a question by id
///
/// # Errors
///
/// - `NotFound` if no question has this id (including one removed by a
///   concurrent request between the lookup and the delete)
/// - `Persistence` if the lookup or the delete fails
pub fn delete_question<S>(store: &mut S, id: QuestionId) -> Result<()>
where
    S: QuestionStore + ?Sized,
{
    if store.get_question(id)?.is_none() {
        return Err(TriviaError::QuestionNotFound { question_id: id }.into());
    }

    if !store.delete_question(id)? {
        return Err(TriviaError::QuestionNotFound { question_id: id }.into());
    }

    Ok(())
}
