//! Quiz selector: a uniformly random question the caller has not seen yet
//!
//! Stateless across calls. The caller accumulates the ids it has been served
//! and sends them back on every request.

use std::collections::HashSet;

use rand::Rng;

use crate::errors::Result;
use crate::model::{CategoryScope, Question, QuestionId};
use crate::ops::store::QuestionStore;

/// Ids eligible for the next quiz question, ascending
///
/// # Errors
///
/// Returns `Persistence` if the store read fails.
pub fn candidate_pool<S>(
    store: &S,
    scope: CategoryScope,
    previous: &[QuestionId],
) -> Result<Vec<QuestionId>>
where
    S: QuestionStore + ?Sized,
{
    let seen: HashSet<QuestionId> = previous.iter().copied().collect();
    Ok(store
        .question_ids(&scope.to_filter())?
        .into_iter()
        .filter(|id| !seen.contains(id))
        .collect())
}

/// Pick the next quiz question using the thread-local RNG
///
/// `None` means the pool is exhausted (or the category has no questions at
/// all); the quiz is over.
///
/// # Errors
///
/// Returns `Persistence` if a store read fails.
pub fn next_question<S>(
    store: &S,
    scope: CategoryScope,
    previous: &[QuestionId],
) -> Result<Option<Question>>
where
    S: QuestionStore + ?Sized,
{
    next_question_with_rng(store, scope, previous, &mut rand::thread_rng())
}

/// Pick the next quiz question using `rng`
///
/// Each remaining candidate is equally likely. A candidate deleted between
/// the id scan and the fetch is dropped and the draw repeats over what is
/// left.
///
/// # Errors
///
/// Returns `Persistence` if a store read fails.
pub fn next_question_with_rng<S, R>(
    store: &S,
    scope: CategoryScope,
    previous: &[QuestionId],
    rng: &mut R,
) -> Result<Option<Question>>
where
    S: QuestionStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut pool = candidate_pool(store, scope, previous)?;
    tracing::debug!(pool_size = pool.len(), scope = ?scope, "quiz candidate pool");

    while !pool.is_empty() {
        let id = pool.swap_remove(rng.gen_range(0..pool.len()));
        if let Some(question) = store.get_question(id)? {
            return Ok(Some(question));
        }
    }

    Ok(None)
}
