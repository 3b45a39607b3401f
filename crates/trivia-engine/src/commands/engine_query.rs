//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for all read-only
//! operations. Unlike `apply_engine_command`, it takes a shared store handle
//! and never writes.

use std::collections::BTreeMap;
use std::time::Instant;

use rand::Rng;
use trivia_core::errors::Result;
use trivia_core::model::{CategoryId, CategoryScope, Question, QuestionFilter, QuestionId};
use trivia_core::queries::{self, PageRequest, QuestionPage};
use trivia_core::{log_op_end, log_op_error, log_op_start, QuestionStore};

/// Read-only queries supported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQuery {
    /// Every category as an id to label mapping.
    ListCategories,

    /// One page of questions matching `filter`, id ascending.
    ListQuestions {
        filter: QuestionFilter,
        page: PageRequest,
    },

    /// A random question from `scope` that is not in `previous`.
    NextQuizQuestion {
        scope: CategoryScope,
        previous: Vec<QuestionId>,
    },
}

impl EngineQuery {
    /// Operation name used in log events
    pub fn op(&self) -> &'static str {
        match self {
            EngineQuery::ListCategories => "list_categories",
            EngineQuery::ListQuestions { .. } => "list_questions",
            EngineQuery::NextQuizQuestion { .. } => "next_quiz_question",
        }
    }
}

/// Result of applying an engine query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQueryResult {
    Categories(BTreeMap<CategoryId, String>),
    Questions(QuestionPage),
    /// `None` once the quiz pool is exhausted.
    QuizQuestion(Option<Question>),
}

/// Apply a read-only query, drawing quiz questions from the thread RNG.
///
/// # Errors
///
/// Returns `Persistence` if the store cannot be read.
pub fn apply_engine_query(
    query: EngineQuery,
    store: &dyn QuestionStore,
) -> Result<EngineQueryResult> {
    apply_engine_query_with_rng(query, store, &mut rand::thread_rng())
}

/// Apply a read-only query with an explicit RNG for quiz selection.
///
/// # Errors
///
/// Returns `Persistence` if the store cannot be read.
pub fn apply_engine_query_with_rng<R>(
    query: EngineQuery,
    store: &dyn QuestionStore,
    rng: &mut R,
) -> Result<EngineQueryResult>
where
    R: Rng + ?Sized,
{
    let op = query.op();
    let start = Instant::now();

    let result = match query {
        EngineQuery::ListCategories => {
            log_op_start!(op);
            queries::category_labels(store).map(EngineQueryResult::Categories)
        }

        EngineQuery::ListQuestions { filter, page } => {
            log_op_start!(op, filter = filter.kind(), page = page.number());
            queries::list_questions(store, &filter, page).map(EngineQueryResult::Questions)
        }

        EngineQuery::NextQuizQuestion { scope, previous } => {
            log_op_start!(op, scope = ?scope, previous = previous.len());
            queries::next_question_with_rng(store, scope, &previous, rng)
                .map(EngineQueryResult::QuizQuestion)
        }
    };

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(EngineQueryResult::Questions(page)) => {
            log_op_end!(
                op,
                duration_ms = elapsed,
                total_questions = page.total_questions
            );
        }
        Ok(EngineQueryResult::QuizQuestion(question)) => {
            log_op_end!(
                op,
                duration_ms = elapsed,
                question_id = question.as_ref().map(|q| q.id)
            );
        }
        Ok(_) => {
            log_op_end!(op, duration_ms = elapsed);
        }
        Err(e) => log_op_error!(op, e.clone(), duration_ms = elapsed),
    }
    result
}
