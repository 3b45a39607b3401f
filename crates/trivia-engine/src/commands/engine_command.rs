//! Engine-level mutating commands.

use std::time::Instant;

use trivia_core::errors::Result;
use trivia_core::model::{Question, QuestionDraft, QuestionId};
use trivia_core::ops::question_ops;
use trivia_core::{log_op_end, log_op_error, log_op_start, QuestionStore};

/// Commands that change stored questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Validate a draft and store it.
    CreateQuestion(QuestionDraft),

    /// Delete an existing question.
    DeleteQuestion { question_id: QuestionId },
}

impl EngineCommand {
    /// Operation name used in log events
    pub fn op(&self) -> &'static str {
        match self {
            EngineCommand::CreateQuestion(_) => "create_question",
            EngineCommand::DeleteQuestion { .. } => "delete_question",
        }
    }
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    QuestionCreated(Question),
    QuestionDeleted { question_id: QuestionId },
}

/// Apply a mutating command.
///
/// # Errors
///
/// - `MissingField` / `InvalidInput` when a draft fails validation
/// - `NotFound` when deleting an unknown question
/// - `Persistence` when the write fails; the store is left unchanged
pub fn apply_engine_command(
    cmd: EngineCommand,
    store: &mut dyn QuestionStore,
) -> Result<EngineCommandResult> {
    let op = cmd.op();
    let start = Instant::now();

    let result = match cmd {
        EngineCommand::CreateQuestion(draft) => {
            log_op_start!(op);
            question_ops::create_question(store, draft).map(EngineCommandResult::QuestionCreated)
        }
        EngineCommand::DeleteQuestion { question_id } => {
            log_op_start!(op, question_id = question_id);
            question_ops::delete_question(store, question_id)
                .map(|()| EngineCommandResult::QuestionDeleted { question_id })
        }
    };

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(EngineCommandResult::QuestionCreated(q)) => {
            log_op_end!(op, duration_ms = elapsed, question_id = q.id, category_id = q.category);
        }
        Ok(EngineCommandResult::QuestionDeleted { question_id }) => {
            log_op_end!(op, duration_ms = elapsed, question_id = *question_id);
        }
        Err(e) => log_op_error!(op, e.clone(), duration_ms = elapsed),
    }
    result
}
