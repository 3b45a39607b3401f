use serde::{Deserialize, Serialize};

use super::category::CategoryId;

/// Store-assigned question identifier
pub type QuestionId = i64;

/// Question - a stored trivia question
///
/// The serialized form is the formatted record exposed across the HTTP
/// boundary: `id`, `question`, `answer`, `category`, `difficulty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier assigned by the store on creation
    pub id: QuestionId,

    /// Question text
    pub question: String,

    /// Answer text
    pub answer: String,

    /// Category this question belongs to (not checked against the category table)
    pub category: CategoryId,

    /// Difficulty score, 1 and up
    pub difficulty: i64,
}

/// A validated question that has not been stored yet
///
/// Only obtainable through [`crate::rules::validation::validate_draft`] or
/// [`NewQuestion::new`], both of which enforce the field constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i64,
}

impl NewQuestion {
    /// Build a validated question from its four fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty text or a non-positive category or
    /// difficulty.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> crate::errors::Result<Self> {
        let draft = QuestionDraft {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category),
            difficulty: Some(difficulty),
        };
        crate::rules::validation::validate_draft(draft).map_err(Into::into)
    }

    pub(crate) fn from_validated(
        question: String,
        answer: String,
        category: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            question,
            answer,
            category,
            difficulty,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }

    /// Attach the identifier the store assigned
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Unvalidated creation payload as received from a caller
///
/// Every field is optional so that a missing field is reported as a
/// validation failure instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub difficulty: Option<i64>,
}
