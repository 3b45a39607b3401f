//! Seed file schema
//!
//! ```yaml
//! categories:
//!   - id: 1
//!     type: Science
//! questions:
//!   - question: What is the heaviest organ in the human body?
//!     answer: The Liver
//!     category: 1
//!     difficulty: 4
//! ```

use serde::Deserialize;
use trivia_core::model::{CategoryId, QuestionDraft};

/// Top-level seed document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,

    /// Questions are read as drafts so the creation rules can report which
    /// field is wrong instead of failing the YAML decode
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
}

/// Category entry, keyed by its explicit id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCategory {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub label: String,
}
