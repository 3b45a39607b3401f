//! Trivia Core - query and selection engine for the trivia service
//!
//! This crate holds everything with real rules in it and no I/O:
//! - Question and Category models, and the tagged `QuestionFilter`
//! - The `QuestionStore` seam plus an ordered in-memory implementation
//! - Query engine: filtered, id-ordered, paginated listings
//! - Quiz selector: uniform random pick of an unseen question
//! - Mutation gateway: validated create and delete
//! - Error and logging facilities shared by the other crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, TriviaError};
pub use model::{
    Category, CategoryId, CategoryScope, NewQuestion, Question, QuestionDraft, QuestionFilter,
    QuestionId,
};
pub use ops::{MemoryStore, QuestionStore};
pub use queries::{PageRequest, QuestionPage, PAGE_SIZE};
