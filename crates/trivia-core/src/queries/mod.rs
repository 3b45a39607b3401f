//! Read-only operations: paginated listings and quiz selection

pub mod pagination;
pub mod question_queries;
pub mod quiz_selector;

pub use pagination::{PageRequest, QuestionPage, PAGE_SIZE};
pub use question_queries::{category_labels, list_categories, list_questions};
pub use quiz_selector::{candidate_pool, next_question, next_question_with_rng};
