pub mod category;
pub mod filter;
pub mod question;

pub use category::{Category, CategoryId};
pub use filter::{CategoryScope, QuestionFilter};
pub use question::{NewQuestion, Question, QuestionDraft, QuestionId};
