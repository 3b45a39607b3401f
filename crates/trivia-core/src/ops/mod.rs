//! Store seam and mutating operations
//!
//! - [`QuestionStore`]: the capability every operation is handed
//! - [`MemoryStore`]: ordered in-memory implementation
//! - [`question_ops`]: the mutation gateway (create/delete)

pub mod memory_store;
pub mod question_ops;
pub mod store;

pub use memory_store::MemoryStore;
pub use store::QuestionStore;
