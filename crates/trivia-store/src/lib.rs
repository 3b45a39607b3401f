//! Trivia Store - SQLite persistence for the trivia service
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed schema migrations
//! - `SqliteStore`, the `QuestionStore` implementation used in production
//! - YAML seed import for categories and questions

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteStore;
