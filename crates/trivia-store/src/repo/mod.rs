//! Repository layer persisting trivia models to SQLite

pub mod sqlite_store;

pub use sqlite_store::SqliteStore;
