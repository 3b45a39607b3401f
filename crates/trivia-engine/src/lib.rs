//! Trivia Engine - Orchestration layer
//!
//! Dispatches read-only queries and mutating commands against a
//! `QuestionStore` handle, wrapping each one in start/end/error log events.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{
    apply_engine_query, apply_engine_query_with_rng, EngineQuery, EngineQueryResult,
};
