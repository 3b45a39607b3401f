//! Command orchestration layer.
//!
//! Provides the query and command entry points that sit between the
//! request boundary and the core components.

pub mod engine_command;
pub mod engine_query;
