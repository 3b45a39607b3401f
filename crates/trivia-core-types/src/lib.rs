//! Core types shared across the trivia crates
//!
//! This crate provides the foundational types used by the error and
//! logging facilities and by the HTTP boundary:
//!
//! - **Correlation types**: RequestId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
