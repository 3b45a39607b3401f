//! Correlation types for request tracking
//!
//! A `RequestId` is minted (or adopted from the caller) at the HTTP boundary
//! and travels with the request span so every log line of one request can be
//! grouped together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest caller-supplied request id that is adopted verbatim
const MAX_FOREIGN_ID_LEN: usize = 128;

/// Unique identifier for a single request or operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Adopt an id sent by the caller, or mint a fresh one when the
    /// supplied value is empty, oversized or not printable ASCII.
    pub fn adopt_or_new(candidate: Option<&str>) -> Self {
        match candidate.map(str::trim) {
            Some(s)
                if !s.is_empty()
                    && s.len() <= MAX_FOREIGN_ID_LEN
                    && s.bytes().all(|b| b.is_ascii_graphic()) =>
            {
                Self(s.to_string())
            }
            _ => Self::new(),
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
