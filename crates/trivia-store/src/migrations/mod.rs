//! Migration framework
//!
//! - Embedded SQL migrations, applied in order
//! - Each applied migration recorded with a SHA-256 checksum
//! - Re-running is idempotent; an edited migration is rejected

mod checksums;
mod embedded;
mod runner;

pub use runner::{applied_migrations, apply_migrations};
