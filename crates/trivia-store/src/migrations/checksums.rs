//! Checksums of migration SQL, used to detect edits to applied migrations

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the migration body
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
