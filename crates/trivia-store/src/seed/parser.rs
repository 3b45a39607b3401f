//! Seed parser with validation
//!
//! Parses YAML, then checks categories and runs every question through the
//! same rules the HTTP create path uses.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use trivia_core::model::{Category, NewQuestion};
use trivia_core::rules::validation::validate_draft;

use crate::errors::{seed_validation, Result};
use crate::seed::format::SeedFile;

/// A seed that passed validation, ready to import
#[derive(Debug, Clone)]
pub struct ParsedSeed {
    /// SHA-256 of the raw document, hex encoded
    pub digest: String,
    pub categories: Vec<Category>,
    pub questions: Vec<NewQuestion>,
}

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<ParsedSeed> {
    let content = fs::read_to_string(path).map_err(|e| {
        seed_validation(&format!(
            "Failed to read seed file {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<ParsedSeed> {
    let seed: SeedFile = if content.trim().is_empty() {
        SeedFile::default()
    } else {
        serde_yaml::from_str(content)
            .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?
    };

    let categories = validate_categories(&seed)?;

    let mut questions = Vec::with_capacity(seed.questions.len());
    for (index, draft) in seed.questions.into_iter().enumerate() {
        let question = validate_draft(draft).map_err(|e| {
            seed_validation(&format!("questions[{}]: {}", index, e))
        })?;
        questions.push(question);
    }

    Ok(ParsedSeed {
        digest: hex::encode(Sha256::digest(content.as_bytes())),
        categories,
        questions,
    })
}

fn validate_categories(seed: &SeedFile) -> Result<Vec<Category>> {
    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(seed.categories.len());
    for entry in &seed.categories {
        if entry.id <= 0 {
            return Err(seed_validation(&format!(
                "Category id must be positive, got {}",
                entry.id
            )));
        }
        if entry.label.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Category {} has an empty type",
                entry.id
            )));
        }
        if !seen.insert(entry.id) {
            return Err(seed_validation(&format!(
                "Duplicate category id {}",
                entry.id
            )));
        }
        categories.push(Category::new(entry.id, entry.label.clone()));
    }
    Ok(categories)
}
