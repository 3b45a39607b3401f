//! Seed importer orchestration
//!
//! Each file is parsed and validated in full before anything is written,
//! then imported in a single transaction. A file whose digest is already
//! recorded in `seed_imports` is skipped, so re-running an import is a no-op.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::{io_error, store_failure, Result};
use crate::repo::SqliteStore;
use crate::seed::parser::{parse_seed_file, parse_seed_str, ParsedSeed};

/// Outcome of importing one seed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub source: String,
    pub digest: String,
    pub categories: usize,
    pub questions: usize,
    /// True when the same document had been imported before
    pub skipped: bool,
}

/// Import a single seed file
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<ImportReport> {
    let seed = parse_seed_file(path)?;
    import_parsed(seed, &path.display().to_string(), conn)
}

/// Import a seed document held in memory; `source` is only recorded
pub fn import_seed_str(content: &str, source: &str, conn: &mut Connection) -> Result<ImportReport> {
    let seed = parse_seed_str(content)?;
    import_parsed(seed, source, conn)
}

/// Import a file, or every seed file in a directory in name order
///
/// Files are imported one transaction each; the first failure stops the run
/// and leaves earlier files committed.
pub fn import_seed_path(path: &Path, conn: &mut Connection) -> Result<Vec<ImportReport>> {
    if path.is_dir() {
        seed_files_in(path)?
            .iter()
            .map(|file| import_seed(file, conn))
            .collect()
    } else {
        Ok(vec![import_seed(path, conn)?])
    }
}

/// `*.yaml` and `*.yml` files directly inside `dir`, sorted by name
pub fn seed_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| io_error("seed_scan", e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| io_error("seed_scan", e))?.path();
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn already_imported(conn: &Connection, digest: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM seed_imports WHERE digest = ?1",
            [digest],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| store_failure("seed_lookup", e))?;
    Ok(found.is_some())
}

fn import_parsed(seed: ParsedSeed, source: &str, conn: &mut Connection) -> Result<ImportReport> {
    let mut report = ImportReport {
        source: source.to_string(),
        digest: seed.digest.clone(),
        categories: seed.categories.len(),
        questions: seed.questions.len(),
        skipped: false,
    };

    if already_imported(conn, &seed.digest)? {
        tracing::info!(source, digest = %seed.digest, "seed already imported, skipping");
        report.skipped = true;
        return Ok(report);
    }

    let op = "seed_import";
    let tx = conn.transaction().map_err(|e| store_failure(op, e))?;

    for category in &seed.categories {
        SqliteStore::upsert_category_tx(&tx, category)?;
    }
    for question in &seed.questions {
        SqliteStore::insert_question_tx(&tx, question)?;
    }

    tx.execute(
        "INSERT INTO seed_imports (digest, source, categories, questions, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            seed.digest,
            source,
            report.categories as i64,
            report.questions as i64,
            chrono::Utc::now().timestamp(),
        ],
    )
    .map_err(|e| store_failure(op, e))?;

    tx.commit().map_err(|e| store_failure(op, e))?;

    tracing::info!(
        source,
        digest = %report.digest,
        categories = report.categories,
        questions = report.questions,
        "seed imported"
    );
    Ok(report)
}
