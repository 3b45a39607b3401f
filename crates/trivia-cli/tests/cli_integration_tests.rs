//! CLI integration tests
//!
//! Run the `trivia` binary against scratch databases.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rusqlite::Connection;
use tempfile::TempDir;

fn trivia(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trivia"))
        .current_dir(dir.path())
        .args(args)
        .args(["--log-profile", "test"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

fn count(db: &Path, table: &str) -> i64 {
    let conn = Connection::open(db).unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
        .unwrap()
}

fn bundled_seeds() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("seeds")
}

#[test]
fn test_migrate_creates_schema() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("data").join("trivia.db");

    let output = trivia(&dir, &["migrate", "--db", db.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "migrate should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 migrations applied"), "stdout: {}", stdout);
    assert_eq!(count(&db, "questions"), 0);

    // second run is a no-op
    let again = trivia(&dir, &["migrate", "--db", db.to_str().unwrap()]);
    assert!(again.status.success());
}

#[test]
fn test_seed_import_bundled_directory() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("trivia.db");
    let seeds = bundled_seeds();

    let output = trivia(
        &dir,
        &["seed", "import", seeds.to_str().unwrap(), "--db", db.to_str().unwrap()],
    );
    assert!(
        output.status.success(),
        "seed import should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Imported"));
    assert_eq!(count(&db, "categories"), 6);
    let questions = count(&db, "questions");
    assert!(questions > 0);

    let again = trivia(
        &dir,
        &["seed", "import", seeds.to_str().unwrap(), "--db", db.to_str().unwrap()],
    );
    assert!(again.status.success());
    assert!(String::from_utf8_lossy(&again.stdout).contains("Skipped"));
    assert_eq!(count(&db, "questions"), questions);
}

#[test]
fn test_invalid_seed_fails_and_imports_nothing() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("trivia.db");
    let seed = dir.path().join("bad.yaml");
    fs::write(
        &seed,
        "categories:\n  - {id: 1, type: Science}\nquestions:\n  - {question: Q, answer: A, category: 1, difficulty: 0}\n",
    )
    .unwrap();

    let output = trivia(
        &dir,
        &["seed", "import", seed.to_str().unwrap(), "--db", db.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
    assert_eq!(count(&db, "categories"), 0);
}

#[test]
fn test_config_file_supplies_database_path() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("trivia.toml"),
        "[database]\npath = \"from-config.db\"\n",
    )
    .unwrap();

    let output = trivia(&dir, &["migrate"]);
    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.path().join("from-config.db").exists());
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = trivia(&dir, &["migrate", "--config", "nope.toml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load settings"));
}
