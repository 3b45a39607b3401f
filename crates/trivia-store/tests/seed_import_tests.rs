use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;
use trivia_core::model::{Category, QuestionFilter};
use trivia_core::{ExErrorKind, QuestionStore};
use trivia_store::seed::{import_seed, import_seed_path, import_seed_str, seed_files_in};
use trivia_store::{db, migrations, SqliteStore};

const SEED: &str = r#"
categories:
  - id: 1
    type: Science
  - id: 2
    type: Art
questions:
  - question: What is the heaviest organ in the human body?
    answer: The Liver
    category: 1
    difficulty: 4
  - question: Which Dutch graphic artist was initials M C?
    answer: Escher
    category: 2
    difficulty: 1
"#;

fn setup_test_db() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
        .unwrap()
}

fn workspace_seed_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("seeds")
}

#[test]
fn test_import_seed_string() {
    let mut conn = setup_test_db();
    let report = import_seed_str(SEED, "inline", &mut conn).unwrap();

    assert!(!report.skipped);
    assert_eq!(report.categories, 2);
    assert_eq!(report.questions, 2);
    assert_eq!(count(&conn, "categories"), 2);
    assert_eq!(count(&conn, "questions"), 2);
    assert_eq!(count(&conn, "seed_imports"), 1);
}

#[test]
fn test_reimport_is_skipped() {
    let mut conn = setup_test_db();
    import_seed_str(SEED, "inline", &mut conn).unwrap();
    let again = import_seed_str(SEED, "inline", &mut conn).unwrap();

    assert!(again.skipped);
    assert_eq!(count(&conn, "questions"), 2);
    assert_eq!(count(&conn, "seed_imports"), 1);
}

#[test]
fn test_categories_are_upserted() {
    let mut conn = setup_test_db();
    import_seed_str(SEED, "first", &mut conn).unwrap();
    import_seed_str("categories:\n  - {id: 2, type: Fine Art}\n", "second", &mut conn).unwrap();

    let store = SqliteStore::new(conn);
    assert_eq!(
        store.list_categories().unwrap(),
        vec![Category::new(1, "Science"), Category::new(2, "Fine Art")]
    );
}

#[test]
fn test_invalid_question_imports_nothing() {
    let mut conn = setup_test_db();
    let bad = format!(
        "{}  - question: ''\n    answer: nothing\n    category: 1\n    difficulty: 1\n",
        SEED
    );

    let err = import_seed_str(&bad, "bad", &mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert!(err.message().contains("questions[2]"), "{}", err);
    assert_eq!(count(&conn, "categories"), 0);
    assert_eq!(count(&conn, "questions"), 0);
    assert_eq!(count(&conn, "seed_imports"), 0);
}

#[test]
fn test_write_failure_rolls_back_whole_file() {
    let mut conn = setup_test_db();
    conn.execute_batch(
        "CREATE TRIGGER reject_escher AFTER INSERT ON questions
         WHEN NEW.answer = 'Escher'
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .unwrap();

    let err = import_seed_str(SEED, "inline", &mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(count(&conn, "categories"), 0);
    assert_eq!(count(&conn, "questions"), 0);
    assert_eq!(count(&conn, "seed_imports"), 0);
}

#[test]
fn test_directory_import_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("02_second.yml"),
        "questions:\n  - {question: Second?, answer: B, category: 1, difficulty: 1}\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("01_first.yaml"),
        "questions:\n  - {question: First?, answer: A, category: 1, difficulty: 1}\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a seed").unwrap();

    let files = seed_files_in(dir.path()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("01_first.yaml"));

    let mut conn = setup_test_db();
    let reports = import_seed_path(dir.path(), &mut conn).unwrap();
    assert_eq!(reports.len(), 2);

    let store = SqliteStore::new(conn);
    assert_eq!(store.get_question(1).unwrap().unwrap().question, "First?");
    assert_eq!(store.get_question(2).unwrap().unwrap().question, "Second?");
}

#[test]
fn test_missing_file_is_reported() {
    let mut conn = setup_test_db();
    let err = import_seed(&PathBuf::from("/nonexistent/seed.yaml"), &mut conn).unwrap_err();
    assert!(err.message().contains("Failed to read seed file"));
}

#[test]
fn test_bundled_seed_imports_six_categories() {
    let mut conn = setup_test_db();
    let reports = import_seed_path(&workspace_seed_dir(), &mut conn).unwrap();
    assert!(!reports.is_empty());

    let store = SqliteStore::new(conn);
    let labels: Vec<String> = store
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(
        labels,
        vec!["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
    assert!(store.count_questions(&QuestionFilter::All).unwrap() > 0);
}
