//! SQLite-backed `QuestionStore`
//!
//! Reads run directly on the connection. Each write runs in its own
//! transaction which is rolled back on drop unless committed, so a failed
//! insert or delete never leaves a partial change behind.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, Transaction};
use trivia_core::model::{Category, NewQuestion, Question, QuestionFilter, QuestionId};
use trivia_core::QuestionStore;

use crate::db;
use crate::errors::{store_failure, Result};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite store for categories and questions
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap an already configured connection
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open and configure the database at `path`
    ///
    /// Migrations are not applied here; run them once at startup.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Ok(Self::new(conn))
    }

    /// Fresh in-memory database with all migrations applied
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        db::configure(&conn)?;
        crate::migrations::apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Insert or relabel a category
    pub fn upsert_category(&self, category: &Category) -> Result<()> {
        upsert_category_on(&self.conn, category).map_err(|e| store_failure("upsert_category", e))
    }

    /// Insert or relabel a category inside a caller-owned transaction
    pub fn upsert_category_tx(tx: &Transaction, category: &Category) -> Result<()> {
        upsert_category_on(tx, category).map_err(|e| store_failure("upsert_category", e))
    }

    /// Insert a question inside a caller-owned transaction
    pub fn insert_question_tx(tx: &Transaction, question: &NewQuestion) -> Result<QuestionId> {
        insert_question_on(tx, question).map_err(|e| store_failure("insert_question", e))
    }
}

fn upsert_category_on(conn: &Connection, category: &Category) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO categories (id, type) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET type = excluded.type",
        params![category.id, category.label],
    )?;
    Ok(())
}

fn insert_question_on(conn: &Connection, question: &NewQuestion) -> rusqlite::Result<QuestionId> {
    conn.execute(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
        params![
            question.question(),
            question.answer(),
            question.category(),
            question.difficulty(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// WHERE clause and bound values for a filter
///
/// `lower()` in SQLite folds ASCII only, which is exactly the rule
/// `QuestionFilter::matches` defines. `instr` does no pattern matching, so
/// `%` and `_` in a keyword are literal.
fn where_clause(filter: &QuestionFilter) -> (&'static str, Vec<Value>) {
    match filter {
        QuestionFilter::All => ("", Vec::new()),
        QuestionFilter::Search { keyword } => (
            "WHERE instr(lower(question), lower(?)) > 0",
            vec![Value::Text(keyword.clone())],
        ),
        QuestionFilter::Category { category_id } => {
            ("WHERE category = ?", vec![Value::Integer(*category_id)])
        }
    }
}

fn to_sql_int(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

impl QuestionStore for SqliteStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        let op = "list_categories";
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id")
            .map_err(|e| store_failure(op, e))?;
        let categories = stmt
            .query_map([], |row| Ok(Category::new(row.get(0)?, row.get::<_, String>(1)?)))
            .map_err(|e| store_failure(op, e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| store_failure(op, e))?;
        Ok(categories)
    }

    fn count_questions(&self, filter: &QuestionFilter) -> Result<u64> {
        let (clause, values) = where_clause(filter);
        let sql = format!("SELECT COUNT(*) FROM questions {}", clause);
        let count: i64 = self
            .conn
            .query_row(&sql, params_from_iter(values.iter()), |row| row.get(0))
            .map_err(|e| store_failure("count_questions", e))?;
        Ok(count.max(0) as u64)
    }

    fn fetch_questions(
        &self,
        filter: &QuestionFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Question>> {
        let op = "fetch_questions";
        let (clause, mut values) = where_clause(filter);
        values.push(Value::Integer(to_sql_int(limit)));
        values.push(Value::Integer(to_sql_int(offset)));
        let sql = format!(
            "SELECT {} FROM questions {} ORDER BY id LIMIT ? OFFSET ?",
            QUESTION_COLUMNS, clause
        );

        let mut stmt = self.conn.prepare(&sql).map_err(|e| store_failure(op, e))?;
        let questions = stmt
            .query_map(params_from_iter(values.iter()), row_to_question)
            .map_err(|e| store_failure(op, e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| store_failure(op, e))?;
        Ok(questions)
    }

    fn question_ids(&self, filter: &QuestionFilter) -> Result<Vec<QuestionId>> {
        let op = "question_ids";
        let (clause, values) = where_clause(filter);
        let sql = format!("SELECT id FROM questions {} ORDER BY id", clause);

        let mut stmt = self.conn.prepare(&sql).map_err(|e| store_failure(op, e))?;
        let ids = stmt
            .query_map(params_from_iter(values.iter()), |row| row.get(0))
            .map_err(|e| store_failure(op, e))?
            .collect::<rusqlite::Result<Vec<QuestionId>>>()
            .map_err(|e| store_failure(op, e))?;
        Ok(ids)
    }

    fn get_question(&self, id: QuestionId) -> Result<Option<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS);
        self.conn
            .query_row(&sql, [id], row_to_question)
            .optional()
            .map_err(|e| store_failure("get_question", e))
    }

    fn insert_question(&mut self, question: &NewQuestion) -> Result<Question> {
        let op = "insert_question";
        let tx = self.conn.transaction().map_err(|e| store_failure(op, e))?;
        let id = insert_question_on(&tx, question).map_err(|e| store_failure(op, e))?;
        tx.commit().map_err(|e| store_failure(op, e))?;
        Ok(question.clone().into_question(id))
    }

    fn delete_question(&mut self, id: QuestionId) -> Result<bool> {
        let op = "delete_question";
        let tx = self.conn.transaction().map_err(|e| store_failure(op, e))?;
        let removed = tx
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .map_err(|e| store_failure(op, e))?;
        tx.commit().map_err(|e| store_failure(op, e))?;
        Ok(removed > 0)
    }
}
