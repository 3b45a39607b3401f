//! Shared handler state
//!
//! Holds no connection. Each request opens its own `SqliteStore` on a
//! blocking thread and drops it before the response is written, so
//! concurrent writers are serialized by SQLite alone.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use trivia_store::SqliteStore;

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct AppState {
    db_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Run `f` against a fresh store handle off the async runtime
    ///
    /// The caller's span is re-entered on the blocking thread so store
    /// logging keeps the request id.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` or opening the store fails with, or `Internal`
    /// if the blocking task panics.
    pub async fn with_store<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut SqliteStore) -> trivia_core::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.db_path);
        let span = tracing::Span::current();

        let joined = tokio::task::spawn_blocking(move || {
            span.in_scope(|| {
                let mut store = SqliteStore::open(path.as_path())?;
                f(&mut store)
            })
        })
        .await;

        match joined {
            Ok(result) => result.map_err(ApiError::from),
            Err(join_err) => Err(ApiError::Internal(join_err.to_string())),
        }
    }
}
