pub mod migrate;
pub mod seed;
pub mod serve;

use anyhow::Context;
use trivia_api::Settings;
use trivia_store::SqliteStore;

/// Open the configured database and bring its schema up to date
fn open_migrated(settings: &Settings) -> anyhow::Result<SqliteStore> {
    let path = &settings.database.path;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut store = SqliteStore::open(path)
        .with_context(|| format!("failed to open database {}", path.display()))?;
    trivia_store::migrations::apply_migrations(store.connection_mut())
        .context("failed to apply migrations")?;
    Ok(store)
}
