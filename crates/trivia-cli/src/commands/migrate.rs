//! Migration command
//!
//! Usage: trivia migrate [--db <PATH>]

use trivia_api::Settings;

pub fn execute(settings: &Settings) -> anyhow::Result<()> {
    let store = super::open_migrated(settings)?;
    let applied = trivia_store::migrations::applied_migrations(store.connection())?;
    println!(
        "Database {} is at schema {} ({} migrations applied)",
        settings.database.path.display(),
        applied.last().map(String::as_str).unwrap_or("none"),
        applied.len()
    );
    Ok(())
}
