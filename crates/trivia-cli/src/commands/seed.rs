//! Seed import command
//!
//! Usage: trivia seed import <PATH>

use std::path::PathBuf;

use clap::{Args, Subcommand};
use trivia_api::Settings;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file, or every seed file in a directory
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

pub fn execute(args: SeedArgs, settings: &Settings) -> anyhow::Result<()> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, settings),
    }
}

fn execute_import(args: ImportArgs, settings: &Settings) -> anyhow::Result<()> {
    let mut store = super::open_migrated(settings)?;

    // one transaction per file; earlier files stay committed on failure
    let reports = trivia_store::seed::import_seed_path(&args.path, store.connection_mut())?;
    if reports.is_empty() {
        println!("No seed files found in {}", args.path.display());
    }
    for report in reports {
        if report.skipped {
            println!("Skipped {} (already imported)", report.source);
        } else {
            println!(
                "Imported {}: {} categories, {} questions (digest: {})",
                report.source, report.categories, report.questions, report.digest
            );
        }
    }
    Ok(())
}
