//! Trivia CLI
//!
//! Command-line interface for the trivia service

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::Settings;
use trivia_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia question service", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./trivia.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database path, overriding the settings
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Logging profile, overriding the settings
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply migrations and serve the HTTP API
    Serve(commands::serve::ServeArgs),
    /// Apply pending schema migrations
    Migrate,
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(db) = &cli.db {
        settings.database.path = db.clone();
    }
    if let Some(profile) = cli.log_profile {
        settings.logging.profile = profile;
    }
    Ok(settings)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings(&cli)?;
    logging_facility::init(settings.logging.profile);

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, settings),
        Commands::Migrate => commands::migrate::execute(&settings),
        Commands::Seed(args) => commands::seed::execute(args, &settings),
    }
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
