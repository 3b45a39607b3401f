//! Seed import system
//!
//! Provides:
//! - Seed file schema (`format`)
//! - YAML parser with validation (`parser`)
//! - Importer writing one transaction per file (`importer`)

pub mod format;
pub mod importer;
pub mod parser;

pub use format::{SeedCategory, SeedFile};
pub use importer::{import_seed, import_seed_path, import_seed_str, seed_files_in, ImportReport};
pub use parser::{parse_seed_file, parse_seed_str, ParsedSeed};
