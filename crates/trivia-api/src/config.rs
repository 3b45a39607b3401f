//! Layered service settings
//!
//! Sources, later ones winning: built-in defaults, an optional TOML file
//! (`trivia.toml` in the working directory, or an explicit path), then
//! `TRIVIA__SECTION__KEY` environment variables. Command line overrides are
//! applied by the binary on top of the loaded value.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use trivia_core::logging_facility::Profile;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_PATH: &str = "trivia.db";

const DEFAULT_CONFIG_NAME: &str = "trivia";
const ENV_PREFIX: &str = "TRIVIA";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    pub profile: Profile,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseSettings {
                path: PathBuf::from(DEFAULT_DB_PATH),
            },
            logging: LoggingSettings {
                profile: Profile::Development,
            },
        }
    }
}

impl Settings {
    /// Load settings from every source
    ///
    /// With `path` set the file must exist; otherwise `trivia.toml` is read
    /// if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unreadable or malformed file, or for a
    /// value of the wrong type in any source.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("database.path", DEFAULT_DB_PATH)?
            .set_default("logging.profile", "development")?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
