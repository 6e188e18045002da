/// Runtime configuration
///
/// Values come from the process environment (`main` loads an optional
/// `.env` file first). Every setting has a default so the app runs out of the box.
use std::path::PathBuf;

/// Default PokéAPI collection endpoint
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2/pokemon";

/// Page size requested by the list screen (large enough to get everything)
pub const DEFAULT_LIST_LIMIT: u32 = 100_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    #[error("could not determine a data directory for the local database")]
    NoDataDir,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Collection endpoint, without trailing slash
    pub api_base: String,
    /// `limit` query parameter of the list request
    pub list_limit: u32,
    /// SQLite file for the local table
    pub db_path: PathBuf,
    /// Optional route to open instead of the list (e.g. `pokemon/25`)
    pub start_route: Option<String>,
}

impl Config {
    /// Read configuration from `POKEDEX_*` environment variables.
    ///
    /// `main` loads `.env` before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = match lookup("POKEDEX_API_BASE") {
            Some(value) => {
                let trimmed = value.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::Empty { key: "POKEDEX_API_BASE" });
                }
                trimmed.to_string()
            }
            None => DEFAULT_API_BASE.to_string(),
        };

        let list_limit = match lookup("POKEDEX_LIST_LIMIT") {
            Some(value) => {
                let parsed = value.trim().parse::<u32>();
                match parsed {
                    Ok(limit) if limit > 0 => limit,
                    _ => {
                        return Err(ConfigError::InvalidNumber {
                            key: "POKEDEX_LIST_LIMIT",
                            value,
                        })
                    }
                }
            }
            None => DEFAULT_LIST_LIMIT,
        };

        let db_path = match lookup("POKEDEX_DB_PATH") {
            Some(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
            Some(_) => return Err(ConfigError::Empty { key: "POKEDEX_DB_PATH" }),
            None => Self::default_db_path()?,
        };

        let start_route = lookup("POKEDEX_START_ROUTE")
            .map(|route| route.trim().to_string())
            .filter(|route| !route.is_empty());

        Ok(Config {
            api_base,
            list_limit,
            db_path,
            start_route,
        })
    }

    /// Get the path where the database should be stored
    ///
    /// - Linux: ~/.local/share/pokedex/pokedex.db
    /// - macOS: ~/Library/Application Support/pokedex/pokedex.db
    /// - Windows: %APPDATA%\pokedex\pokedex.db
    fn default_db_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::NoDataDir)?;

        path.push("pokedex");
        path.push("pokedex.db");
        Ok(path)
    }
}
