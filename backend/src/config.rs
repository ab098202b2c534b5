//! Server settings, read from the environment at startup.
//!
//! | variable          | default      |
//! |-------------------|--------------|
//! | `CRUD_HOST`       | `127.0.0.1`  |
//! | `CRUD_PORT`       | `8000`       |
//! | `CRUD_DATABASE`   | `db.sqlite3` |
//! | `CRUD_JSON_LIMIT` | `1048576`    |
//!
//! The log level is controlled separately through `RUST_LOG`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database file, created on first start.
    pub database: PathBuf,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Config {
            host: lookup("CRUD_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_number(&lookup, "CRUD_PORT", 8000)?,
            database: lookup("CRUD_DATABASE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("db.sqlite3")),
            json_limit: parse_number(&lookup, "CRUD_JSON_LIMIT", 1024 * 1024)?,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber { name, value }),
        None => Ok(default),
    }
}
