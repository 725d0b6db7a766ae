//! Startup configuration. Everything has a default under the home data
//! directory; environment variables only override.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::db::{data_dir, default_db_path};

pub const DB_PATH_VAR: &str = "FRUIT_LIST_DB";
pub const LOG_DIR_VAR: &str = "FRUIT_LIST_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "FRUIT_LIST_LOG";

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_DIR_NAME: &str = "logs";
const PLAIN_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration through `lookup`, which returns the raw value
    /// of a variable if set. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = match read(DB_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => default_db_path().context("failed to resolve default database path")?,
        };

        let log_dir = match read(LOG_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => data_dir()
                .context("failed to resolve default log directory")?
                .join(LOG_DIR_NAME),
        };

        let log_level = match read(LOG_LEVEL_VAR) {
            Some(level) => normalize_level(&level)?,
            None => DEFAULT_LOG_LEVEL.to_string(),
        };

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }
}

/// Plain levels are lower-cased and checked; anything that looks like a full
/// module spec (`foo=debug,info`) is handed to the logger untouched.
fn normalize_level(raw: &str) -> Result<String> {
    if raw.contains('=') || raw.contains(',') {
        return Ok(raw.to_string());
    }
    let level = raw.to_ascii_lowercase();
    if PLAIN_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(anyhow!(
            "unsupported log level `{raw}` in {LOG_LEVEL_VAR}; expected one of {}",
            PLAIN_LEVELS.join("|")
        ))
    }
}
