//! Application configuration.
//!
//! The only runtime setting is the database path, read from the
//! `DATABASE_PATH` environment variable (a `.env` file is honored via
//! `dotenvy` in `main`). Everything else - category catalog, currency
//! catalog, defaults - is compiled in.

use crate::errors::{Error, Result};
use std::env::VarError;
use tracing::debug;

/// Default database location when `DATABASE_PATH` is not set.
pub const DEFAULT_DATABASE_PATH: &str = "data/moneybook.sqlite";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Filesystem path of the SQLite database file.
    pub database_path: String,
}

/// Loads the application configuration from the environment.
///
/// Falls back to [`DEFAULT_DATABASE_PATH`] when `DATABASE_PATH` is unset.
///
/// # Errors
///
/// Returns `Error::Config` if `DATABASE_PATH` is set but not valid UTF-8.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_path = database_path_from(std::env::var("DATABASE_PATH"))?;
    debug!("Resolved database path: {}", database_path);
    Ok(AppConfig { database_path })
}

fn database_path_from(var: std::result::Result<String, VarError>) -> Result<String> {
    match var {
        Ok(path) => Ok(path),
        Err(VarError::NotPresent) => Ok(DEFAULT_DATABASE_PATH.to_string()),
        Err(VarError::NotUnicode(_)) => Err(Error::Config(
            "DATABASE_PATH is set but is not valid UTF-8".to_string(),
        )),
    }
}
