use thiserror::Error;

/// Unified error type for every ledger and settings operation.
///
/// The façade never panics and never fails synchronously; all of these come
/// back through the returned `Result`. UI code is expected to distinguish
/// `Validation` (bad user input) from `Storage` (retry-capable persistence
/// fault) and from `NotFound` (stale reference to a removed record).
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input to an insert or update (non-positive amount,
    /// missing date or category, empty name).
    #[error("Invalid input: {0}")]
    Validation(String),

    /// An update referenced a record that does not exist. Deletes of a
    /// missing record are a silent no-op and never produce this.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The persistence layer failed (SQLite error, poisoned lock).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error (bad environment, unusable database path).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error outside of SQLite itself.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::Storage(value.to_string())
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
