use crate::errors::{Error, Result};
use rusqlite::Connection;
use tracing::{debug, info, instrument};

#[instrument(skip(conn))]
pub(crate) fn create_tables(conn: &Connection) -> Result<()> {
    debug!("Executing CREATE TABLE statements if tables do not exist.");
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL,
            icon TEXT NOT NULL,
            color TEXT NOT NULL,
            transaction_date TEXT NOT NULL,
            amount REAL NOT NULL,
            type TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS moneybox (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            icon TEXT,
            color TEXT
        );

        CREATE TABLE IF NOT EXISTS settings ( key TEXT PRIMARY KEY, value TEXT );
        COMMIT;",
    )
    .map_err(|e| Error::Storage(format!("Failed to create tables: {}", e)))?;
    info!("Database tables ensured.");
    Ok(())
}
