pub mod moneybox;
pub(crate) mod schema;
pub mod settings;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod transactions;

pub use moneybox::{create_money_box, delete_money_box, get_money_boxes, update_money_box};
pub use settings::{get_currency, get_theme, set_currency, set_theme};
pub use transactions::{
    create_transaction, delete_transaction, get_recent_transactions, get_total_expense,
    get_total_income, get_transactions, update_transaction,
};

use crate::errors::{Error, Result};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Shared handle to the single SQLite connection. Each operation locks the
/// connection for its full duration, so every call is individually atomic.
pub type DbPool = Arc<Mutex<Connection>>;

/// Opens (or creates) the database at `db_path` and ensures the schema.
#[instrument]
pub async fn init_db(db_path: &str) -> Result<DbPool> {
    debug!("Initializing database connection to: {}", db_path);
    let conn = Connection::open(db_path)
        .map_err(|e| Error::Storage(format!("Failed to open database at {}: {}", db_path, e)))?;

    info!("Database connection opened. Ensuring tables are created...");
    schema::create_tables(&conn)?;

    Ok(Arc::new(Mutex::new(conn)))
}

/// Locks the pool, mapping a poisoned lock to a storage error instead of
/// propagating the panic.
pub(crate) fn lock_conn(pool: &DbPool) -> Result<std::sync::MutexGuard<'_, Connection>> {
    pool.lock()
        .map_err(|_| Error::Storage("Failed to acquire DB lock".to_string()))
}
