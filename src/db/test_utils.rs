use crate::db::{DbPool, schema};
use crate::errors::{Error, Result};
use crate::models::{NewTransaction, TransactionKind};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init(); // try_init so repeated calls across tests don't panic
}

// Fresh in-memory database with the schema applied, one per test.
pub(crate) async fn setup_test_db() -> Result<DbPool> {
    let conn = Connection::open_in_memory()
        .map_err(|e| Error::Storage(format!("Test DB: Failed to open in-memory: {}", e)))?;
    schema::create_tables(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

// A valid insert payload; icon/color mimic the catalog snapshot the
// add-transaction screen would take.
pub(crate) fn sample_transaction(
    category: &str,
    amount: f64,
    kind: TransactionKind,
) -> NewTransaction {
    NewTransaction {
        category: category.to_string(),
        icon: "utensils".to_string(),
        color: "#FF6347".to_string(),
        date: "2024-01-01".to_string(),
        amount,
        kind,
    }
}
