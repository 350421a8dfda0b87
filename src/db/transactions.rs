use crate::db::{DbPool, lock_conn};
use crate::errors::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionKind};
use rusqlite::params;
use tracing::{debug, info, instrument};

fn row_to_transaction(row: &rusqlite::Row<'_>) -> rusqlite::Result<Transaction> {
    let kind_str: String = row.get(6)?;
    let kind = TransactionKind::parse(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            6,
            rusqlite::types::Type::Text,
            format!("unknown transaction type '{}'", kind_str).into(),
        )
    })?;
    Ok(Transaction {
        id: row.get(0)?,
        category: row.get(1)?,
        icon: row.get(2)?,
        color: row.get(3)?,
        date: row.get(4)?,
        amount: row.get(5)?,
        kind,
    })
}

// Shared by insert and update; both take the full field set.
fn validate_fields(category: &str, date: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation(
            "amount must be a positive number".to_string(),
        ));
    }
    if date.trim().is_empty() {
        return Err(Error::Validation("date is required".to_string()));
    }
    if category.trim().is_empty() {
        return Err(Error::Validation("category is required".to_string()));
    }
    Ok(())
}

/// Inserts a new transaction and returns its freshly assigned id.
///
/// # Errors
///
/// Returns `Error::Validation` if the amount is not a positive finite number
/// or the date or category is empty, and `Error::Storage` on a persistence
/// failure.
#[instrument(skip(pool, new))]
pub async fn create_transaction(pool: &DbPool, new: &NewTransaction) -> Result<i64> {
    validate_fields(&new.category, &new.date, new.amount)?;

    let conn = lock_conn(pool)?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO transactions (category, icon, color, transaction_date, amount, type)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    let transaction_id = stmt.insert(params![
        new.category,
        new.icon,
        new.color,
        new.date,
        new.amount,
        new.kind.as_str(),
    ])?;
    info!(
        "Created transaction_id {}: category='{}', type='{}', amount={}",
        transaction_id,
        new.category,
        new.kind.as_str(),
        new.amount
    );
    Ok(transaction_id)
}

/// Replaces the stored record matching `tx.id` with `tx`.
///
/// # Errors
///
/// Returns `Error::Validation` on malformed fields, `Error::NotFound` if no
/// record has that id, and `Error::Storage` on a persistence failure.
#[instrument(skip(pool, tx))]
pub async fn update_transaction(pool: &DbPool, tx: &Transaction) -> Result<()> {
    validate_fields(&tx.category, &tx.date, tx.amount)?;

    let conn = lock_conn(pool)?;
    let rows_updated = conn.execute(
        "UPDATE transactions
         SET category = ?1, icon = ?2, color = ?3, transaction_date = ?4, amount = ?5, type = ?6
         WHERE id = ?7",
        params![
            tx.category,
            tx.icon,
            tx.color,
            tx.date,
            tx.amount,
            tx.kind.as_str(),
            tx.id,
        ],
    )?;
    if rows_updated == 0 {
        return Err(Error::NotFound(format!("transaction {}", tx.id)));
    }
    info!("Updated transaction_id {}", tx.id);
    Ok(())
}

/// Deletes the transaction with the given id.
///
/// Deleting an id that does not exist is a no-op, not an error: the UI always
/// refreshes after a delete regardless of prior state.
#[instrument(skip(pool))]
pub async fn delete_transaction(pool: &DbPool, id: i64) -> Result<()> {
    let conn = lock_conn(pool)?;
    let rows_deleted = conn.execute("DELETE FROM transactions WHERE id = ?1", params![id])?;
    if rows_deleted == 0 {
        debug!("Delete of transaction_id {} matched no rows", id);
    } else {
        info!("Deleted transaction_id {}", id);
    }
    Ok(())
}

/// Returns all transactions in insertion order (id ascending).
#[instrument(skip(pool))]
pub async fn get_transactions(pool: &DbPool) -> Result<Vec<Transaction>> {
    let conn = lock_conn(pool)?;
    let mut stmt = conn.prepare_cached(
        "SELECT id, category, icon, color, transaction_date, amount, type
         FROM transactions ORDER BY id ASC",
    )?;
    let transactions = stmt
        .query_map([], row_to_transaction)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    debug!("Fetched {} transactions", transactions.len());
    Ok(transactions)
}

/// Returns the `limit` most recently inserted transactions, oldest of those
/// first - i.e. the tail of [`get_transactions`] in the same order.
#[instrument(skip(pool))]
pub async fn get_recent_transactions(pool: &DbPool, limit: usize) -> Result<Vec<Transaction>> {
    let conn = lock_conn(pool)?;
    let mut stmt = conn.prepare_cached(
        "SELECT id, category, icon, color, transaction_date, amount, type
         FROM transactions ORDER BY id DESC LIMIT ?1",
    )?;
    let mut transactions = stmt
        .query_map(params![limit as i64], row_to_transaction)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    transactions.reverse();
    Ok(transactions)
}

/// Sum of all income amounts. Recomputed from the table on every call;
/// an empty ledger yields 0.0.
#[instrument(skip(pool))]
pub async fn get_total_income(pool: &DbPool) -> Result<f64> {
    sum_by_kind(pool, TransactionKind::Income)
}

/// Sum of all expense amounts. Recomputed from the table on every call;
/// an empty ledger yields 0.0.
#[instrument(skip(pool))]
pub async fn get_total_expense(pool: &DbPool) -> Result<f64> {
    sum_by_kind(pool, TransactionKind::Expense)
}

fn sum_by_kind(pool: &DbPool, kind: TransactionKind) -> Result<f64> {
    let conn = lock_conn(pool)?;
    let mut stmt = conn
        .prepare_cached("SELECT COALESCE(SUM(amount), 0.0) FROM transactions WHERE type = ?1")?;
    let total: f64 = stmt.query_row(params![kind.as_str()], |row| row.get(0))?;
    debug!("Total for type '{}': {:.2}", kind.as_str(), total);
    Ok(total)
}
