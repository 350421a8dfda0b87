use crate::db::{DbPool, lock_conn};
use crate::errors::{Error, Result};
use crate::models::{MoneyBox, NewMoneyBox};
use rusqlite::params;
use tracing::{debug, info, instrument};

fn row_to_money_box(row: &rusqlite::Row<'_>) -> rusqlite::Result<MoneyBox> {
    Ok(MoneyBox {
        id: row.get(0)?,
        name: row.get(1)?,
        amount: row.get(2)?,
        icon: row.get(3)?,
        color: row.get(4)?,
    })
}

fn validate_fields(name: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation(
            "amount must be a positive number".to_string(),
        ));
    }
    if name.trim().is_empty() {
        return Err(Error::Validation("name is required".to_string()));
    }
    Ok(())
}

/// Inserts a new money box and returns its freshly assigned id.
///
/// # Errors
///
/// Returns `Error::Validation` if the amount is not a positive finite number
/// or the name is empty, and `Error::Storage` on a persistence failure.
#[instrument(skip(pool, new))]
pub async fn create_money_box(pool: &DbPool, new: &NewMoneyBox) -> Result<i64> {
    validate_fields(&new.name, new.amount)?;

    let conn = lock_conn(pool)?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO moneybox (name, amount, icon, color) VALUES (?1, ?2, ?3, ?4)",
    )?;
    let box_id = stmt.insert(params![new.name, new.amount, new.icon, new.color])?;
    info!("Created moneybox_id {}: name='{}'", box_id, new.name);
    Ok(box_id)
}

/// Replaces the stored money box matching `money_box.id`.
///
/// # Errors
///
/// Returns `Error::Validation` on malformed fields, `Error::NotFound` if no
/// record has that id, and `Error::Storage` on a persistence failure.
#[instrument(skip(pool, money_box))]
pub async fn update_money_box(pool: &DbPool, money_box: &MoneyBox) -> Result<()> {
    validate_fields(&money_box.name, money_box.amount)?;

    let conn = lock_conn(pool)?;
    let rows_updated = conn.execute(
        "UPDATE moneybox SET name = ?1, amount = ?2, icon = ?3, color = ?4 WHERE id = ?5",
        params![
            money_box.name,
            money_box.amount,
            money_box.icon,
            money_box.color,
            money_box.id,
        ],
    )?;
    if rows_updated == 0 {
        return Err(Error::NotFound(format!("money box {}", money_box.id)));
    }
    info!("Updated moneybox_id {}", money_box.id);
    Ok(())
}

/// Deletes the money box with the given id. Missing ids are a no-op.
#[instrument(skip(pool))]
pub async fn delete_money_box(pool: &DbPool, id: i64) -> Result<()> {
    let conn = lock_conn(pool)?;
    let rows_deleted = conn.execute("DELETE FROM moneybox WHERE id = ?1", params![id])?;
    if rows_deleted == 0 {
        debug!("Delete of moneybox_id {} matched no rows", id);
    } else {
        info!("Deleted moneybox_id {}", id);
    }
    Ok(())
}

/// Returns all money boxes in insertion order (id ascending).
#[instrument(skip(pool))]
pub async fn get_money_boxes(pool: &DbPool) -> Result<Vec<MoneyBox>> {
    let conn = lock_conn(pool)?;
    let mut stmt = conn
        .prepare_cached("SELECT id, name, amount, icon, color FROM moneybox ORDER BY id ASC")?;
    let boxes = stmt
        .query_map([], row_to_money_box)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    debug!("Fetched {} money boxes", boxes.len());
    Ok(boxes)
}
