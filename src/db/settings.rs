use crate::db::{DbPool, lock_conn};
use crate::errors::Result;
use crate::models::{Currency, Theme};
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

const CURRENCY_KEY: &str = "currency";
const THEME_KEY: &str = "theme";

/// Retrieves a raw value from the key-value `settings` table.
///
/// Returns `Ok(None)` if the key has never been written.
#[instrument(skip(pool))]
pub async fn get_setting_value(pool: &DbPool, key: &str) -> Result<Option<String>> {
    let conn = lock_conn(pool)?;
    let mut stmt = conn.prepare_cached("SELECT value FROM settings WHERE key = ?1")?;
    let value: Option<String> = stmt.query_row(params![key], |row| row.get(0)).optional()?;
    debug!("Setting '{}': {:?}", key, value);
    Ok(value)
}

/// Sets or replaces a value in the key-value `settings` table (UPSERT).
///
/// The value is replaced wholesale; there is no partial merge.
#[instrument(skip(pool, value))]
pub async fn set_setting_value(pool: &DbPool, key: &str, value: &str) -> Result<()> {
    let conn = lock_conn(pool)?;
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    info!("Set setting: {} = {}", key, value);
    Ok(())
}

// A missing key yields the default; so does a value that fails to decode.
// A corrupted row must never surface a decode fault to a screen.
fn decode_or_default<T: DeserializeOwned + Default>(key: &str, stored: Option<String>) -> T {
    match stored {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(
                "Malformed persisted value for '{}' ({}); falling back to default",
                key, e
            );
            T::default()
        }),
        None => T::default(),
    }
}

fn encode<T: Serialize>(value: &T) -> String {
    // Serializing Currency/Theme cannot fail; keep the call sites tidy.
    serde_json::to_string(value).unwrap_or_default()
}

/// Returns the stored currency, or the default if none was ever set.
#[instrument(skip(pool))]
pub async fn get_currency(pool: &DbPool) -> Result<Currency> {
    let stored = get_setting_value(pool, CURRENCY_KEY).await?;
    Ok(decode_or_default(CURRENCY_KEY, stored))
}

/// Persists the currency. Later reads, including from a freshly opened
/// store on the same file, observe the new value.
#[instrument(skip(pool, currency))]
pub async fn set_currency(pool: &DbPool, currency: &Currency) -> Result<()> {
    set_setting_value(pool, CURRENCY_KEY, &encode(currency)).await
}

/// Returns the stored theme, or the default (dark mode off) if none was set.
#[instrument(skip(pool))]
pub async fn get_theme(pool: &DbPool) -> Result<Theme> {
    let stored = get_setting_value(pool, THEME_KEY).await?;
    Ok(decode_or_default(THEME_KEY, stored))
}

/// Persists the theme, replacing the previous value wholesale.
#[instrument(skip(pool, theme))]
pub async fn set_theme(pool: &DbPool, theme: &Theme) -> Result<()> {
    set_setting_value(pool, THEME_KEY, &encode(theme)).await
}
