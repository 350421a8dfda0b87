//! The async query façade every screen talks to.
//!
//! Storage is an I/O boundary, so every read and write is an `async fn`
//! returning a [`Result`]; nothing here fails synchronously or panics.
//! Ordering contract: each call is individually atomic and read-your-writes
//! holds once a mutating call's future has resolved, but two independently
//! issued calls are not ordered relative to each other. A caller that needs
//! a read to observe a prior write must await the write first - the
//! delete-then-refresh pattern is `delete(..).await?` followed by the
//! refetch, never fire-and-forget. A screen that goes away before a future
//! resolves simply drops it and discards the result.

use crate::db::{self, DbPool};
use crate::errors::Result;
use crate::models::{Currency, MoneyBox, NewMoneyBox, NewTransaction, Theme, Transaction};
use tracing::instrument;

/// Derived totals over the current transaction ledger, as the home screen's
/// balance card consumes them. Recomputed from the table on every call,
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Sum of all income amounts.
    pub incomes: f64,
    /// Sum of all expense amounts.
    pub expenses: f64,
    /// `incomes - expenses`.
    pub balance: f64,
}

/// Handle to the local ledger database.
///
/// Cheap to clone; all clones share the same underlying connection.
#[derive(Debug, Clone)]
pub struct Ledger {
    pool: DbPool,
}

impl Ledger {
    /// Opens (or creates) the ledger database at `db_path`.
    pub async fn open(db_path: &str) -> Result<Self> {
        let pool = db::init_db(db_path).await?;
        Ok(Self { pool })
    }

    #[cfg(test)]
    pub(crate) fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    // --- Transaction ledger ---

    /// All transactions in insertion order.
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        db::get_transactions(&self.pool).await
    }

    /// The `limit` most recently inserted transactions, oldest of those first.
    pub async fn recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>> {
        db::get_recent_transactions(&self.pool, limit).await
    }

    /// Inserts a transaction and returns its new id.
    pub async fn add_transaction(&self, new: &NewTransaction) -> Result<i64> {
        db::create_transaction(&self.pool, new).await
    }

    /// Replaces the stored transaction matching `tx.id`.
    pub async fn update_transaction(&self, tx: &Transaction) -> Result<()> {
        db::update_transaction(&self.pool, tx).await
    }

    /// Deletes a transaction; a missing id is a silent no-op.
    pub async fn delete_transaction(&self, id: i64) -> Result<()> {
        db::delete_transaction(&self.pool, id).await
    }

    /// Sum of all income amounts; 0.0 on an empty ledger.
    pub async fn total_income(&self) -> Result<f64> {
        db::get_total_income(&self.pool).await
    }

    /// Sum of all expense amounts; 0.0 on an empty ledger.
    pub async fn total_expense(&self) -> Result<f64> {
        db::get_total_expense(&self.pool).await
    }

    /// Both totals plus the derived balance, in one call.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<Summary> {
        let incomes = self.total_income().await?;
        let expenses = self.total_expense().await?;
        Ok(Summary {
            incomes,
            expenses,
            balance: incomes - expenses,
        })
    }

    // --- Money box ledger ---

    /// All money boxes in insertion order.
    pub async fn money_boxes(&self) -> Result<Vec<MoneyBox>> {
        db::get_money_boxes(&self.pool).await
    }

    /// Inserts a money box and returns its new id.
    pub async fn add_money_box(&self, new: &NewMoneyBox) -> Result<i64> {
        db::create_money_box(&self.pool, new).await
    }

    /// Replaces the stored money box matching `money_box.id`.
    pub async fn update_money_box(&self, money_box: &MoneyBox) -> Result<()> {
        db::update_money_box(&self.pool, money_box).await
    }

    /// Deletes a money box; a missing id is a silent no-op.
    pub async fn delete_money_box(&self, id: i64) -> Result<()> {
        db::delete_money_box(&self.pool, id).await
    }

    // --- Settings ---

    /// The stored display currency, or the default if never set.
    pub async fn currency(&self) -> Result<Currency> {
        db::get_currency(&self.pool).await
    }

    /// Persists the display currency, replacing the old value wholesale.
    pub async fn set_currency(&self, currency: &Currency) -> Result<()> {
        db::set_currency(&self.pool, currency).await
    }

    /// The stored theme, or the default (dark mode off) if never set.
    pub async fn theme(&self) -> Result<Theme> {
        db::get_theme(&self.pool).await
    }

    /// Persists the theme, replacing the old value wholesale.
    pub async fn set_theme(&self, theme: &Theme) -> Result<()> {
        db::set_theme(&self.pool, theme).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::db::test_utils::{init_test_tracing, setup_test_db};
    use crate::errors::Result;
    use crate::models::TransactionKind;

    fn expense(category: &str, amount: f64, date: &str) -> NewTransaction {
        let cat = catalog::category_by_name(category).expect("catalog category");
        NewTransaction {
            category: cat.name.to_string(),
            icon: cat.icon.to_string(),
            color: cat.color.to_string(),
            date: date.to_string(),
            amount,
            kind: TransactionKind::Expense,
        }
    }

    async fn test_ledger() -> Result<Ledger> {
        init_test_tracing();
        Ok(Ledger::from_pool(setup_test_db().await?))
    }

    #[tokio::test]
    async fn test_delete_then_refresh_observes_the_delete() -> Result<()> {
        let ledger = test_ledger().await?;

        let id = ledger
            .add_transaction(&expense("Food", 25.50, "2024-01-01"))
            .await?;
        ledger
            .add_transaction(&expense("Transport", 3.20, "2024-01-02"))
            .await?;

        // The home screen pattern: await the delete, then refetch everything.
        ledger.delete_transaction(id).await?;
        let transactions = ledger.transactions().await?;
        let summary = ledger.summary().await?;

        assert!(transactions.iter().all(|t| t.id != id));
        assert_eq!(transactions.len(), 1);
        assert_eq!(summary.expenses, 3.20);
        assert_eq!(summary.balance, -3.20);
        Ok(())
    }

    #[tokio::test]
    async fn test_summary_matches_totals() -> Result<()> {
        let ledger = test_ledger().await?;

        let empty = ledger.summary().await?;
        assert_eq!(empty.incomes, 0.0);
        assert_eq!(empty.expenses, 0.0);
        assert_eq!(empty.balance, 0.0);

        ledger
            .add_transaction(&expense("Food", 25.50, "2024-01-01"))
            .await?;
        let salary_cat = catalog::category_by_name("Salary").expect("catalog category");
        ledger
            .add_transaction(&NewTransaction {
                category: salary_cat.name.to_string(),
                icon: salary_cat.icon.to_string(),
                color: salary_cat.color.to_string(),
                date: "2024-01-01".to_string(),
                amount: 1000.0,
                kind: TransactionKind::Income,
            })
            .await?;

        let summary = ledger.summary().await?;
        assert_eq!(summary.incomes, 1000.0);
        assert_eq!(summary.expenses, 25.50);
        assert_eq!(summary.balance, 974.50);
        Ok(())
    }

    #[tokio::test]
    async fn test_icon_and_color_are_a_snapshot() -> Result<()> {
        let ledger = test_ledger().await?;

        // A record saved with attributes that no longer match the catalog
        // keeps them verbatim; nothing re-derives from the catalog on read.
        let id = ledger
            .add_transaction(&NewTransaction {
                category: "Food".to_string(),
                icon: "old-icon".to_string(),
                color: "#123456".to_string(),
                date: "2020-06-01".to_string(),
                amount: 5.0,
                kind: TransactionKind::Expense,
            })
            .await?;

        let stored = ledger.transactions().await?.remove(0);
        assert_eq!(stored.id, id);
        assert_eq!(stored.icon, "old-icon");
        assert_eq!(stored.color, "#123456");
        Ok(())
    }

    #[tokio::test]
    async fn test_settings_survive_reopening_the_store() -> Result<()> {
        init_test_tracing();
        let dir = tempfile::tempdir()?;
        let db_path = dir.path().join("moneybook.sqlite");
        let db_path = db_path.to_str().expect("utf-8 temp path");

        let naira = Currency {
            name: "Nigerian Naira".to_string(),
            symbol: "\u{20a6}".to_string(),
        };
        {
            let ledger = Ledger::open(db_path).await?;
            ledger.set_currency(&naira).await?;
            ledger.set_theme(&Theme { darkmode: true }).await?;
        }

        // A fresh process instantiation of the store sees the same values.
        let reopened = Ledger::open(db_path).await?;
        assert_eq!(reopened.currency().await?, naira);
        assert!(reopened.theme().await?.darkmode);
        Ok(())
    }

    #[tokio::test]
    async fn test_money_box_crud_through_the_facade() -> Result<()> {
        let ledger = test_ledger().await?;

        let id = ledger
            .add_money_box(&NewMoneyBox {
                name: "Vacation".to_string(),
                amount: 500.0,
                icon: Some("plane".to_string()),
                color: Some("#00CED1".to_string()),
            })
            .await?;

        let mut stored = ledger.money_boxes().await?.remove(0);
        assert_eq!(stored.id, id);
        stored.amount = 650.0;
        ledger.update_money_box(&stored).await?;
        assert_eq!(ledger.money_boxes().await?[0].amount, 650.0);

        ledger.delete_money_box(id).await?;
        assert!(ledger.money_boxes().await?.is_empty());
        Ok(())
    }
}
