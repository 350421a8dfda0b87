use serde::{Deserialize, Serialize};

/// Direction of a transaction: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received (salary, gift, ...).
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// The string stored in the `type` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parses the stored column value back into a kind.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// A single income or expense record.
///
/// `icon` and `color` are a snapshot of the category's display attributes at
/// the time the record was saved. They are deliberately not re-derived from
/// the category catalog, so historical records keep their original look even
/// if the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Primary key, assigned on insert, stable across updates.
    pub id: i64,
    /// Category name from the compiled-in catalog.
    pub category: String,
    /// Icon name snapshot taken from the category at save time.
    pub icon: String,
    /// Color snapshot taken from the category at save time.
    pub color: String,
    /// Calendar date string, no time component.
    pub date: String,
    /// Positive amount; direction is carried by `kind`.
    pub amount: f64,
    /// Income or expense.
    pub kind: TransactionKind,
}

/// A [`Transaction`] minus its id - the payload for an insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Category name from the compiled-in catalog.
    pub category: String,
    /// Icon snapshot for the chosen category.
    pub icon: String,
    /// Color snapshot for the chosen category.
    pub color: String,
    /// Calendar date string, no time component.
    pub date: String,
    /// Positive amount.
    pub amount: f64,
    /// Income or expense.
    pub kind: TransactionKind,
}

/// A savings goal ("money box"). Independent of transactions - no foreign
/// keys in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyBox {
    /// Primary key, assigned on insert, stable across updates.
    pub id: i64,
    /// User-facing label.
    pub name: String,
    /// Saved or targeted amount, positive.
    pub amount: f64,
    /// Optional display icon.
    pub icon: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
}

/// A [`MoneyBox`] minus its id - the payload for an insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMoneyBox {
    /// User-facing label.
    pub name: String,
    /// Saved or targeted amount, positive.
    pub amount: f64,
    /// Optional display icon.
    pub icon: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
}

/// The currency the user wants amounts displayed in. Picked from
/// [`crate::catalog::CURRENCIES`]; no conversion is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Full currency name, e.g. "United States Dollar".
    pub name: String,
    /// Display symbol, e.g. "$".
    pub symbol: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            name: "United States Dollar".to_string(),
            symbol: "$".to_string(),
        }
    }
}

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Theme {
    /// Whether dark mode is enabled. Defaults to off.
    pub darkmode: bool,
}
