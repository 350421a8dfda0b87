//! Compiled-in catalogs offered by the UI pickers.
//!
//! Both catalogs are fixed at build time and not user-editable. The ledger
//! stores a denormalized copy of the chosen category's icon and color on each
//! transaction, so editing this file does not retroactively change how
//! historical records are displayed.

/// A selectable transaction category with its display attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Category name shown in the picker and stored on transactions.
    pub name: &'static str,
    /// FontAwesome icon name.
    pub icon: &'static str,
    /// Hex display color.
    pub color: &'static str,
}

/// A currency offered in the settings selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyEntry {
    /// Full currency name.
    pub name: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
}

/// The fixed category catalog. The first entry is the default selection in
/// the add-transaction screen.
pub const CATEGORIES: &[Category] = &[
    Category { name: "Food", icon: "utensils", color: "#FF6347" },
    Category { name: "Shopping", icon: "shopping-cart", color: "#4682B4" },
    Category { name: "Transport", icon: "bus", color: "#FFA500" },
    Category { name: "Home", icon: "home", color: "#8A2BE2" },
    Category { name: "Bills", icon: "file-invoice-dollar", color: "#DC143C" },
    Category { name: "Health", icon: "heartbeat", color: "#FF69B4" },
    Category { name: "Education", icon: "book", color: "#20B2AA" },
    Category { name: "Entertainment", icon: "gamepad", color: "#9370DB" },
    Category { name: "Travel", icon: "plane", color: "#00CED1" },
    Category { name: "Salary", icon: "money-bill-wave", color: "#2E8B57" },
    Category { name: "Gift", icon: "gift", color: "#FF8C00" },
    Category { name: "Other", icon: "ellipsis-h", color: "#808080" },
];

/// The fixed currency catalog.
pub const CURRENCIES: &[CurrencyEntry] = &[
    CurrencyEntry { name: "United States Dollar", symbol: "$" },
    CurrencyEntry { name: "Euro", symbol: "\u{20ac}" },
    CurrencyEntry { name: "British Pound", symbol: "\u{a3}" },
    CurrencyEntry { name: "Japanese Yen", symbol: "\u{a5}" },
    CurrencyEntry { name: "Indian Rupee", symbol: "\u{20b9}" },
    CurrencyEntry { name: "Nigerian Naira", symbol: "\u{20a6}" },
    CurrencyEntry { name: "Brazilian Real", symbol: "R$" },
    CurrencyEntry { name: "Canadian Dollar", symbol: "CA$" },
    CurrencyEntry { name: "Australian Dollar", symbol: "A$" },
    CurrencyEntry { name: "Chinese Yuan", symbol: "CN\u{a5}" },
];

/// Looks up a category by name.
#[must_use]
pub fn category_by_name(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Looks up a currency by name.
#[must_use]
pub fn currency_by_name(name: &str) -> Option<&'static CurrencyEntry> {
    CURRENCIES.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_finds_known_name() {
        let food = category_by_name("Food").expect("Food should be in the catalog");
        assert_eq!(food.icon, "utensils");
        assert_eq!(food.color, "#FF6347");
    }

    #[test]
    fn category_lookup_misses_unknown_name() {
        assert!(category_by_name("NotACategory").is_none());
    }

    #[test]
    fn currency_lookup_finds_known_name() {
        let usd = currency_by_name("United States Dollar").expect("USD should be in the catalog");
        assert_eq!(usd.symbol, "$");
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate category name {}", a.name);
            }
        }
        for (i, a) in CURRENCIES.iter().enumerate() {
            for b in &CURRENCIES[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate currency name {}", a.name);
            }
        }
    }
}
