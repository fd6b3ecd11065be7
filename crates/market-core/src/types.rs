use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV observation. Sequences are ordered by timestamp, ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Balance-sheet line items for one reporting period.
///
/// Providers routinely omit items, so every field is optional. `None`
/// means "not available" and is never coerced to zero; downstream ratio
/// math treats an absent field and a zero field differently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheetSnapshot {
    pub total_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub stockholders_equity: Option<f64>,
    pub current_assets: Option<f64>,
    pub current_liabilities: Option<f64>,
    pub total_debt: Option<f64>,
    pub cash_and_equivalents: Option<f64>,
    pub inventory: Option<f64>,
}

impl BalanceSheetSnapshot {
    /// Build a snapshot from a provider's line-item table.
    ///
    /// Keys follow the naming market-data feeds use for balance-sheet
    /// rows ("Total Assets", "Current Liabilities", ...). Absent keys
    /// leave their field `None`; unrecognized keys are ignored.
    pub fn from_line_items(items: &HashMap<String, f64>) -> Self {
        Self {
            total_assets: items.get("Total Assets").copied(),
            total_liabilities: items.get("Total Liabilities Net Minority Interest").copied(),
            stockholders_equity: items.get("Stockholders Equity").copied(),
            current_assets: items.get("Current Assets").copied(),
            current_liabilities: items.get("Current Liabilities").copied(),
            total_debt: items.get("Total Debt").copied(),
            cash_and_equivalents: items.get("Cash And Cash Equivalents").copied(),
            inventory: items.get("Inventory").copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_items_partial_table() {
        let mut items = HashMap::new();
        items.insert("Total Assets".to_string(), 5000.0);
        items.insert("Current Liabilities".to_string(), 800.0);
        items.insert("Stockholders Equity".to_string(), 2100.0);
        items.insert("Ordinary Shares Number".to_string(), 350.0); // not a tracked item

        let snapshot = BalanceSheetSnapshot::from_line_items(&items);

        assert_eq!(snapshot.total_assets, Some(5000.0));
        assert_eq!(snapshot.current_liabilities, Some(800.0));
        assert_eq!(snapshot.stockholders_equity, Some(2100.0));
        assert_eq!(snapshot.total_liabilities, None);
        assert_eq!(snapshot.inventory, None);
        assert_eq!(snapshot.total_debt, None);
    }

    #[test]
    fn test_from_line_items_empty_table() {
        let snapshot = BalanceSheetSnapshot::from_line_items(&HashMap::new());

        assert_eq!(snapshot.total_assets, None);
        assert_eq!(snapshot.cash_and_equivalents, None);
    }
}
