//! Balance-sheet ratio derivation for a single reporting period.

use market_core::BalanceSheetSnapshot;
use serde::{Deserialize, Serialize};

/// Current ratio above this reads as comfortable short-term liquidity.
pub const CURRENT_RATIO_HEALTHY: f64 = 1.5;

/// Quick ratio above this covers near-term liabilities without selling
/// inventory.
pub const QUICK_RATIO_HEALTHY: f64 = 1.0;

/// Debt-to-equity below this reads as a conservative capital structure.
pub const DEBT_TO_EQUITY_CONSERVATIVE: f64 = 1.0;

/// Rule-of-thumb verdict attached to a single ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioHealth {
    Good,
    Weak,
}

/// Ratios derived from one balance-sheet snapshot.
///
/// Every field is independently `None` when its inputs are missing or a
/// denominator is zero; one absent line item never blocks the other
/// ratios and is never coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetMetrics {
    /// Current assets minus current liabilities.
    pub working_capital: Option<f64>,
    /// Current assets over current liabilities.
    pub current_ratio: Option<f64>,
    /// Current assets excluding inventory, over current liabilities.
    pub quick_ratio: Option<f64>,
    /// Total debt over stockholders' equity.
    pub debt_to_equity: Option<f64>,
}

impl BalanceSheetMetrics {
    /// Derive every ratio the snapshot supports. Infallible: gaps in the
    /// snapshot surface as `None` fields, not errors.
    pub fn from_snapshot(snapshot: &BalanceSheetSnapshot) -> Self {
        Self {
            working_capital: working_capital(snapshot),
            current_ratio: current_ratio(snapshot),
            quick_ratio: quick_ratio(snapshot),
            debt_to_equity: debt_to_equity(snapshot),
        }
    }

    /// Liquidity verdict on the current ratio.
    pub fn current_ratio_health(&self) -> Option<RatioHealth> {
        self.current_ratio.map(|ratio| {
            if ratio > CURRENT_RATIO_HEALTHY {
                RatioHealth::Good
            } else {
                RatioHealth::Weak
            }
        })
    }

    /// Liquidity verdict on the quick ratio.
    pub fn quick_ratio_health(&self) -> Option<RatioHealth> {
        self.quick_ratio.map(|ratio| {
            if ratio > QUICK_RATIO_HEALTHY {
                RatioHealth::Good
            } else {
                RatioHealth::Weak
            }
        })
    }

    /// Leverage verdict on debt-to-equity.
    pub fn debt_to_equity_health(&self) -> Option<RatioHealth> {
        self.debt_to_equity.map(|ratio| {
            if ratio < DEBT_TO_EQUITY_CONSERVATIVE {
                RatioHealth::Good
            } else {
                RatioHealth::Weak
            }
        })
    }
}

fn working_capital(snapshot: &BalanceSheetSnapshot) -> Option<f64> {
    match (snapshot.current_assets, snapshot.current_liabilities) {
        (Some(assets), Some(liabilities)) => Some(assets - liabilities),
        _ => None,
    }
}

fn current_ratio(snapshot: &BalanceSheetSnapshot) -> Option<f64> {
    match (snapshot.current_assets, snapshot.current_liabilities) {
        (Some(assets), Some(liabilities)) if liabilities != 0.0 => Some(assets / liabilities),
        _ => None,
    }
}

fn quick_ratio(snapshot: &BalanceSheetSnapshot) -> Option<f64> {
    match (
        snapshot.current_assets,
        snapshot.inventory,
        snapshot.current_liabilities,
    ) {
        (Some(assets), Some(inventory), Some(liabilities)) if liabilities != 0.0 => {
            Some((assets - inventory) / liabilities)
        }
        _ => None,
    }
}

fn debt_to_equity(snapshot: &BalanceSheetSnapshot) -> Option<f64> {
    match (snapshot.total_debt, snapshot.stockholders_equity) {
        (Some(debt), Some(equity)) if equity != 0.0 => Some(debt / equity),
        _ => None,
    }
}
