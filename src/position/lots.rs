//! Purchase lot aggregation into a position

use serde::{Deserialize, Serialize};

/// A single purchase or sale transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    /// Transaction price per share
    pub price: f64,

    /// Number of shares
    pub quantity: u32,
}

impl Lot {
    pub fn new(price: f64, quantity: u32) -> Self {
        Self { price, quantity }
    }

    /// Total transaction amount
    pub fn amount(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Aggregated state of a position
///
/// Lot order is irrelevant to every field here; the position is a blended
/// average, not a lot ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionState {
    /// Sum of price x quantity across purchases
    pub total_cost: f64,

    /// Total share count; fractional when derived from an investment amount
    pub total_shares: f64,

    /// Blended average cost per share, 0 when the position is empty
    pub average_cost: f64,
}

impl PositionState {
    /// Aggregate a sequence of purchase lots
    pub fn from_lots(lots: &[Lot]) -> Self {
        let total_cost: f64 = lots.iter().map(Lot::amount).sum();
        let total_shares: f64 = lots.iter().map(|lot| lot.quantity as f64).sum();
        Self::from_totals(total_cost, total_shares)
    }

    /// Build from a single investment amount at a unit purchase price
    ///
    /// Shares come out fractional when the amount is not a whole multiple of
    /// the price. A non-positive price yields an empty position.
    pub fn from_investment(investment: f64, purchase_price: f64) -> Self {
        if purchase_price > 0.0 {
            Self::from_totals(investment, investment / purchase_price)
        } else {
            Self::from_totals(0.0, 0.0)
        }
    }

    fn from_totals(total_cost: f64, total_shares: f64) -> Self {
        let average_cost = if total_shares > 0.0 {
            total_cost / total_shares
        } else {
            0.0
        };
        Self {
            total_cost,
            total_shares,
            average_cost,
        }
    }

    /// Whether the position holds any shares
    pub fn is_empty(&self) -> bool {
        self.total_shares <= 0.0
    }
}
