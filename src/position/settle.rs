//! Final settlement of a position against a target price or staged exit

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lots::{Lot, PositionState};

/// Errors raised during settlement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// Sell lots total more shares than the position holds
    #[error("cannot sell {sold} shares from a position of {held}")]
    OverSell { sold: f64, held: f64 },

    /// No cost basis to measure profit against
    #[error("cost basis is zero, profit rate is undefined")]
    ZeroCostBasis,
}

/// How the position exits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExitPlan {
    /// Sell the entire position at one target price
    TargetPrice(f64),

    /// Sell staged lots, each at its own price
    SplitSells(Vec<Lot>),
}

/// Realized profit or loss on settlement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PnlResult {
    /// Proceeds of the exit
    pub exit_value: f64,

    /// Cost attributed to the shares sold
    pub cost_basis: f64,

    /// exit_value - cost_basis, negative on a loss
    pub profit_loss: f64,

    /// profit_loss / cost_basis x 100
    pub profit_loss_rate_percent: f64,
}

/// Settle a position against an exit plan
///
/// Target-price mode sells the whole position at one price. Split-sell mode
/// sells only the staged quantity, costed at the blended average (no per-lot
/// matching), and fails when the staged quantity exceeds the holding.
pub fn settle(position: &PositionState, exit: &ExitPlan) -> Result<PnlResult, PositionError> {
    let (exit_value, cost_basis) = match exit {
        ExitPlan::TargetPrice(target_price) => {
            (target_price * position.total_shares, position.total_cost)
        }
        ExitPlan::SplitSells(sells) => {
            let exit_value: f64 = sells.iter().map(Lot::amount).sum();
            let sold_shares: f64 = sells.iter().map(|lot| lot.quantity as f64).sum();
            if sold_shares > position.total_shares {
                return Err(PositionError::OverSell {
                    sold: sold_shares,
                    held: position.total_shares,
                });
            }
            (exit_value, position.average_cost * sold_shares)
        }
    };

    if cost_basis <= 0.0 {
        return Err(PositionError::ZeroCostBasis);
    }

    let profit_loss = exit_value - cost_basis;
    Ok(PnlResult {
        exit_value,
        cost_basis,
        profit_loss,
        profit_loss_rate_percent: profit_loss / cost_basis * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_price_settlement() {
        // 10 shares bought at 10,000, sold at 12,000
        let position = PositionState::from_lots(&[Lot::new(10_000.0, 10)]);
        let result = settle(&position, &ExitPlan::TargetPrice(12_000.0)).unwrap();

        assert!((result.exit_value - 120_000.0).abs() < 1e-9);
        assert!((result.cost_basis - 100_000.0).abs() < 1e-9);
        assert!((result.profit_loss - 20_000.0).abs() < 1e-9);
        assert!((result.profit_loss_rate_percent - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_below_cost_is_a_loss() {
        let position = PositionState::from_lots(&[Lot::new(10_000.0, 10)]);
        let result = settle(&position, &ExitPlan::TargetPrice(8_500.0)).unwrap();

        assert!(result.profit_loss < 0.0);
        assert!((result.profit_loss_rate_percent + 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_sell_partial_exit() {
        // 20 shares at blended 10,750; sell 8 of them
        let position =
            PositionState::from_lots(&[Lot::new(10_000.0, 10), Lot::new(11_500.0, 10)]);
        let sells = vec![Lot::new(12_000.0, 5), Lot::new(13_000.0, 3)];
        let result = settle(&position, &ExitPlan::SplitSells(sells)).unwrap();

        assert!((result.exit_value - 99_000.0).abs() < 1e-9);
        // Basis is the blended average cost for the 8 shares sold
        assert!((result.cost_basis - position.average_cost * 8.0).abs() < 1e-9);
        assert!(result.profit_loss > 0.0);
    }

    #[test]
    fn test_over_sell_rejected() {
        let position = PositionState::from_lots(&[Lot::new(10_000.0, 10)]);
        let sells = vec![Lot::new(12_000.0, 9), Lot::new(12_500.0, 6)];
        let err = settle(&position, &ExitPlan::SplitSells(sells)).unwrap_err();

        assert_eq!(err, PositionError::OverSell { sold: 15.0, held: 10.0 });
    }

    #[test]
    fn test_zero_cost_basis_rejected() {
        let position = PositionState::from_lots(&[]);
        let err = settle(&position, &ExitPlan::TargetPrice(12_000.0)).unwrap_err();
        assert_eq!(err, PositionError::ZeroCostBasis);

        // Selling zero shares has no basis either
        let held = PositionState::from_lots(&[Lot::new(10_000.0, 10)]);
        let err = settle(&held, &ExitPlan::SplitSells(vec![])).unwrap_err();
        assert_eq!(err, PositionError::ZeroCostBasis);
    }
}
