//! Stock position aggregation and profit/loss settlement

mod lots;
mod target;
mod settle;
pub mod loader;

pub use lots::{Lot, PositionState};
pub use target::{rate_for_target_price, target_price_for_rate};
pub use settle::{settle, ExitPlan, PnlResult, PositionError};
pub use loader::{load_trades, load_trades_from_reader, TradeList};
