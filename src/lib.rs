//! Stock Calculator - growth projection and position P&L engines
//!
//! This library provides:
//! - Periodic-deposit growth projections under simple and compound accrual
//! - Annual dividend payouts reinvested into capital, net of a flat tax
//! - Multi-lot position aggregation and profit/loss settlement
//! - Scenario runner for batch projections and accrual model comparison

pub mod growth;
pub mod position;
pub mod scenario;
pub mod format;
pub mod validate;

// Re-export commonly used types
pub use growth::{GrowthEngine, GrowthConfig, GrowthInput, GrowthResult, AccrualModel, PeriodUnit};
pub use position::{Lot, PositionState, ExitPlan, PnlResult};
pub use scenario::ScenarioRunner;
