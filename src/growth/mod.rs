//! Growth projection engine for periodic-deposit investments

mod input;
mod state;
mod engine;
mod result;
pub mod loader;

pub use input::{GrowthInput, AccrualModel, PeriodUnit, DividendTerms, period_to_days};
pub use state::ReinvestmentState;
pub use engine::{GrowthEngine, GrowthConfig, simple_interest, compound_interest};
pub use result::{GrowthResult, DividendBreakdown, YearRow};
