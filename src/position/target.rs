//! Target price and target rate derivation
//!
//! Each side derives the other from the current average cost. The two-field
//! last-writer-wins binding belongs to the caller; these stay pure. Both
//! assume a positive average cost, which callers establish before deriving.

/// Percentage gain implied by a target price over the average cost
pub fn rate_for_target_price(average_cost: f64, target_price: f64) -> f64 {
    (target_price - average_cost) / average_cost * 100.0
}

/// Target price implied by a percentage gain over the average cost
pub fn target_price_for_rate(average_cost: f64, rate_percent: f64) -> f64 {
    average_cost * (1.0 + rate_percent / 100.0)
}
