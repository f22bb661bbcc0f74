//! Growth projection output records

use serde::{Deserialize, Serialize};

/// One year of the dividend reinvestment loop
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearRow {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Capital at the start of the year
    pub starting_capital: f64,

    /// Deposits made during the year
    pub deposits: f64,

    /// Operating return earned during the year
    pub interest: f64,

    /// Pre-tax dividend income for the year
    pub dividend_gross: f64,

    /// Dividend tax withheld for the year
    pub dividend_tax: f64,

    /// Post-tax dividend income reinvested at year end
    pub dividend_net: f64,

    /// Capital after deposits, interest and reinvestment
    pub ending_capital: f64,
}

/// Dividend totals accumulated across the projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DividendBreakdown {
    /// Pre-tax dividend income across all years
    pub gross: f64,

    /// Dividend tax withheld across all years
    pub tax: f64,

    /// Post-tax dividend income reinvested into capital
    pub net_reinvested: f64,
}

/// Complete growth projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Principal plus every monthly deposit made within the period
    pub total_deposited: f64,

    /// Operating return over the period, net dividends excluded
    pub total_interest: f64,

    /// Final amount, net dividends included when present
    pub final_amount: f64,

    /// Dividend totals, present whenever dividends were requested
    #[serde(default)]
    pub dividend: Option<DividendBreakdown>,

    /// Year-by-year reinvestment trace (dividend projections with detailed
    /// output only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub years: Vec<YearRow>,
}

impl GrowthResult {
    /// Build a dividend-free result from its totals
    pub fn plain(total_deposited: f64, total_interest: f64, final_amount: f64) -> Self {
        Self {
            total_deposited,
            total_interest,
            final_amount,
            dividend: None,
            years: Vec::new(),
        }
    }

    /// Total return over the period including net dividends
    pub fn total_earnings(&self) -> f64 {
        self.final_amount - self.total_deposited
    }
}
