//! Growth projection input records

use serde::{Deserialize, Serialize};

/// Unit of the deposit period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Year,
    Month,
    Day,
}

impl PeriodUnit {
    /// Days represented by one unit (idealized 365-day year, 30-day month)
    pub fn days(&self) -> f64 {
        match self {
            PeriodUnit::Year => 365.0,
            PeriodUnit::Month => 30.0,
            PeriodUnit::Day => 1.0,
        }
    }
}

/// Convert a period value and unit to days
///
/// No rounding is applied; fractional results stay fractional and consumers
/// floor where whole months are required.
pub fn period_to_days(period: f64, unit: PeriodUnit) -> f64 {
    period * unit.days()
}

/// Interest accrual model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccrualModel {
    /// Linear accrual on each amount from its deposit date
    Simple,
    /// Monthly interest-on-interest
    Compound,
}

/// Annual dividend payout terms
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DividendTerms {
    /// Annual dividend rate as a percentage of capital
    pub rate_percent: f64,

    /// Flat dividend income tax rate in percent (0-100)
    #[serde(default)]
    pub tax_rate_percent: f64,
}

/// A growth projection request
///
/// Callers validate before projecting; in particular principal and
/// monthly_deposit must not both be zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Lump-sum deposit at the start of the period
    pub principal: f64,

    /// Recurring deposit made at the start of each month
    #[serde(default)]
    pub monthly_deposit: f64,

    /// Deposit period length, in `unit`s
    pub period: f64,

    /// Unit of the deposit period
    pub unit: PeriodUnit,

    /// Annual rate of return in percent
    pub rate_percent: f64,

    /// Accrual model
    pub model: AccrualModel,

    /// Annual dividend terms, reinvested into capital when present
    #[serde(default)]
    pub dividend: Option<DividendTerms>,
}

impl GrowthInput {
    /// Deposit period in days
    pub fn duration_days(&self) -> f64 {
        period_to_days(self.period, self.unit)
    }

    /// Number of monthly deposit events within the period
    pub fn deposit_months(&self) -> u32 {
        (self.duration_days() / 30.0).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_conversion() {
        assert_eq!(period_to_days(1.0, PeriodUnit::Year), 365.0);
        assert_eq!(period_to_days(3.0, PeriodUnit::Month), 90.0);
        assert_eq!(period_to_days(45.0, PeriodUnit::Day), 45.0);
        // Fractional periods are not rounded
        assert_eq!(period_to_days(1.5, PeriodUnit::Year), 547.5);
    }

    #[test]
    fn test_deposit_months() {
        let mut input = GrowthInput {
            principal: 1_000_000.0,
            monthly_deposit: 100_000.0,
            period: 1.0,
            unit: PeriodUnit::Year,
            rate_percent: 5.0,
            model: AccrualModel::Simple,
            dividend: None,
        };

        // 365 days holds 12 whole 30-day months
        assert_eq!(input.deposit_months(), 12);

        // Under 30 days there is no deposit event at all
        input.period = 29.0;
        input.unit = PeriodUnit::Day;
        assert_eq!(input.deposit_months(), 0);
    }
}
