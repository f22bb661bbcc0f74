//! Core growth projection engine
//!
//! Routes a validated [`GrowthInput`] to one of four calculations: simple or
//! compound accrual, each with or without annual dividend reinvestment.

use super::input::{AccrualModel, DividendTerms, GrowthInput};
use super::result::{DividendBreakdown, GrowthResult, YearRow};
use super::state::ReinvestmentState;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct GrowthConfig {
    /// Whether to keep the year-by-year reinvestment trace on the result
    pub detailed_output: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            detailed_output: true,
        }
    }
}

/// Main growth projection engine
pub struct GrowthEngine {
    config: GrowthConfig,
}

impl GrowthEngine {
    /// Create a new engine with the given config
    pub fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    /// Run a projection, routing by accrual model and dividend terms
    pub fn project(&self, input: &GrowthInput) -> GrowthResult {
        let days = input.duration_days();
        match (input.model, &input.dividend) {
            (AccrualModel::Simple, None) => {
                simple_interest(input.principal, input.monthly_deposit, days, input.rate_percent)
            }
            (AccrualModel::Compound, None) => {
                compound_interest(input.principal, input.monthly_deposit, days, input.rate_percent)
            }
            (model, Some(terms)) => self.project_with_dividends(input, model, *terms),
        }
    }

    /// Year-by-year projection with annual dividend reinvestment
    ///
    /// Runs over whole years only; a horizon under 365 days never enters the
    /// loop and degrades to the starting capital with zero dividend.
    fn project_with_dividends(
        &self,
        input: &GrowthInput,
        model: AccrualModel,
        terms: DividendTerms,
    ) -> GrowthResult {
        let days = input.duration_days();
        let years = (days / 365.0).floor() as u32;
        let months = (days / 30.0).floor() as u32;
        let annual_rate = input.rate_percent / 100.0;
        let dividend_rate = terms.rate_percent / 100.0;
        let tax_rate = terms.tax_rate_percent / 100.0;

        let mut state = ReinvestmentState::new(input.principal);
        let mut rows: Vec<YearRow> = Vec::new();

        for _year in 1..=years {
            let row = state.advance_year(
                input.monthly_deposit,
                annual_rate,
                model,
                dividend_rate,
                tax_rate,
            );
            if self.config.detailed_output {
                rows.push(row);
            }
        }

        // The deposit count stays month-based, so horizons that are not whole
        // multiples of a year still count every deposit made
        let total_deposited = input.principal + input.monthly_deposit * months as f64;
        let total_earnings = state.capital - total_deposited;
        let net_reinvested = state.total_dividend_net();

        GrowthResult {
            total_deposited,
            // Net dividends backed out of total earnings; the interest that
            // reinvested dividends earned in later years stays commingled here
            total_interest: total_earnings - net_reinvested,
            final_amount: state.capital,
            dividend: Some(DividendBreakdown {
                gross: state.total_dividend_gross,
                tax: state.total_dividend_tax,
                net_reinvested,
            }),
            years: rows,
        }
    }
}

/// Simple interest, with each monthly deposit accruing from its own date
pub fn simple_interest(
    principal: f64,
    monthly_deposit: f64,
    days: f64,
    rate_percent: f64,
) -> GrowthResult {
    let months = (days / 30.0).floor() as u32;
    let years = days / 365.0;
    let annual_rate = rate_percent / 100.0;

    let principal_interest = principal * annual_rate * years;

    // Deposit i is made at the start of month i and accrues on the days left
    // until the end of the period
    let mut deposit_interest = 0.0;
    for i in 0..months {
        let remaining_days = days - (i as f64) * 30.0;
        deposit_interest += monthly_deposit * annual_rate * (remaining_days / 365.0);
    }

    let total_deposited = principal + monthly_deposit * months as f64;
    let total_interest = principal_interest + deposit_interest;
    GrowthResult::plain(total_deposited, total_interest, total_deposited + total_interest)
}

/// Monthly-compounded interest with an annuity-due deposit stream
pub fn compound_interest(
    principal: f64,
    monthly_deposit: f64,
    days: f64,
    rate_percent: f64,
) -> GrowthResult {
    let months = (days / 30.0).floor() as u32;
    let monthly_rate = rate_percent / 100.0 / 12.0;

    let principal_final = principal * (1.0 + monthly_rate).powi(months as i32);

    // Deposits are made at the start of each month, hence the extra
    // (1 + monthly_rate) factor
    let deposit_final = if monthly_rate > 0.0 {
        monthly_deposit
            * (((1.0 + monthly_rate).powi(months as i32) - 1.0) / monthly_rate)
            * (1.0 + monthly_rate)
    } else {
        monthly_deposit * months as f64
    };

    let final_amount = principal_final + deposit_final;
    let total_deposited = principal + monthly_deposit * months as f64;
    GrowthResult::plain(total_deposited, final_amount - total_deposited, final_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::input::PeriodUnit;
    use approx::assert_relative_eq;

    fn input(model: AccrualModel) -> GrowthInput {
        GrowthInput {
            principal: 1_000_000.0,
            monthly_deposit: 0.0,
            period: 1.0,
            unit: PeriodUnit::Year,
            rate_percent: 5.0,
            model,
            dividend: None,
        }
    }

    #[test]
    fn test_simple_one_year_principal_only() {
        // 1,000,000 at 5% over 365 days: months=12, years=1.0
        let result = simple_interest(1_000_000.0, 0.0, 365.0, 5.0);

        assert_eq!(result.total_deposited, 1_000_000.0);
        assert!((result.total_interest - 50_000.0).abs() < 1e-6);
        assert!((result.final_amount - 1_050_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_simple_deposit_stream() {
        // 3 deposits of 100,000 over 90 days at 10%: exposures of 90, 60 and
        // 30 days
        let result = simple_interest(0.0, 100_000.0, 90.0, 10.0);

        let expected = 100_000.0 * 0.10 * (90.0 + 60.0 + 30.0) / 365.0;
        assert_eq!(result.total_deposited, 300_000.0);
        assert!((result.total_interest - expected).abs() < 1e-6);
    }

    #[test]
    fn test_simple_interest_linear_in_rate() {
        let at_4 = simple_interest(2_000_000.0, 300_000.0, 730.0, 4.0);
        let at_8 = simple_interest(2_000_000.0, 300_000.0, 730.0, 8.0);

        assert_relative_eq!(at_8.total_interest, 2.0 * at_4.total_interest, max_relative = 1e-12);
    }

    #[test]
    fn test_compound_one_year_principal_only() {
        // 1,000,000 at 12% over 365 days: monthly rate 1%, 12 months
        let result = compound_interest(1_000_000.0, 0.0, 365.0, 12.0);

        let expected = 1_000_000.0 * 1.01f64.powi(12);
        assert!((result.final_amount - expected).abs() < 1e-6);
        assert!((result.final_amount - 1_126_825.0).abs() < 1.0);
        assert!((result.total_interest - (expected - 1_000_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_compound_zero_rate_equals_deposits() {
        let result = compound_interest(500_000.0, 100_000.0, 365.0, 0.0);

        assert_eq!(result.final_amount, result.total_deposited);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_deposited, 500_000.0 + 12.0 * 100_000.0);
    }

    #[test]
    fn test_compound_beats_simple_beyond_one_month() {
        let engine = GrowthEngine::new(GrowthConfig::default());

        let mut simple = input(AccrualModel::Simple);
        simple.monthly_deposit = 200_000.0;
        simple.period = 3.0;
        let mut compound = simple.clone();
        compound.model = AccrualModel::Compound;

        let simple_result = engine.project(&simple);
        let compound_result = engine.project(&compound);
        assert!(compound_result.final_amount > simple_result.final_amount);
    }

    #[test]
    fn test_short_duration_principal_only() {
        // Under 30 days no deposit event happens at all
        let result = simple_interest(1_000_000.0, 100_000.0, 20.0, 5.0);

        assert_eq!(result.total_deposited, 1_000_000.0);
        let expected = 1_000_000.0 * 0.05 * (20.0 / 365.0);
        assert!((result.total_interest - expected).abs() < 1e-6);
    }

    #[test]
    fn test_dividend_projection_totals() {
        let engine = GrowthEngine::new(GrowthConfig::default());
        let mut request = input(AccrualModel::Compound);
        request.period = 3.0;
        request.monthly_deposit = 100_000.0;
        request.dividend = Some(DividendTerms {
            rate_percent: 3.0,
            tax_rate_percent: 15.4,
        });

        let result = engine.project(&request);
        let dividend = result.dividend.expect("dividend breakdown");

        assert_eq!(result.years.len(), 3);
        assert!(dividend.gross > 0.0);
        assert!((dividend.net_reinvested - (dividend.gross - dividend.tax)).abs() < 1e-6);
        // Final amount decomposes into deposits, reported interest and net
        // reinvested dividends
        let recombined = result.total_deposited + result.total_interest + dividend.net_reinvested;
        assert_relative_eq!(result.final_amount, recombined, max_relative = 1e-12);
        // Gross dividend grows year over year as reinvestment compounds
        assert!(result.years[2].dividend_gross > result.years[0].dividend_gross);
    }

    #[test]
    fn test_dividend_under_one_year_is_degenerate() {
        let engine = GrowthEngine::new(GrowthConfig::default());
        let mut request = input(AccrualModel::Simple);
        request.period = 180.0;
        request.unit = PeriodUnit::Day;
        request.monthly_deposit = 100_000.0;
        request.dividend = Some(DividendTerms {
            rate_percent: 4.0,
            tax_rate_percent: 15.4,
        });

        let result = engine.project(&request);
        let dividend = result.dividend.expect("dividend breakdown");

        // The reinvestment loop never ran: no dividend, capital untouched
        assert_eq!(dividend.gross, 0.0);
        assert_eq!(dividend.tax, 0.0);
        assert!(result.years.is_empty());
        assert_eq!(result.final_amount, 1_000_000.0);
        // Deposits made within the 6 whole months are still counted
        assert_eq!(result.total_deposited, 1_000_000.0 + 6.0 * 100_000.0);
    }

    #[test]
    fn test_detailed_output_toggle() {
        let engine = GrowthEngine::new(GrowthConfig {
            detailed_output: false,
        });
        let mut request = input(AccrualModel::Compound);
        request.period = 5.0;
        request.dividend = Some(DividendTerms {
            rate_percent: 2.0,
            tax_rate_percent: 0.0,
        });

        let result = engine.project(&request);
        assert!(result.years.is_empty());
        assert!(result.dividend.is_some());
    }
}
