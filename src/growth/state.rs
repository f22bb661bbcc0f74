//! Reinvestment state tracking for the annual dividend loop

use super::input::AccrualModel;
use super::result::YearRow;

/// Running state of a dividend reinvestment projection at a year boundary
#[derive(Debug, Clone)]
pub struct ReinvestmentState {
    /// Last credited year (1-indexed, 0 before the loop runs)
    pub year: u32,

    /// Capital at the start of the next year
    pub capital: f64,

    /// Cumulative pre-tax dividend income
    pub total_dividend_gross: f64,

    /// Cumulative dividend tax withheld
    pub total_dividend_tax: f64,
}

impl ReinvestmentState {
    /// Initialize state at the start of year 1
    pub fn new(principal: f64) -> Self {
        Self {
            year: 0,
            capital: principal,
            total_dividend_gross: 0.0,
            total_dividend_tax: 0.0,
        }
    }

    /// Cumulative post-tax dividend income reinvested so far
    pub fn total_dividend_net(&self) -> f64 {
        self.total_dividend_gross - self.total_dividend_tax
    }

    /// Credit one year: deposits, operating return, dividend, reinvestment
    ///
    /// Rates are decimals, not percentages. The dividend accrues on the
    /// starting capital plus the full annual deposit, and the net dividend is
    /// folded back into capital so the next year compounds on it regardless
    /// of the accrual model.
    pub fn advance_year(
        &mut self,
        monthly_deposit: f64,
        annual_rate: f64,
        model: AccrualModel,
        dividend_rate: f64,
        tax_rate: f64,
    ) -> YearRow {
        self.year += 1;
        let starting_capital = self.capital;
        let annual_deposit = monthly_deposit * 12.0;

        let capital_interest = starting_capital * annual_rate;
        let deposit_interest = match model {
            AccrualModel::Compound => {
                // Annuity-due future value of 12 start-of-month deposits,
                // minus the deposits themselves
                let monthly_rate = annual_rate / 12.0;
                if monthly_rate > 0.0 {
                    monthly_deposit
                        * (((1.0 + monthly_rate).powi(12) - 1.0) / monthly_rate)
                        * (1.0 + monthly_rate)
                        - annual_deposit
                } else {
                    0.0
                }
            }
            // Deposits land mid-year on average
            AccrualModel::Simple => annual_deposit * annual_rate * 0.5,
        };
        let interest = capital_interest + deposit_interest;

        let dividend_base = starting_capital + annual_deposit;
        let dividend_gross = dividend_base * dividend_rate;
        let dividend_tax = dividend_gross * tax_rate;
        let dividend_net = dividend_gross - dividend_tax;

        self.capital += annual_deposit + interest + dividend_net;
        self.total_dividend_gross += dividend_gross;
        self.total_dividend_tax += dividend_tax;

        YearRow {
            year: self.year,
            starting_capital,
            deposits: annual_deposit,
            interest,
            dividend_gross,
            dividend_tax,
            dividend_net,
            ending_capital: self.capital,
        }
    }
}
