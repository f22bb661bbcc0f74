//! Input validation performed by callers before any engine function runs
//!
//! The engines assume pre-validated input and do not re-validate. Every
//! front-end (CLI, batch runner, Lambda handler) routes raw input through
//! these checks first and surfaces the message to the user.

use thiserror::Error;

use crate::growth::GrowthInput;
use crate::position::{ExitPlan, PositionState};

/// Validation failures surfaced to the caller before calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("deposit period must be greater than zero")]
    NonPositivePeriod,

    #[error("rate of return cannot be negative")]
    NegativeRate,

    #[error("amounts must be zero or greater")]
    NegativeAmount,

    #[error("enter an initial deposit or a monthly deposit")]
    NoFunds,

    #[error("dividend calculation requires a dividend rate greater than zero")]
    MissingDividendRate,

    #[error("dividend tax rate must be between 0 and 100")]
    TaxRateOutOfRange,

    #[error("position holds no shares")]
    EmptyPosition,

    #[error("target price must be greater than zero")]
    NonPositiveTarget,
}

/// Validate a growth projection request
pub fn validate_growth(input: &GrowthInput) -> Result<(), InputError> {
    if input.period <= 0.0 {
        return Err(InputError::NonPositivePeriod);
    }
    if input.rate_percent < 0.0 {
        return Err(InputError::NegativeRate);
    }
    if input.principal < 0.0 || input.monthly_deposit < 0.0 {
        return Err(InputError::NegativeAmount);
    }
    if input.principal == 0.0 && input.monthly_deposit == 0.0 {
        return Err(InputError::NoFunds);
    }
    if let Some(dividend) = &input.dividend {
        if dividend.rate_percent <= 0.0 {
            return Err(InputError::MissingDividendRate);
        }
        if !(0.0..=100.0).contains(&dividend.tax_rate_percent) {
            return Err(InputError::TaxRateOutOfRange);
        }
    }
    Ok(())
}

/// Validate a settlement request against the aggregated position
///
/// Over-selling is not checked here; the settlement step owns that rule.
pub fn validate_settlement(position: &PositionState, exit: &ExitPlan) -> Result<(), InputError> {
    if position.is_empty() {
        return Err(InputError::EmptyPosition);
    }
    if let ExitPlan::TargetPrice(price) = exit {
        if *price <= 0.0 {
            return Err(InputError::NonPositiveTarget);
        }
    }
    Ok(())
}
