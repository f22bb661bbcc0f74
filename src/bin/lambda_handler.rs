//! AWS Lambda handler for calculator requests
//!
//! Accepts a JSON payload carrying a growth projection request, a position
//! settlement request, or both, and returns the result records as JSON.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

use stock_calculator::growth::{GrowthConfig, GrowthEngine, GrowthInput, GrowthResult};
use stock_calculator::position::{settle, ExitPlan, Lot, PnlResult, PositionState};
use stock_calculator::validate::{validate_growth, validate_settlement};

/// Request payload for the calculator Lambda
#[derive(Debug, Deserialize)]
struct CalculatorRequest {
    /// Growth projection input
    #[serde(default)]
    growth: Option<GrowthInput>,

    /// Position settlement input
    #[serde(default)]
    position: Option<PositionRequest>,

    /// Include the year-by-year trace in the growth response
    #[serde(default)]
    detailed: bool,
}

/// Position settlement input
#[derive(Debug, Deserialize)]
struct PositionRequest {
    /// Purchase lots
    #[serde(default)]
    buys: Vec<Lot>,

    /// Lump investment amount, alternative to buys
    #[serde(default)]
    investment: Option<f64>,

    /// Unit purchase price used with investment
    #[serde(default)]
    purchase_price: Option<f64>,

    /// Target exit price for the whole position
    #[serde(default)]
    target_price: Option<f64>,

    /// Staged sell lots; takes precedence over target_price
    #[serde(default)]
    sells: Vec<Lot>,
}

#[derive(Debug, Serialize)]
struct CalculatorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    growth: Option<GrowthResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<PositionResponse>,
}

/// Settlement result together with the aggregated position it ran against
#[derive(Debug, Serialize)]
struct PositionResponse {
    total_cost: f64,
    total_shares: f64,
    average_cost: f64,
    result: PnlResult,
}

async fn handler(event: LambdaEvent<CalculatorRequest>) -> Result<CalculatorResponse, Error> {
    let request = event.payload;
    let mut response = CalculatorResponse {
        growth: None,
        position: None,
    };

    if let Some(input) = &request.growth {
        validate_growth(input).map_err(Error::from)?;
        let engine = GrowthEngine::new(GrowthConfig {
            detailed_output: request.detailed,
        });
        response.growth = Some(engine.project(input));
    }

    if let Some(position_request) = &request.position {
        let state = if !position_request.buys.is_empty() {
            PositionState::from_lots(&position_request.buys)
        } else {
            PositionState::from_investment(
                position_request.investment.unwrap_or(0.0),
                position_request.purchase_price.unwrap_or(0.0),
            )
        };

        let exit = if !position_request.sells.is_empty() {
            ExitPlan::SplitSells(position_request.sells.clone())
        } else {
            ExitPlan::TargetPrice(position_request.target_price.unwrap_or(0.0))
        };

        validate_settlement(&state, &exit).map_err(Error::from)?;
        let result = settle(&state, &exit).map_err(Error::from)?;

        response.position = Some(PositionResponse {
            total_cost: state.total_cost,
            total_shares: state.total_shares,
            average_cost: state.average_cost,
            result,
        });
    }

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_decoding() {
        let payload = r#"{
            "growth": {
                "principal": 1000000,
                "monthly_deposit": 100000,
                "period": 3,
                "unit": "year",
                "rate_percent": 5.0,
                "model": "compound",
                "dividend": {"rate_percent": 3.0, "tax_rate_percent": 15.4}
            },
            "detailed": true
        }"#;

        let request: CalculatorRequest = serde_json::from_str(payload).expect("decode request");
        assert!(request.detailed);

        let growth = request.growth.expect("growth input");
        assert_eq!(growth.principal, 1_000_000.0);
        let dividend = growth.dividend.expect("dividend terms");
        assert_eq!(dividend.tax_rate_percent, 15.4);
        assert!(request.position.is_none());
    }

    #[test]
    fn test_position_request_decoding() {
        let payload = r#"{
            "position": {
                "buys": [{"price": 10000, "quantity": 10}],
                "sells": [{"price": 12000, "quantity": 5}]
            }
        }"#;

        let request: CalculatorRequest = serde_json::from_str(payload).expect("decode request");
        let position = request.position.expect("position input");
        assert_eq!(position.buys.len(), 1);
        assert_eq!(position.sells[0], Lot::new(12_000.0, 5));
        assert!(position.target_price.is_none());
    }
}
