//! Scenario runner for repeated growth projections
//!
//! Holds a base configuration once, then allows running many projections or
//! side-by-side accrual model comparisons without rebuilding the engine.

use serde::Serialize;

use crate::growth::{AccrualModel, GrowthConfig, GrowthEngine, GrowthInput, GrowthResult};

/// Pre-configured runner for single, batch and comparison projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [3.0, 4.0, 5.0] {
///     let input = GrowthInput { rate_percent: rate, ..base.clone() };
///     let result = runner.run(&input);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: GrowthConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default config
    pub fn new() -> Self {
        Self {
            config: GrowthConfig::default(),
        }
    }

    /// Create a runner with a specific config
    pub fn with_config(config: GrowthConfig) -> Self {
        Self { config }
    }

    /// Run a single projection
    pub fn run(&self, input: &GrowthInput) -> GrowthResult {
        let engine = GrowthEngine::new(self.config.clone());
        engine.project(input)
    }

    /// Run projections for multiple inputs with the same config
    pub fn run_batch(&self, inputs: &[GrowthInput]) -> Vec<GrowthResult> {
        let engine = GrowthEngine::new(self.config.clone());
        inputs.iter().map(|input| engine.project(input)).collect()
    }

    /// Run one input under both accrual models and compare final amounts
    pub fn compare(&self, input: &GrowthInput) -> ModelComparison {
        let engine = GrowthEngine::new(self.config.clone());
        let simple = engine.project(&GrowthInput {
            model: AccrualModel::Simple,
            ..input.clone()
        });
        let compound = engine.project(&GrowthInput {
            model: AccrualModel::Compound,
            ..input.clone()
        });
        ModelComparison::new(simple.final_amount, compound.final_amount)
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Side-by-side result of running both accrual models on one input
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelComparison {
    /// Final amount under simple accrual
    pub simple_final: f64,

    /// Final amount under compound accrual
    pub compound_final: f64,

    /// compound_final - simple_final, negative when simple wins
    pub difference: f64,
}

impl ModelComparison {
    fn new(simple_final: f64, compound_final: f64) -> Self {
        Self {
            simple_final,
            compound_final,
            difference: compound_final - simple_final,
        }
    }

    /// Model with the higher final amount, None on an exact tie
    pub fn better_model(&self) -> Option<AccrualModel> {
        if self.difference > 0.0 {
            Some(AccrualModel::Compound)
        } else if self.difference < 0.0 {
            Some(AccrualModel::Simple)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::PeriodUnit;

    fn base_input() -> GrowthInput {
        GrowthInput {
            principal: 10_000_000.0,
            monthly_deposit: 500_000.0,
            period: 10.0,
            unit: PeriodUnit::Year,
            rate_percent: 5.0,
            model: AccrualModel::Simple,
            dividend: None,
        }
    }

    #[test]
    fn test_compare_favors_compound() {
        let runner = ScenarioRunner::new();
        let comparison = runner.compare(&base_input());

        assert!(comparison.compound_final > comparison.simple_final);
        assert!(comparison.difference > 0.0);
        assert_eq!(comparison.better_model(), Some(AccrualModel::Compound));
    }

    #[test]
    fn test_compare_zero_rate_ties() {
        let mut input = base_input();
        input.rate_percent = 0.0;

        let comparison = ScenarioRunner::new().compare(&input);
        assert_eq!(comparison.difference, 0.0);
        assert_eq!(comparison.better_model(), None);
    }

    #[test]
    fn test_run_batch() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<_> = [3.0, 5.0, 8.0]
            .iter()
            .map(|&rate| GrowthInput {
                rate_percent: rate,
                ..base_input()
            })
            .collect();

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 3);

        // Higher rate should produce a higher final amount
        assert!(results[2].final_amount > results[0].final_amount);
    }
}
