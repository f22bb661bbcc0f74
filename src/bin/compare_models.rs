//! Compare simple and compound accrual across a rate sweep
//!
//! Usage: cargo run --bin compare_models

use stock_calculator::format::format_currency;
use stock_calculator::growth::{AccrualModel, GrowthInput, PeriodUnit};
use stock_calculator::scenario::ScenarioRunner;

fn main() {
    env_logger::init();

    let rates = [1.0, 3.0, 5.0, 8.0, 12.0];
    let runner = ScenarioRunner::new();

    println!("{}", "=".repeat(76));
    println!("Simple vs compound: 10,000,000 principal + 500,000/month over 10 years");
    println!("{}", "=".repeat(76));
    println!("{:>6} {:>20} {:>20} {:>18}", "Rate%", "Simple", "Compound", "Difference");
    println!("{:-<76}", "");

    for rate in rates {
        let input = GrowthInput {
            principal: 10_000_000.0,
            monthly_deposit: 500_000.0,
            period: 10.0,
            unit: PeriodUnit::Year,
            rate_percent: rate,
            model: AccrualModel::Simple,
            dividend: None,
        };

        let comparison = runner.compare(&input);
        println!(
            "{:>6.1} {:>20} {:>20} {:>18}",
            rate,
            format_currency(comparison.simple_final),
            format_currency(comparison.compound_final),
            format_currency(comparison.difference),
        );
    }

    println!();
    println!("Compounding pulls ahead as the rate and horizon grow.");
}
