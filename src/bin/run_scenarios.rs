//! Run every growth scenario from scenarios.csv
//!
//! Outputs one result row per scenario for spreadsheet comparison

use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use stock_calculator::format::format_currency;
use stock_calculator::growth::{loader::load_scenarios, AccrualModel, GrowthConfig, GrowthEngine};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    println!("Loading scenarios from scenarios.csv...");

    let scenarios = load_scenarios("scenarios.csv")
        .map_err(|e| anyhow::anyhow!("failed to load scenarios: {}", e))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    // Scenarios are independent, so project them in parallel
    let engine = GrowthEngine::new(GrowthConfig {
        detailed_output: false,
    });
    let results: Vec<_> = scenarios
        .par_iter()
        .map(|input| engine.project(input))
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    // Write output
    let output_path = "scenario_output.csv";
    let mut file = File::create(output_path)?;

    writeln!(
        file,
        "Scenario,Model,DurationDays,TotalDeposited,TotalInterest,DividendGross,DividendTax,DividendNet,FinalAmount"
    )?;

    for (i, (input, result)) in scenarios.iter().zip(&results).enumerate() {
        let model = match input.model {
            AccrualModel::Simple => "simple",
            AccrualModel::Compound => "compound",
        };
        let (gross, tax, net) = result
            .dividend
            .map(|d| (d.gross, d.tax, d.net_reinvested))
            .unwrap_or((0.0, 0.0, 0.0));

        writeln!(
            file,
            "{},{},{:.0},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            i + 1,
            model,
            input.duration_days(),
            result.total_deposited,
            result.total_interest,
            gross,
            tax,
            net,
            result.final_amount,
        )?;
    }

    println!("Results written to: {}", output_path);

    // Print summary
    let total_deposited: f64 = results.iter().map(|r| r.total_deposited).sum();
    let total_final: f64 = results.iter().map(|r| r.final_amount).sum();

    println!("\nSummary:");
    println!("  Scenarios:         {}", results.len());
    println!("  Total deposited:   {}", format_currency(total_deposited));
    println!("  Total final:       {}", format_currency(total_final));
    println!("  Total earnings:    {}", format_currency(total_final - total_deposited));

    Ok(())
}
