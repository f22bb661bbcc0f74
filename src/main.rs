//! Stock Calculator CLI
//!
//! Command-line interface for growth projections and position P&L

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::Write;

use stock_calculator::format::{format_currency, parse_amount};
use stock_calculator::growth::{
    AccrualModel, DividendTerms, GrowthConfig, GrowthEngine, GrowthInput, PeriodUnit,
};
use stock_calculator::position::{
    load_trades, rate_for_target_price, settle, target_price_for_rate, ExitPlan, Lot,
    PositionState,
};
use stock_calculator::scenario::ScenarioRunner;
use stock_calculator::validate::{validate_growth, validate_settlement};

#[derive(Parser)]
#[command(name = "stock_calculator", version, about = "Investment growth and position P&L calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitArg {
    Year,
    Month,
    Day,
}

impl From<UnitArg> for PeriodUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Year => PeriodUnit::Year,
            UnitArg::Month => PeriodUnit::Month,
            UnitArg::Day => PeriodUnit::Day,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Project growth of a periodic-deposit investment
    Growth {
        /// Lump-sum deposit, comma separators allowed
        #[arg(long, default_value = "0")]
        principal: String,

        /// Monthly deposit, comma separators allowed
        #[arg(long, default_value = "0")]
        monthly_deposit: String,

        /// Deposit period length
        #[arg(long)]
        period: f64,

        /// Unit of the deposit period
        #[arg(long, value_enum, default_value = "year")]
        unit: UnitArg,

        /// Annual rate of return in percent
        #[arg(long)]
        rate: f64,

        /// Use compound accrual instead of simple
        #[arg(long)]
        compound: bool,

        /// Annual dividend rate in percent, reinvested each year
        #[arg(long)]
        dividend_rate: Option<f64>,

        /// Dividend tax rate in percent
        #[arg(long, default_value_t = 0.0)]
        dividend_tax: f64,

        /// Write the year-by-year trace to this CSV path
        #[arg(long)]
        csv: Option<String>,

        /// Print the result record as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Profit/loss on a position against a target price or staged sells
    Pnl {
        /// Buy lot as price:quantity, repeatable
        #[arg(long = "buy")]
        buys: Vec<String>,

        /// Sell lot as price:quantity, repeatable; enables split-sell mode
        #[arg(long = "sell")]
        sells: Vec<String>,

        /// Lump investment amount, alternative to --buy
        #[arg(long)]
        investment: Option<String>,

        /// Unit purchase price used with --investment
        #[arg(long)]
        purchase_price: Option<String>,

        /// Target exit price for the whole position
        #[arg(long)]
        target_price: Option<String>,

        /// Target gain in percent, converted to a target price
        #[arg(long)]
        target_rate: Option<f64>,

        /// Load buy and sell lots from a trades CSV instead of flags
        #[arg(long)]
        trades: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Growth {
            principal,
            monthly_deposit,
            period,
            unit,
            rate,
            compound,
            dividend_rate,
            dividend_tax,
            csv,
            json,
        } => run_growth(
            parse_amount(&principal),
            parse_amount(&monthly_deposit),
            period,
            unit.into(),
            rate,
            compound,
            dividend_rate,
            dividend_tax,
            csv,
            json,
        ),
        Command::Pnl {
            buys,
            sells,
            investment,
            purchase_price,
            target_price,
            target_rate,
            trades,
        } => run_pnl(buys, sells, investment, purchase_price, target_price, target_rate, trades),
    }
}

fn run_growth(
    principal: f64,
    monthly_deposit: f64,
    period: f64,
    unit: PeriodUnit,
    rate: f64,
    compound: bool,
    dividend_rate: Option<f64>,
    dividend_tax: f64,
    csv: Option<String>,
    json: bool,
) -> Result<()> {
    let input = GrowthInput {
        principal,
        monthly_deposit,
        period,
        unit,
        rate_percent: rate,
        model: if compound {
            AccrualModel::Compound
        } else {
            AccrualModel::Simple
        },
        dividend: dividend_rate.map(|rate_percent| DividendTerms {
            rate_percent,
            tax_rate_percent: dividend_tax,
        }),
    };
    validate_growth(&input).map_err(|e| anyhow!(e))?;

    let engine = GrowthEngine::new(GrowthConfig::default());
    let result = engine.project(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Stock Calculator v0.1.0");
    println!("=======================\n");

    println!("Projection ({:?} accrual, {:.0} days):", input.model, input.duration_days());
    println!("  Principal:        {}", format_currency(input.principal));
    println!("  Monthly deposit:  {}", format_currency(input.monthly_deposit));
    println!("  Rate:             {:.2}%", input.rate_percent);
    println!();

    // Print the year-by-year reinvestment trace when dividends are on
    if !result.years.is_empty() {
        println!("{:>4} {:>16} {:>14} {:>14} {:>13} {:>11} {:>16}",
            "Year", "Start capital", "Deposits", "Interest", "Div gross", "Div tax", "End capital");
        println!("{}", "-".repeat(95));
        for row in &result.years {
            println!("{:>4} {:>16.2} {:>14.2} {:>14.2} {:>13.2} {:>11.2} {:>16.2}",
                row.year,
                row.starting_capital,
                row.deposits,
                row.interest,
                row.dividend_gross,
                row.dividend_tax,
                row.ending_capital,
            );
        }
        println!();
    }

    println!("Summary:");
    println!("  Total deposited:  {}", format_currency(result.total_deposited));
    println!("  Total interest:   {}", format_currency(result.total_interest));
    if let Some(dividend) = &result.dividend {
        println!("  Dividend gross:   {}", format_currency(dividend.gross));
        println!("  Dividend tax:     {}", format_currency(dividend.tax));
        println!("  Dividend net:     {}", format_currency(dividend.net_reinvested));
    }
    println!("  Final amount:     {}", format_currency(result.final_amount));

    // Both models side by side, like-for-like
    let comparison = ScenarioRunner::new().compare(&input);
    println!("\nSimple vs compound:");
    println!("  Simple final:     {}", format_currency(comparison.simple_final));
    println!("  Compound final:   {}", format_currency(comparison.compound_final));
    println!("  Difference:       {}", format_currency(comparison.difference.abs()));

    if let Some(path) = csv {
        write_year_csv(&path, &result)?;
        println!("\nYear rows written to: {}", path);
    }

    Ok(())
}

fn run_pnl(
    mut buys: Vec<String>,
    mut sells: Vec<String>,
    investment: Option<String>,
    purchase_price: Option<String>,
    target_price: Option<String>,
    target_rate: Option<f64>,
    trades: Option<String>,
) -> Result<()> {
    // A trades file replaces the per-lot flags entirely
    let mut buy_lots: Vec<Lot> = Vec::new();
    let mut sell_lots: Vec<Lot> = Vec::new();
    if let Some(path) = trades {
        let list = load_trades(&path).map_err(|e| anyhow!("failed to load trades: {}", e))?;
        buy_lots = list.buys;
        sell_lots = list.sells;
        buys.clear();
        sells.clear();
    }
    for text in &buys {
        buy_lots.push(parse_lot(text)?);
    }
    for text in &sells {
        sell_lots.push(parse_lot(text)?);
    }

    let position = if !buy_lots.is_empty() {
        PositionState::from_lots(&buy_lots)
    } else {
        let investment = parse_amount(&investment.unwrap_or_default());
        let purchase_price = parse_amount(&purchase_price.unwrap_or_default());
        PositionState::from_investment(investment, purchase_price)
    };

    println!("Position:");
    println!("  Total cost:       {}", format_currency(position.total_cost));
    println!("  Total shares:     {:.4}", position.total_shares);
    println!("  Average cost:     {}", format_currency(position.average_cost));

    let exit = if !sell_lots.is_empty() {
        ExitPlan::SplitSells(sell_lots)
    } else {
        let price = match (target_price, target_rate) {
            (Some(price), _) => parse_amount(&price),
            (None, Some(rate)) => target_price_for_rate(position.average_cost, rate),
            (None, None) => bail!("provide --target-price, --target-rate or --sell lots"),
        };
        ExitPlan::TargetPrice(price)
    };

    validate_settlement(&position, &exit).map_err(|e| anyhow!(e))?;
    let result = settle(&position, &exit).map_err(|e| anyhow!(e))?;

    if let ExitPlan::TargetPrice(price) = &exit {
        let implied_rate = rate_for_target_price(position.average_cost, *price);
        println!("  Target price:     {} ({:+.2}%)", format_currency(*price), implied_rate);
    }

    println!("\nSettlement:");
    println!("  Exit value:       {}", format_currency(result.exit_value));
    println!("  Cost basis:       {}", format_currency(result.cost_basis));
    println!(
        "  Profit/loss:      {} ({:+.2}%)",
        format_currency(result.profit_loss),
        result.profit_loss_rate_percent
    );

    Ok(())
}

/// Parse a price:quantity pair, comma separators allowed in the price
fn parse_lot(text: &str) -> Result<Lot> {
    let (price, quantity) = text
        .split_once(':')
        .ok_or_else(|| anyhow!("expected price:quantity, got '{}'", text))?;
    let price = parse_amount(price);
    let quantity: u32 = quantity.trim().parse()?;
    if price <= 0.0 {
        bail!("lot price must be greater than zero, got '{}'", text);
    }
    Ok(Lot::new(price, quantity))
}

fn write_year_csv(path: &str, result: &stock_calculator::GrowthResult) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Year,StartCapital,Deposits,Interest,DividendGross,DividendTax,DividendNet,EndCapital")?;
    for row in &result.years {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.year,
            row.starting_capital,
            row.deposits,
            row.interest,
            row.dividend_gross,
            row.dividend_tax,
            row.dividend_net,
            row.ending_capital,
        )?;
    }
    Ok(())
}
