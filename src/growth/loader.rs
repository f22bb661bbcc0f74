//! Load growth scenarios from a scenarios CSV

use super::{AccrualModel, DividendTerms, GrowthInput, PeriodUnit};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the scenarios file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "MonthlyDeposit")]
    monthly_deposit: f64,
    #[serde(rename = "Period")]
    period: f64,
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "RatePercent")]
    rate_percent: f64,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "DividendRate", default)]
    dividend_rate: Option<f64>,
    #[serde(rename = "DividendTaxRate", default)]
    dividend_tax_rate: Option<f64>,
}

impl CsvRow {
    fn to_input(self) -> Result<GrowthInput, Box<dyn Error>> {
        let unit = match self.unit.as_str() {
            "year" => PeriodUnit::Year,
            "month" => PeriodUnit::Month,
            "day" => PeriodUnit::Day,
            other => return Err(format!("Unknown Unit: {}", other).into()),
        };

        let model = match self.model.as_str() {
            "simple" => AccrualModel::Simple,
            "compound" => AccrualModel::Compound,
            other => return Err(format!("Unknown Model: {}", other).into()),
        };

        // A missing or zero dividend rate means a plain projection
        let dividend = match self.dividend_rate {
            Some(rate) if rate > 0.0 => Some(DividendTerms {
                rate_percent: rate,
                tax_rate_percent: self.dividend_tax_rate.unwrap_or(0.0),
            }),
            _ => None,
        };

        Ok(GrowthInput {
            principal: self.principal,
            monthly_deposit: self.monthly_deposit,
            period: self.period,
            unit,
            rate_percent: self.rate_percent,
            model,
            dividend,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<GrowthInput>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    read_rows(&mut reader)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<GrowthInput>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<GrowthInput>, Box<dyn Error>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_input()?);
    }

    log::debug!("loaded {} growth scenarios", scenarios.len());
    Ok(scenarios)
}
