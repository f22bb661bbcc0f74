//! Load buy and sell lots from a trades CSV

use super::Lot;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Buy and sell lots split out of a trade list
#[derive(Debug, Clone, Default)]
pub struct TradeList {
    pub buys: Vec<Lot>,
    pub sells: Vec<Lot>,
}

/// Raw CSV row matching the trades file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Side")]
    side: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Quantity")]
    quantity: u32,
}

/// Load trades from a CSV file
pub fn load_trades<P: AsRef<Path>>(path: P) -> Result<TradeList, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    read_rows(&mut reader)
}

/// Load trades from any reader (e.g., string buffer, network stream)
pub fn load_trades_from_reader<R: std::io::Read>(reader: R) -> Result<TradeList, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<TradeList, Box<dyn Error>> {
    let mut trades = TradeList::default();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let lot = Lot::new(row.price, row.quantity);
        match row.side.as_str() {
            "buy" | "Buy" => trades.buys.push(lot),
            "sell" | "Sell" => trades.sells.push(lot),
            other => return Err(format!("Unknown Side: {}", other).into()),
        }
    }

    log::debug!("loaded {} buys, {} sells", trades.buys.len(), trades.sells.len());
    Ok(trades)
}
