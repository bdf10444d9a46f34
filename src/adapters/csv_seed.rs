//! Seed dataset reader.
//!
//! Parses the bundled sample-trade CSV consumed once at initialization when
//! the ledger is empty. Columns are resolved by header name so column order
//! in the file does not matter.

use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::error::JournalError;
use crate::domain::trade::Trade;

fn seed_err(reason: impl Into<String>) -> JournalError {
    JournalError::Seed {
        reason: reason.into(),
    }
}

struct ColumnIndex {
    date: usize,
    ticker: usize,
    entry: usize,
    exit: usize,
    quantity: usize,
    price: usize,
    strategy: usize,
    notes: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, JournalError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| seed_err(format!("missing column '{name}' in header")))
        };

        Ok(Self {
            date: find("date")?,
            ticker: find("ticker")?,
            entry: find("entry")?,
            exit: find("exit")?,
            quantity: find("quantity")?,
            price: find("price")?,
            strategy: find("strategy")?,
            notes: find("notes")?,
        })
    }
}

fn field<'r>(record: &'r StringRecord, index: usize, name: &str) -> Result<&'r str, JournalError> {
    record
        .get(index)
        .ok_or_else(|| seed_err(format!("row missing '{name}' field")))
}

fn parse_optional_price(raw: &str, name: &str) -> Result<Option<f64>, JournalError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| seed_err(format!("invalid {name} value '{raw}': {e}")))
}

/// Read every trade row from the seed file at `path`. Rows are returned
/// verbatim in file order; any structural or parse problem is a
/// [`JournalError::Seed`].
pub fn read_trades(path: &Path) -> Result<Vec<Trade>, JournalError> {
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| seed_err(format!("failed to open {}: {e}", path.display())))?;

    let headers = rdr
        .headers()
        .map_err(|e| seed_err(format!("unreadable header row: {e}")))?
        .clone();
    let index = ColumnIndex::from_headers(&headers)?;

    let mut trades = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| seed_err(format!("CSV parse error: {e}")))?;

        let date_str = field(&record, index.date, "date")?;
        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
            .map_err(|e| seed_err(format!("invalid date '{date_str}': {e}")))?;

        let quantity_str = field(&record, index.quantity, "quantity")?;
        let quantity: f64 = quantity_str
            .trim()
            .parse()
            .map_err(|e| seed_err(format!("invalid quantity '{quantity_str}': {e}")))?;

        let price_str = field(&record, index.price, "price")?;
        let price: f64 = price_str
            .trim()
            .parse()
            .map_err(|e| seed_err(format!("invalid price '{price_str}': {e}")))?;

        trades.push(Trade {
            date,
            ticker: field(&record, index.ticker, "ticker")?.trim().to_string(),
            entry: parse_optional_price(field(&record, index.entry, "entry")?, "entry")?,
            exit: parse_optional_price(field(&record, index.exit, "exit")?, "exit")?,
            quantity,
            price,
            strategy: field(&record, index.strategy, "strategy")?.trim().to_string(),
            notes: field(&record, index.notes, "notes")?.to_string(),
        });
    }

    Ok(trades)
}
