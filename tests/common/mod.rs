#![allow(dead_code)]

use chrono::NaiveDate;
use std::io::Write;
use std::sync::Mutex;

use tradejournal::domain::error::JournalError;
use tradejournal::domain::trade::Trade;
use tradejournal::ports::ledger_port::LedgerPort;

/// In-memory stand-in for the SQLite ledger. Keeps rows in insertion order
/// and sorts stably by date on read, matching the port contract.
pub struct MockLedger {
    pub trades: Mutex<Vec<Trade>>,
    pub fail_with: Option<String>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            trades: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn with_trades(trades: Vec<Trade>) -> Self {
        Self {
            trades: Mutex::new(trades),
            fail_with: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            trades: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    fn check(&self) -> Result<(), JournalError> {
        match &self.fail_with {
            Some(reason) => Err(JournalError::Storage {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl LedgerPort for MockLedger {
    fn insert_trade(&self, trade: &Trade) -> Result<(), JournalError> {
        self.check()?;
        self.trades.lock().unwrap().push(trade.clone());
        Ok(())
    }

    fn list_trades(&self) -> Result<Vec<Trade>, JournalError> {
        self.check()?;
        let mut trades = self.trades.lock().unwrap().clone();
        trades.sort_by_key(|t| t.date);
        Ok(trades)
    }

    fn count_trades(&self) -> Result<usize, JournalError> {
        self.check()?;
        Ok(self.trades.lock().unwrap().len())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_trade(date_str: &str, ticker: &str, quantity: f64, price: f64) -> Trade {
    Trade {
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        ticker: ticker.to_string(),
        entry: None,
        exit: None,
        quantity,
        price,
        strategy: "test".to_string(),
        notes: String::new(),
    }
}

pub const SEED_CSV: &str = "date,ticker,entry,exit,quantity,price,strategy,notes\n\
    2024-01-05,AAPL,185.20,,10,185.20,momentum,Opened starter position\n\
    2024-01-12,MSFT,388.50,,5,388.50,momentum,Breakout\n\
    2024-01-26,AAPL,185.20,192.40,-10,192.40,momentum,Closed into strength\n";

pub fn write_seed_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
