//! The trade record: one row in the ledger.

use chrono::NaiveDate;

/// One executed trade as recorded in the journal.
///
/// `entry` and `exit` are prices that stay `None` until a position is closed.
/// `price` is the field the equity curve consumes; `entry`/`exit` are stored
/// and displayed but never drive the computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub date: NaiveDate,
    pub ticker: String,
    pub entry: Option<f64>,
    pub exit: Option<f64>,
    pub quantity: f64,
    pub price: f64,
    pub strategy: String,
    pub notes: String,
}

impl Trade {
    /// Signed notional value of the trade.
    pub fn notional(&self) -> f64 {
        self.quantity * self.price
    }
}
