//! Ledger access port trait.

use crate::domain::error::JournalError;
use crate::domain::trade::Trade;

/// Durable read/write surface over the trade ledger.
///
/// `list_trades` returns rows ascending by date, ties broken by insertion
/// order, and an empty vec (not an error) when the ledger has no rows.
pub trait LedgerPort {
    fn insert_trade(&self, trade: &Trade) -> Result<(), JournalError>;

    fn list_trades(&self) -> Result<Vec<Trade>, JournalError>;

    fn count_trades(&self) -> Result<usize, JournalError>;
}
