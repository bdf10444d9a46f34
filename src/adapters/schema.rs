//! Trade table schema definition and idempotent application.

use rusqlite::Connection;

use crate::domain::error::JournalError;

/// Declarative table definition. `CREATE ... IF NOT EXISTS` semantics make
/// application safe on every process start.
const TRADES_DDL: &str = "CREATE TABLE IF NOT EXISTS trades (
    date TEXT NOT NULL,
    ticker TEXT NOT NULL,
    entry REAL,
    exit REAL,
    quantity REAL NOT NULL,
    price REAL NOT NULL,
    strategy TEXT NOT NULL DEFAULT '',
    notes TEXT NOT NULL DEFAULT ''
);
CREATE INDEX IF NOT EXISTS idx_trades_date ON trades(date);";

/// Apply the trades table definition to `conn`. Safe to call whether or not
/// the table already exists; fails only if the storage is unreachable or the
/// definition is malformed.
pub fn apply(conn: &Connection) -> Result<(), JournalError> {
    conn.execute_batch(TRADES_DDL)
        .map_err(|e: rusqlite::Error| JournalError::Schema {
            reason: e.to_string(),
        })
}
