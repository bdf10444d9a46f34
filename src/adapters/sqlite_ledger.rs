//! SQLite ledger adapter.
//!
//! Owns the durable trade table through an r2d2 connection pool. Every
//! operation acquires a pooled connection for its own duration and releases
//! it on all exit paths, including errors.

use std::path::Path;

use chrono::NaiveDate;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use rusqlite::types::Value;

use crate::adapters::{csv_seed, schema};
use crate::domain::error::JournalError;
use crate::domain::trade::Trade;
use crate::ports::config_port::ConfigPort;
use crate::ports::ledger_port::LedgerPort;

/// Result of an ad-hoc read: column names plus raw rows in column order.
#[derive(Debug)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

pub struct SqliteLedger {
    pool: Pool<SqliteConnectionManager>,
}

fn storage_err(e: impl std::fmt::Display) -> JournalError {
    JournalError::Storage {
        reason: e.to_string(),
    }
}

fn query_err(e: impl std::fmt::Display) -> JournalError {
    JournalError::Query {
        reason: e.to_string(),
    }
}

impl SqliteLedger {
    /// Open or create the backing store file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, JournalError> {
        let manager = SqliteConnectionManager::file(path.as_ref());
        let pool = Pool::builder()
            .max_size(4)
            .build(manager)
            .map_err(storage_err)?;

        Ok(Self { pool })
    }

    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, JournalError> {
        let path = config
            .get_string("ledger", "path")
            .ok_or_else(|| JournalError::ConfigMissing {
                section: "ledger".into(),
                key: "path".into(),
            })?;
        Self::open(path)
    }

    /// In-memory store for tests. Pool size 1 so every operation sees the
    /// same database.
    pub fn in_memory() -> Result<Self, JournalError> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(storage_err)?;

        Ok(Self { pool })
    }

    fn conn(&self) -> Result<r2d2::PooledConnection<SqliteConnectionManager>, JournalError> {
        self.pool.get().map_err(storage_err)
    }

    /// Apply the trades table definition. Safe on every startup.
    pub fn apply_schema(&self) -> Result<(), JournalError> {
        let conn = self.conn()?;
        schema::apply(&conn)
    }

    /// Apply the schema, then bulk-load the seed dataset when the table is
    /// empty and a seed file exists. Returns the number of rows seeded (0 for
    /// every no-op case). A missing seed file is a sanctioned no-op; an
    /// unparsable one surfaces a [`JournalError::Seed`] after the schema has
    /// been applied, so the ledger stays usable.
    pub fn initialize_and_seed(&self, seed_path: Option<&Path>) -> Result<usize, JournalError> {
        self.apply_schema()?;

        if self.count_trades()? > 0 {
            return Ok(0);
        }

        let Some(path) = seed_path else {
            return Ok(0);
        };
        if !path.exists() {
            return Ok(0);
        }

        let trades = csv_seed::read_trades(path)?;
        self.insert_all(&trades)?;
        Ok(trades.len())
    }

    /// Append `trades` in one transaction: either every row lands or none.
    pub fn insert_all(&self, trades: &[Trade]) -> Result<(), JournalError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction().map_err(query_err)?;

        for trade in trades {
            tx.execute(
                "INSERT INTO trades (date, ticker, entry, exit, quantity, price, strategy, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    trade.date.format("%Y-%m-%d").to_string(),
                    trade.ticker,
                    trade.entry,
                    trade.exit,
                    trade.quantity,
                    trade.price,
                    trade.strategy,
                    trade.notes,
                ],
            )
            .map_err(query_err)?;
        }

        tx.commit().map_err(query_err)?;
        Ok(())
    }

    /// Parameterized escape hatch for ad-hoc reads outside the fixed
    /// operations.
    pub fn query(
        &self,
        statement: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<QueryResult, JournalError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(statement).map_err(query_err)?;

        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let column_count = columns.len();

        let mut raw = stmt.query(params).map_err(query_err)?;
        let mut rows = Vec::new();
        while let Some(row) = raw.next().map_err(query_err)? {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(row.get::<_, Value>(i).map_err(query_err)?);
            }
            rows.push(values);
        }

        Ok(QueryResult { columns, rows })
    }
}

impl LedgerPort for SqliteLedger {
    fn insert_trade(&self, trade: &Trade) -> Result<(), JournalError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO trades (date, ticker, entry, exit, quantity, price, strategy, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                trade.date.format("%Y-%m-%d").to_string(),
                trade.ticker,
                trade.entry,
                trade.exit,
                trade.quantity,
                trade.price,
                trade.strategy,
                trade.notes,
            ],
        )
        .map_err(query_err)?;
        Ok(())
    }

    fn list_trades(&self) -> Result<Vec<Trade>, JournalError> {
        let conn = self.conn()?;

        // rowid tie-break keeps equal dates in insertion order; SQLite's
        // ORDER BY alone gives no stability guarantee.
        let mut stmt = conn
            .prepare(
                "SELECT date, ticker, entry, exit, quantity, price, strategy, notes
                 FROM trades
                 ORDER BY date ASC, rowid ASC",
            )
            .map_err(query_err)?;

        let mapped = stmt
            .query_map([], |row| {
                let date_str: String = row.get(0)?;
                let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        0,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(Trade {
                    date,
                    ticker: row.get(1)?,
                    entry: row.get(2)?,
                    exit: row.get(3)?,
                    quantity: row.get(4)?,
                    price: row.get(5)?,
                    strategy: row.get(6)?,
                    notes: row.get(7)?,
                })
            })
            .map_err(query_err)?;

        let mut trades = Vec::new();
        for row in mapped {
            trades.push(row.map_err(query_err)?);
        }

        Ok(trades)
    }

    fn count_trades(&self) -> Result<usize, JournalError> {
        let conn = self.conn()?;
        let count: i64 = conn
            .query_row("SELECT count(*) FROM trades", [], |row| row.get(0))
            .map_err(query_err)?;
        Ok(count as usize)
    }
}
