//! Concrete adapter implementations for ports.

pub mod schema;
pub mod sqlite_ledger;
pub mod csv_seed;
pub mod file_config_adapter;
#[cfg(feature = "web")]
pub mod web;
