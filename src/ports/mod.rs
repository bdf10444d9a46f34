//! Port traits decoupling the domain from concrete adapters.

pub mod ledger_port;
pub mod config_port;
