//! Core domain types and logic.

pub mod trade;
pub mod equity;
pub mod error;
