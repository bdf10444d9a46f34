//! Equity curve derivation.
//!
//! Pure transform from an ordered trade sequence to a cumulative equity
//! series. Callers guarantee ascending-by-date order; this module never
//! touches storage.

use chrono::NaiveDate;

use super::trade::Trade;

/// One point on the derived equity curve. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub equity: f64,
}

/// Walk `trades` in the order given and emit one point per trade, where
/// `equity` at position `i` is the running sum of `quantity * price` over
/// positions `0..=i`. An empty input yields an empty curve, not a zero point.
pub fn compute_equity_curve(trades: &[Trade]) -> Vec<EquityPoint> {
    let mut curve = Vec::with_capacity(trades.len());
    let mut equity = 0.0;

    for trade in trades {
        equity += trade.notional();
        curve.push(EquityPoint {
            date: trade.date,
            equity,
        });
    }

    curve
}

/// Split a curve into parallel date/equity sequences for plotting.
pub fn curve_series(curve: &[EquityPoint]) -> (Vec<NaiveDate>, Vec<f64>) {
    let dates = curve.iter().map(|p| p.date).collect();
    let values = curve.iter().map(|p| p.equity).collect();
    (dates, values)
}
