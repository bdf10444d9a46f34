//! HTTP request handlers for the web adapter.

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::equity::compute_equity_curve;
use crate::domain::trade::Trade;

use super::templates::{DashboardTemplate, TradeRow};
use super::{AppState, WebError, chart, is_htmx_request};

fn render_dashboard(state: &AppState) -> Result<DashboardTemplate, WebError> {
    let trades = state.ledger.list_trades().map_err(WebError::from)?;
    let curve = compute_equity_curve(&trades);

    Ok(DashboardTemplate {
        rows: trades.iter().map(TradeRow::from_trade).collect(),
        chart_svg: chart::render_equity_svg(&curve),
    })
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let template = render_dashboard(&state)?;

    if is_htmx_request(&headers) {
        Ok(Html(template.fragment()).into_response())
    } else {
        let html = askama::Template::render(&template)
            .map_err(|e| WebError::internal(e.to_string()))?;
        Ok(Html(html).into_response())
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct TradeFormData {
    pub date: String,
    pub ticker: String,
    #[serde(default)]
    pub entry: String,
    #[serde(default)]
    pub exit: String,
    pub quantity: String,
    pub price: String,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub notes: String,
}

fn parse_optional_price(raw: &str, name: &str) -> Result<Option<f64>, WebError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| WebError::bad_request(format!("Invalid {name} price")))
}

fn parse_trade_form(form: TradeFormData) -> Result<Trade, WebError> {
    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|_| WebError::bad_request("Invalid date format, expected YYYY-MM-DD"))?;

    let ticker = form.ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(WebError::bad_request("Ticker is required"));
    }

    let quantity: f64 = form
        .quantity
        .trim()
        .parse()
        .map_err(|_| WebError::bad_request("Invalid quantity"))?;
    let price: f64 = form
        .price
        .trim()
        .parse()
        .map_err(|_| WebError::bad_request("Invalid price"))?;

    Ok(Trade {
        date,
        ticker,
        entry: parse_optional_price(&form.entry, "entry")?,
        exit: parse_optional_price(&form.exit, "exit")?,
        quantity,
        price,
        strategy: form.strategy.trim().to_string(),
        notes: form.notes.trim().to_string(),
    })
}

/// Append one trade. Validation failures return 400 before anything touches
/// the ledger, so a rejected submission leaves the journal unchanged.
pub async fn submit_trade(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<TradeFormData>,
) -> Result<Response, WebError> {
    let trade = parse_trade_form(form)?;
    state.ledger.insert_trade(&trade).map_err(WebError::from)?;

    if is_htmx_request(&headers) {
        let template = render_dashboard(&state)?;
        Ok(Html(template.fragment()).into_response())
    } else {
        Ok(Redirect::to("/").into_response())
    }
}

pub async fn not_found() -> WebError {
    WebError::not_found("page not found")
}
