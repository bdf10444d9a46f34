//! Web dashboard adapter.
//!
//! Axum server with an HTMX-friendly frontend: the trade ledger as a table,
//! a submission form, and the derived equity curve as an inline SVG. State is
//! read from the ledger on every request; nothing is cached across requests.

pub mod chart;
mod error;
mod handlers;
mod templates;

pub use error::WebError;
pub use handlers::*;
pub use templates::*;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::ports::ledger_port::LedgerPort;

pub struct AppState {
    pub ledger: Arc<dyn LedgerPort + Send + Sync>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/trades", post(handlers::submit_trade))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
}

fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("HX-Request").is_some()
}
