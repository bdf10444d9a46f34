#![cfg(feature = "web")]
//! Web handler integration tests.
//!
//! Tests cover:
//! - Dashboard renders the trade table and equity SVG
//! - HTMX fragment vs full page responses
//! - Trade submission appends a row visible on the next read
//! - Malformed submissions return 400 and leave the ledger unchanged
//! - Storage failures surface as 500s
//! - Unknown routes fall back to 404

mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use common::*;
use tradejournal::adapters::web::{AppState, build_router};
use tradejournal::ports::ledger_port::LedgerPort;

fn app_with(ledger: Arc<MockLedger>) -> Router {
    build_router(AppState {
        ledger: ledger.clone(),
    })
}

fn seeded_ledger() -> Arc<MockLedger> {
    Arc::new(MockLedger::with_trades(vec![
        make_trade("2024-01-01", "BHP", 10.0, 5.0),
        make_trade("2024-01-02", "CBA", -10.0, 6.0),
    ]))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn dashboard_renders_table_and_chart() {
    let app = app_with(seeded_ledger());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("<td>BHP</td>"));
    assert!(body.contains("<td>CBA</td>"));
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn dashboard_empty_ledger_renders_placeholder() {
    let app = app_with(Arc::new(MockLedger::new()));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("No trades recorded yet"));
    assert!(!body.contains("<svg"));
}

#[tokio::test]
async fn htmx_request_gets_fragment_not_full_page() {
    let app = app_with(seeded_ledger());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("HX-Request", "true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("id=\"journal\""));
    assert!(body.contains("<td>BHP</td>"));
}

#[tokio::test]
async fn submit_trade_appends_and_redirects() {
    let ledger = seeded_ledger();
    let app = app_with(ledger.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/trades")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(
                    "date=2024-01-03&ticker=rio&quantity=2&price=120.5&entry=120.5&exit=&strategy=trend&notes=added",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let trades = ledger.list_trades().unwrap();
    assert_eq!(trades.len(), 3);
    let added = trades.last().unwrap();
    assert_eq!(added.ticker, "RIO");
    assert_eq!(added.entry, Some(120.5));
    assert_eq!(added.exit, None);
}

#[tokio::test]
async fn htmx_submission_returns_updated_fragment() {
    let ledger = seeded_ledger();
    let app = app_with(ledger.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/trades")
                .header("HX-Request", "true")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(
                    "date=2024-01-03&ticker=RIO&quantity=2&price=120.5",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<td>RIO</td>"));
    assert_eq!(ledger.count_trades().unwrap(), 3);
}

#[tokio::test]
async fn malformed_submission_is_rejected_without_a_write() {
    let ledger = seeded_ledger();
    let app = app_with(ledger.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/trades")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(
                    "date=2024-01-03&ticker=RIO&quantity=two&price=120.5",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ledger.count_trades().unwrap(), 2);
}

#[tokio::test]
async fn storage_failure_surfaces_as_internal_error() {
    let app = app_with(Arc::new(MockLedger::failing("disk unavailable")));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("disk unavailable"));
}

#[tokio::test]
async fn unknown_route_falls_back_to_404() {
    let app = app_with(seeded_ledger());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/reports/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
