//! Integration tests for the admin analytics API.
//!
//! Runs the admin router in-process against an in-memory store; no
//! database or running server is needed.

#![allow(clippy::unwrap_used)]

use std::str::FromStr;
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use shopfront_core::UserRole;
use shopfront_integration_tests::{InMemoryStore, account, app, body_json, get};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn dates(body: &Value) -> Vec<NaiveDate> {
    body["dailySalesData"]
        .as_array()
        .unwrap()
        .iter()
        .map(|bucket| NaiveDate::from_str(bucket["date"].as_str().unwrap()).unwrap())
        .collect()
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_admin_gets_summary_and_trailing_week() {
    let now = Utc::now();
    // Placed an hour ago so a UTC midnight during the test keeps them in the window
    let placed = now - Duration::hours(1);
    let store = Arc::new(
        InMemoryStore::new(5, 12)
            .with_order(placed, dec("100.00"))
            .with_order(placed, dec("50.00"))
            .with_order(now - Duration::days(30), dec("20.00")),
    );

    let response = app(store, Some(account(UserRole::Admin)), 7)
        .oneshot(get("/api/analytics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let summary = &body["analyticsData"];
    assert_eq!(summary["users"], 5);
    assert_eq!(summary["products"], 12);
    assert_eq!(summary["totalSales"], 3);
    assert!(summary["totalRevenue"].is_number());
    assert_eq!(summary["totalRevenue"].as_f64(), Some(170.0));

    let days = dates(&body);
    assert_eq!(days.len(), 7);
    for pair in days.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::days(1));
    }

    let buckets = body["dailySalesData"].as_array().unwrap();
    let placed_day = buckets
        .iter()
        .find(|bucket| bucket["date"] == placed.date_naive().to_string())
        .unwrap();
    assert_eq!(placed_day["sales"], 2);
    assert_eq!(placed_day["revenue"].as_f64(), Some(150.0));
}

#[tokio::test]
async fn test_days_without_orders_are_zero_filled() {
    let store = Arc::new(InMemoryStore::new(1, 1));

    let response = app(store, Some(account(UserRole::Admin)), 7)
        .oneshot(get("/api/analytics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["analyticsData"]["totalSales"], 0);
    assert_eq!(body["analyticsData"]["totalRevenue"].as_f64(), Some(0.0));

    let buckets = body["dailySalesData"].as_array().unwrap();
    assert_eq!(buckets.len(), 7);
    for bucket in buckets {
        assert_eq!(bucket["sales"], 0);
        assert_eq!(bucket["revenue"].as_f64(), Some(0.0));
    }
}

#[tokio::test]
async fn test_window_length_follows_configuration() {
    let store = Arc::new(InMemoryStore::new(0, 0));

    let response = app(store, Some(account(UserRole::Admin)), 30)
        .oneshot(get("/api/analytics"))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(dates(&body).len(), 30);
}

// ============================================================================
// Authorization
// ============================================================================

#[tokio::test]
async fn test_anonymous_request_is_unauthorized() {
    let store = Arc::new(InMemoryStore::new(5, 12));

    let response = app(Arc::clone(&store), None, 7)
        .oneshot(get("/api/analytics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().starts_with("Unauthorized"));
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_customer_is_forbidden() {
    let store = Arc::new(InMemoryStore::new(5, 12));

    let response = app(Arc::clone(&store), Some(account(UserRole::Customer)), 7)
        .oneshot(get("/api/analytics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(store.calls(), 0);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_store_failure_returns_generic_error() {
    let store = Arc::new(InMemoryStore::new(5, 12).failing());

    let response = app(store, Some(account(UserRole::Admin)), 7)
        .oneshot(get("/api/analytics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "message": "Internal server error" }));
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let store = Arc::new(InMemoryStore::new(0, 0));

    let response = app(store, Some(account(UserRole::Admin)), 7)
        .oneshot(get("/api/orders"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Not found: /api/orders");
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_needs_no_login() {
    let store = Arc::new(InMemoryStore::new(0, 0));

    let response = app(store, None, 7).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reflects_store() {
    let healthy = Arc::new(InMemoryStore::new(0, 0));
    let response = app(healthy, None, 7)
        .oneshot(get("/health/ready"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let broken = Arc::new(InMemoryStore::new(0, 0).failing());
    let response = app(broken, None, 7)
        .oneshot(get("/health/ready"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
