//! Integration test support for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process HTTP tests (no database required)
//! cargo test -p shopfront-integration-tests
//!
//! # Database-backed tests (requires a migrated database in ADMIN_DATABASE_URL)
//! cargo test -p shopfront-integration-tests -- --ignored
//! ```
//!
//! The admin router is driven in-process with `tower::ServiceExt::oneshot`,
//! backed by [`InMemoryStore`] and a `MemoryStore` session layer.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

use shopfront_admin::config::AdminConfig;
use shopfront_admin::db::RepositoryError;
use shopfront_admin::middleware::set_current_user;
use shopfront_admin::models::CurrentUser;
use shopfront_admin::routes;
use shopfront_admin::services::AnalyticsStore;
use shopfront_admin::state::AppState;
use shopfront_core::calendar::utc_day;
use shopfront_core::{DailyOrderTotals, OrderTotals, UserId, UserRole};

/// In-memory [`AnalyticsStore`] over a fixed list of orders.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub users: u64,
    pub products: u64,
    pub orders: Vec<(DateTime<Utc>, Decimal)>,
    /// Every query fails with a database error.
    pub failing: bool,
    calls: AtomicUsize,
}

impl InMemoryStore {
    /// A store with the given counters and no orders.
    #[must_use]
    pub fn new(users: u64, products: u64) -> Self {
        Self {
            users,
            products,
            ..Self::default()
        }
    }

    /// Add an order placed at `created_at`.
    #[must_use]
    pub fn with_order(mut self, created_at: DateTime<Utc>, amount: Decimal) -> Self {
        self.orders.push((created_at, amount));
        self
    }

    /// Make every query fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Number of queries served so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl AnalyticsStore for InMemoryStore {
    async fn count_users(&self) -> Result<u64, RepositoryError> {
        self.check()?;
        Ok(self.users)
    }

    async fn count_products(&self) -> Result<u64, RepositoryError> {
        self.check()?;
        Ok(self.products)
    }

    async fn order_totals(&self) -> Result<OrderTotals, RepositoryError> {
        self.check()?;
        Ok(self
            .orders
            .iter()
            .try_fold(OrderTotals::ZERO, |acc, (_, amount)| acc.with_order(*amount))?)
    }

    async fn daily_order_totals(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyOrderTotals>, RepositoryError> {
        self.check()?;

        let mut grouped = HashMap::new();
        for (created_at, amount) in &self.orders {
            if *created_at < start || *created_at > end {
                continue;
            }
            let totals = grouped.entry(utc_day(*created_at)).or_insert(OrderTotals::ZERO);
            *totals = totals.with_order(*amount)?;
        }

        let mut rows: Vec<DailyOrderTotals> = grouped
            .into_iter()
            .map(|(day, totals)| DailyOrderTotals { day, totals })
            .collect();
        rows.sort_by_key(|row| row.day);
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check()
    }
}

/// Admin configuration for in-process tests.
///
/// # Panics
///
/// Panics if the built-in test values are rejected.
#[must_use]
pub fn test_config(window_days: u32) -> AdminConfig {
    let window = window_days.to_string();
    AdminConfig::from_lookup(|key| match key {
        "ADMIN_DATABASE_URL" => Some("postgres://localhost/shop_test".to_string()),
        "ADMIN_BASE_URL" => Some("http://localhost:3001".to_string()),
        "ANALYTICS_WINDOW_DAYS" => Some(window.clone()),
        _ => None,
    })
    .expect("valid test configuration")
}

/// An account with the given role.
#[must_use]
pub fn account(role: UserRole) -> CurrentUser {
    CurrentUser {
        id: UserId::new(1),
        name: "Test Account".to_string(),
        role,
    }
}

/// Build the admin router with an optional logged-in account.
#[must_use]
pub fn app(store: Arc<InMemoryStore>, user: Option<CurrentUser>, window_days: u32) -> Router {
    let state = AppState::new(test_config(window_days), store);
    let mut router = routes::routes();
    if let Some(user) = user {
        router = router.layer(middleware::from_fn_with_state(user, log_in));
    }
    router
        .layer(SessionManagerLayer::new(MemoryStore::default()))
        .with_state(state)
}

/// Stores the account in the request's session before the handler runs.
async fn log_in(
    State(user): State<CurrentUser>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    set_current_user(&session, &user)
        .await
        .expect("memory session insert");
    next.run(request).await
}

/// A GET request for `uri`.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    axum::http::Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body cannot be read or is not JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("JSON body")
}
