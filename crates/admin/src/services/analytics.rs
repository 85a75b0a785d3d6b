//! Analytics aggregation service.
//!
//! Computes the dashboard figures from an injected [`AnalyticsStore`]:
//! 1. Store-wide summary (users, products, order count, revenue)
//! 2. Per-day sales and revenue over a date range, gap-filled so every
//!    calendar day of the range has a bucket
//! 3. The combined dashboard report for a trailing window
//!
//! Nothing is cached; every call reads the store. Store failures are logged
//! with the name of the failing operation and returned unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, error, instrument};

use shopfront_core::analytics::fill_daily_series;
use shopfront_core::calendar::utc_day;
use shopfront_core::{DailyBucket, DailyOrderTotals, DashboardReport, DayRange, OrderTotals, SalesSummary};

use crate::db::RepositoryError;

/// Default length of the dashboard's trailing window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Read-only data access required by the analytics service.
///
/// Implemented by [`crate::db::PgAnalyticsStore`] in production and by
/// in-memory fakes in tests.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Count all user accounts.
    async fn count_users(&self) -> Result<u64, RepositoryError>;

    /// Count all catalog products.
    async fn count_products(&self) -> Result<u64, RepositoryError>;

    /// Order count and revenue over every order ever placed.
    async fn order_totals(&self) -> Result<OrderTotals, RepositoryError>;

    /// Orders with `start <= created_at <= end`, grouped by UTC calendar day.
    ///
    /// Days without orders are omitted.
    async fn daily_order_totals(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyOrderTotals>, RepositoryError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<T: AnalyticsStore + ?Sized> AnalyticsStore for Arc<T> {
    async fn count_users(&self) -> Result<u64, RepositoryError> {
        (**self).count_users().await
    }

    async fn count_products(&self) -> Result<u64, RepositoryError> {
        (**self).count_products().await
    }

    async fn order_totals(&self) -> Result<OrderTotals, RepositoryError> {
        (**self).order_totals().await
    }

    async fn daily_order_totals(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyOrderTotals>, RepositoryError> {
        (**self).daily_order_totals(start, end).await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        (**self).ping().await
    }
}

/// Log a failed store operation and pass the error through.
fn log_failure(operation: &'static str) -> impl Fn(&RepositoryError) {
    move |e| error!(operation, error = %e, "Analytics query failed")
}

/// Analytics aggregation over a borrowed store.
pub struct AnalyticsService<'a> {
    store: &'a dyn AnalyticsStore,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new analytics service.
    #[must_use]
    pub const fn new(store: &'a dyn AnalyticsStore) -> Self {
        Self { store }
    }

    /// Compute the store-wide summary counters.
    ///
    /// With no orders, `total_sales` and `total_revenue` are both zero.
    ///
    /// # Errors
    ///
    /// Returns the store's `RepositoryError` unchanged if any query fails.
    #[instrument(skip(self))]
    pub async fn compute_summary(&self) -> Result<SalesSummary, RepositoryError> {
        let users = self
            .store
            .count_users()
            .await
            .inspect_err(log_failure("count_users"))?;
        let products = self
            .store
            .count_products()
            .await
            .inspect_err(log_failure("count_products"))?;
        let orders = self
            .store
            .order_totals()
            .await
            .inspect_err(log_failure("order_totals"))?;

        debug!(users, products, orders = orders.count, "Computed sales summary");
        Ok(SalesSummary::new(users, products, orders))
    }

    /// Compute one bucket per UTC calendar day from `start`'s day through
    /// `end`'s day, inclusive, in ascending order.
    ///
    /// Orders are selected by `start <= created_at <= end`. Days without
    /// orders get `sales = 0` and `revenue = 0`. If `start` is after `end`
    /// the result is empty and the store is not queried.
    ///
    /// # Errors
    ///
    /// Returns the store's `RepositoryError` unchanged if the query fails.
    #[instrument(skip(self))]
    pub async fn compute_daily_series(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyBucket>, RepositoryError> {
        if start > end {
            debug!("Reversed date range, returning empty series");
            return Ok(Vec::new());
        }

        let range = DayRange::from_instants(start, end);
        let totals = self
            .store
            .daily_order_totals(start, end)
            .await
            .inspect_err(log_failure("daily_order_totals"))?;

        let series = fill_daily_series(&range, totals)
            .map_err(RepositoryError::from)
            .inspect_err(log_failure("fill_daily_series"))?;
        debug!(days = series.len(), "Computed daily sales series");
        Ok(series)
    }

    /// Build the dashboard payload for a trailing window of `window_days`
    /// days ending at `now`.
    ///
    /// The window starts at midnight UTC `window_days - 1` days before
    /// `now`'s day, so a seven-day window yields seven buckets ending today.
    ///
    /// # Errors
    ///
    /// Returns the first `RepositoryError` from either computation.
    #[instrument(skip(self))]
    pub async fn dashboard_report(
        &self,
        now: DateTime<Utc>,
        window_days: u32,
    ) -> Result<DashboardReport, RepositoryError> {
        let window = DayRange::trailing(window_days, utc_day(now));

        let (analytics_data, daily_sales_data) = tokio::try_join!(
            self.compute_summary(),
            self.compute_daily_series(window.first_instant(), now)
        )?;

        Ok(DashboardReport {
            analytics_data,
            daily_sales_data,
        })
    }
}
