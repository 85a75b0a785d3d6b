//! Aggregate queries backing the analytics dashboard.
//!
//! Every query here is read-only. Day grouping happens in SQL on
//! `created_at AT TIME ZONE 'UTC'`, the same reference used by
//! [`shopfront_core::calendar`] when building the calendar sequence.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use shopfront_core::{DailyOrderTotals, OrderTotals};

use super::RepositoryError;
use crate::services::analytics::AnalyticsStore;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for the store-wide order aggregate.
#[derive(Debug, sqlx::FromRow)]
struct OrderTotalsRow {
    sales: i64,
    revenue: Decimal,
}

/// Internal row type for the per-day order aggregate.
#[derive(Debug, sqlx::FromRow)]
struct DailyOrderTotalsRow {
    day: NaiveDate,
    sales: i64,
    revenue: Decimal,
}

impl TryFrom<OrderTotalsRow> for OrderTotals {
    type Error = RepositoryError;

    fn try_from(row: OrderTotalsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            count: non_negative(row.sales, "order count")?,
            revenue: row.revenue,
        })
    }
}

impl TryFrom<DailyOrderTotalsRow> for DailyOrderTotals {
    type Error = RepositoryError;

    fn try_from(row: DailyOrderTotalsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            day: row.day,
            totals: OrderTotals {
                count: non_negative(row.sales, "daily order count")?,
                revenue: row.revenue,
            },
        })
    }
}

/// Convert a SQL `COUNT(*)` into an unsigned count.
fn non_negative(value: i64, what: &str) -> Result<u64, RepositoryError> {
    u64::try_from(value)
        .map_err(|_| RepositoryError::DataCorruption(format!("negative {what}: {value}")))
}

// =============================================================================
// Store
// =============================================================================

/// `PostgreSQL` implementation of [`AnalyticsStore`].
#[derive(Debug, Clone)]
pub struct PgAnalyticsStore {
    pool: PgPool,
}

impl PgAnalyticsStore {
    /// Create a new store over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsStore for PgAnalyticsStore {
    async fn count_users(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM shop."user""#)
            .fetch_one(&self.pool)
            .await?;
        non_negative(count, "user count")
    }

    async fn count_products(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shop.product")
            .fetch_one(&self.pool)
            .await?;
        non_negative(count, "product count")
    }

    async fn order_totals(&self) -> Result<OrderTotals, RepositoryError> {
        let row = sqlx::query_as::<_, OrderTotalsRow>(
            r#"
            SELECT COUNT(*) AS sales,
                   COALESCE(SUM(total_amount), 0) AS revenue
            FROM shop."order"
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn daily_order_totals(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyOrderTotals>, RepositoryError> {
        let rows = sqlx::query_as::<_, DailyOrderTotalsRow>(
            r#"
            SELECT (created_at AT TIME ZONE 'UTC')::date AS day,
                   COUNT(*) AS sales,
                   COALESCE(SUM(total_amount), 0) AS revenue
            FROM shop."order"
            WHERE created_at >= $1 AND created_at <= $2
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
