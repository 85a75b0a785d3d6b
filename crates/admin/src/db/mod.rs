//! Database operations for the shop `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `shop.user` - Storefront accounts (customers and administrators)
//! - `shop.product` - Catalog products
//! - `shop.order` - Completed purchases (`total_amount`, `created_at`)
//! - `tower_sessions.session` - Session storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p shopfront-cli -- migrate
//! ```

pub mod analytics;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use shopfront_core::AnalyticsError;

pub use analytics::PgAnalyticsStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl From<AnalyticsError> for RepositoryError {
    fn from(e: AnalyticsError) -> Self {
        Self::DataCorruption(e.to_string())
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_analytics_overflow_is_data_corruption() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let err = RepositoryError::from(AnalyticsError::DailyRevenueOverflow(day));

        assert!(matches!(err, RepositoryError::DataCorruption(_)));
        assert_eq!(err.to_string(), "data corruption: revenue overflow on 2024-06-01");
    }
}
