//! Database-backed tests for the `PostgreSQL` analytics store.
//!
//! These tests require a migrated database in `ADMIN_DATABASE_URL`
//! (`sf-cli migrate`). They insert rows dated in 1999, then delete them.
//!
//! Run with: cargo test -p shopfront-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use shopfront_admin::db::PgAnalyticsStore;
use shopfront_admin::services::{AnalyticsService, AnalyticsStore};

async fn pool() -> PgPool {
    let url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("ADMIN_DATABASE_URL must be set for database tests");
    PgPool::connect(&url).await.unwrap()
}

#[tokio::test]
#[ignore = "Requires a migrated PostgreSQL database"]
async fn test_daily_series_groups_by_utc_day() {
    let pool = pool().await;
    let email = format!("analytics-{}@test.invalid", Utc::now().timestamp_nanos_opt().unwrap());

    let user_id: i32 = sqlx::query_scalar(
        r#"INSERT INTO shop."user" (name, email) VALUES ('Analytics Test', $1) RETURNING id"#,
    )
    .bind(&email)
    .fetch_one(&pool)
    .await
    .unwrap();

    let orders = [
        (Utc.with_ymd_and_hms(1999, 1, 30, 0, 0, 0).unwrap(), "10.00"),
        (Utc.with_ymd_and_hms(1999, 1, 30, 23, 59, 59).unwrap(), "25.75"),
        (Utc.with_ymd_and_hms(1999, 2, 1, 12, 0, 0).unwrap(), "5.00"),
        (Utc.with_ymd_and_hms(1999, 2, 2, 23, 59, 59).unwrap(), "7.00"),
        (Utc.with_ymd_and_hms(1999, 2, 3, 0, 0, 0).unwrap(), "99.00"),
    ];
    for (created_at, amount) in orders {
        sqlx::query(
            r#"INSERT INTO shop."order" (user_id, total_amount, created_at) VALUES ($1, $2, $3)"#,
        )
        .bind(user_id)
        .bind(Decimal::from_str(amount).unwrap())
        .bind(created_at)
        .execute(&pool)
        .await
        .unwrap();
    }

    let store = PgAnalyticsStore::new(pool.clone());
    store.ping().await.unwrap();

    let series = AnalyticsService::new(&store)
        .compute_daily_series(
            Utc.with_ymd_and_hms(1999, 1, 30, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(1999, 2, 2, 23, 59, 59).unwrap(),
        )
        .await;

    sqlx::query(r#"DELETE FROM shop."order" WHERE user_id = $1"#)
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(r#"DELETE FROM shop."user" WHERE id = $1"#)
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let series = series.unwrap();
    let days: Vec<NaiveDate> = series.iter().map(|b| b.date).collect();
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(1999, 1, 30).unwrap(),
            NaiveDate::from_ymd_opt(1999, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(1999, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(1999, 2, 2).unwrap(),
        ]
    );

    let sales: Vec<u64> = series.iter().map(|b| b.sales).collect();
    assert_eq!(sales, vec![2, 0, 1, 1]);
    assert_eq!(series[0].revenue, Decimal::from_str("35.75").unwrap());
    assert_eq!(series[1].revenue, Decimal::ZERO);
    // The order exactly at the range end lands in the last bucket
    assert_eq!(series[3].revenue, Decimal::from_str("7.00").unwrap());
}

#[tokio::test]
#[ignore = "Requires a migrated PostgreSQL database"]
async fn test_summary_counts_are_consistent() {
    let pool = pool().await;
    let store = PgAnalyticsStore::new(pool);

    let summary = AnalyticsService::new(&store).compute_summary().await.unwrap();
    let totals = store.order_totals().await.unwrap();

    assert_eq!(summary.total_sales, totals.count);
    assert_eq!(summary.total_revenue, totals.revenue);
    assert!(summary.total_revenue >= Decimal::ZERO);
}
