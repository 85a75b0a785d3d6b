//! Analytics report commands.
//!
//! Each command prints the same JSON the admin API would return, so
//! reports can be piped into other tools.
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use shopfront_admin::db::{self, PgAnalyticsStore};
use shopfront_admin::services::{AnalyticsService, DEFAULT_WINDOW_DAYS};
use shopfront_core::{DayRange, calendar::utc_day};

use super::{CliError, database_url};

async fn connect() -> Result<PgAnalyticsStore, CliError> {
    let database_url = database_url()?;
    let pool = db::create_pool(&database_url).await?;
    Ok(PgAnalyticsStore::new(pool))
}

#[allow(clippy::print_stdout)]
fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Resolve optional `--start`/`--end` against the default trailing window.
fn resolve_range(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> DayRange {
    let end = end.unwrap_or(today);
    let start = start.unwrap_or_else(|| DayRange::trailing(DEFAULT_WINDOW_DAYS, end).start());
    DayRange::new(start, end)
}

/// Print store-wide counters.
pub async fn summary() -> Result<(), CliError> {
    let store = connect().await?;
    let summary = AnalyticsService::new(&store).compute_summary().await?;
    print_json(&summary)
}

/// Print the gap-filled daily series for an inclusive day range.
pub async fn daily(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), CliError> {
    let range = resolve_range(start, end, utc_day(Utc::now()));
    if range.is_empty() {
        tracing::warn!(start = %range.start(), end = %range.end(), "Start is after end; series is empty");
    }

    let store = connect().await?;
    let series = AnalyticsService::new(&store)
        .compute_daily_series(range.first_instant(), range.last_instant())
        .await?;
    print_json(&series)
}

/// Print the combined dashboard payload.
pub async fn report(days: u32) -> Result<(), CliError> {
    let store = connect().await?;
    let report = AnalyticsService::new(&store)
        .dashboard_report(Utc::now(), days)
        .await?;
    print_json(&report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_range_defaults_to_trailing_week() {
        let range = resolve_range(None, None, date(2024, 3, 3));
        assert_eq!(range.start(), date(2024, 2, 26));
        assert_eq!(range.end(), date(2024, 3, 3));
        assert_eq!(range.len(), 7);
    }

    #[test]
    fn test_resolve_range_start_only() {
        let range = resolve_range(Some(date(2024, 1, 30)), None, date(2024, 2, 2));
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_resolve_range_end_only_trails_end() {
        let range = resolve_range(None, Some(date(2024, 1, 7)), date(2024, 6, 1));
        assert_eq!(range.start(), date(2024, 1, 1));
    }

    #[test]
    fn test_resolve_range_keeps_reversed_input() {
        let range = resolve_range(Some(date(2024, 2, 2)), Some(date(2024, 1, 30)), date(2024, 6, 1));
        assert!(range.is_empty());
    }
}
