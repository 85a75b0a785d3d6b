//! Analytics dashboard route handler.

use axum::{Json, extract::State};
use chrono::Utc;
use tracing::instrument;

use shopfront_core::DashboardReport;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::services::AnalyticsService;
use crate::state::AppState;

/// Summary counters plus the trailing daily sales series.
///
/// The series covers the configured number of UTC calendar days ending
/// today, with zero-filled buckets for days without orders.
#[instrument(skip_all)]
pub async fn dashboard(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<DashboardReport>> {
    let service = AnalyticsService::new(state.analytics_store());
    let report = service
        .dashboard_report(Utc::now(), state.config().analytics_window_days)
        .await?;

    tracing::debug!(
        admin_id = %admin.id,
        days = report.daily_sales_data.len(),
        total_sales = report.analytics_data.total_sales,
        "Dashboard report assembled"
    );

    Ok(Json(report))
}
