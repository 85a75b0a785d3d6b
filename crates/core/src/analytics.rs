//! Sales analytics value types.
//!
//! These are the shapes returned by the admin dashboard API. They are derived
//! per request and never persisted. Monetary amounts are summed as `Decimal`
//! and serialize as JSON numbers, which is what the dashboard charts expect.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::DayRange;

/// Errors from combining order totals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// Store-wide revenue exceeded the range of `Decimal`.
    #[error("revenue overflow")]
    RevenueOverflow,

    /// A single day's revenue exceeded the range of `Decimal`.
    #[error("revenue overflow on {0}")]
    DailyRevenueOverflow(NaiveDate),
}

/// Order count and revenue over some set of orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Number of orders.
    pub count: u64,
    /// Sum of order amounts.
    pub revenue: Decimal,
}

impl OrderTotals {
    /// Totals for a set with no orders.
    pub const ZERO: Self = Self {
        count: 0,
        revenue: Decimal::ZERO,
    };

    /// Fold another order amount into the totals.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::RevenueOverflow` if the revenue sum overflows.
    pub fn with_order(self, amount: Decimal) -> Result<Self, AnalyticsError> {
        self.merge(Self {
            count: 1,
            revenue: amount,
        })
        .ok_or(AnalyticsError::RevenueOverflow)
    }

    /// Sum two sets of totals, or `None` if the revenue overflows.
    #[must_use]
    pub fn merge(self, other: Self) -> Option<Self> {
        Some(Self {
            count: self.count.saturating_add(other.count),
            revenue: self.revenue.checked_add(other.revenue)?,
        })
    }
}

/// Store-wide counters shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Number of registered users.
    pub users: u64,
    /// Number of catalog products.
    pub products: u64,
    /// Number of orders ever placed.
    pub total_sales: u64,
    /// Sum of all order amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

impl SalesSummary {
    /// Combine entity counts with order totals.
    #[must_use]
    pub const fn new(users: u64, products: u64, orders: OrderTotals) -> Self {
        Self {
            users,
            products,
            total_sales: orders.count,
            total_revenue: orders.revenue,
        }
    }
}

/// Grouped order totals for one UTC calendar day, as returned by the store.
///
/// Only days with at least one order appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOrderTotals {
    /// The UTC calendar day.
    pub day: NaiveDate,
    /// Orders and revenue on that day.
    pub totals: OrderTotals,
}

/// One point of the daily sales chart.
///
/// `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub sales: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

impl DailyBucket {
    /// A bucket for a day with no orders.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sales: 0,
            revenue: Decimal::ZERO,
        }
    }

    const fn from_totals(date: NaiveDate, totals: OrderTotals) -> Self {
        Self {
            date,
            sales: totals.count,
            revenue: totals.revenue,
        }
    }
}

/// Reconcile grouped per-day totals against every day of `range`.
///
/// Produces exactly one bucket per day of the range in ascending order. Days
/// missing from `totals` get a zero bucket. Totals for days outside the range
/// are ignored, and repeated days are merged.
///
/// # Errors
///
/// Returns `AnalyticsError::DailyRevenueOverflow` if merging repeated days
/// overflows that day's revenue.
pub fn fill_daily_series<I>(range: &DayRange, totals: I) -> Result<Vec<DailyBucket>, AnalyticsError>
where
    I: IntoIterator<Item = DailyOrderTotals>,
{
    let mut by_day: HashMap<NaiveDate, OrderTotals> = HashMap::new();
    for entry in totals {
        if !range.contains(entry.day) {
            continue;
        }
        let slot = by_day.entry(entry.day).or_default();
        *slot = slot
            .merge(entry.totals)
            .ok_or(AnalyticsError::DailyRevenueOverflow(entry.day))?;
    }

    Ok(range
        .days()
        .map(|date| {
            by_day
                .get(&date)
                .map_or_else(|| DailyBucket::empty(date), |t| DailyBucket::from_totals(date, *t))
        })
        .collect())
}

/// The combined payload served to the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub analytics_data: SalesSummary,
    pub daily_sales_data: Vec<DailyBucket>,
}
