//! Business logic services for admin.
//!
//! # Services
//!
//! - `analytics` - Dashboard summary counters and daily sales series

pub mod analytics;

pub use analytics::{AnalyticsService, AnalyticsStore, DEFAULT_WINDOW_DAYS};
