//! Shopfront Core - Shared types library.
//!
//! This crate provides common types used across all Shopfront components:
//! - `admin` - Internal administration panel and analytics API
//! - `cli` - Command-line tools for migrations and analytics reports
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and roles
//! - [`calendar`] - Calendar-day ranges and day arithmetic
//! - [`analytics`] - Sales summary and daily bucket types, gap-filling

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod calendar;
pub mod types;

pub use analytics::{AnalyticsError, DailyBucket, DailyOrderTotals, DashboardReport, OrderTotals, SalesSummary};
pub use calendar::DayRange;
pub use types::*;
