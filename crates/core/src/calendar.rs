//! Calendar-day ranges.
//!
//! All day arithmetic in Shopfront is done on `chrono::NaiveDate` values
//! interpreted in UTC. Timestamps are reduced to their UTC calendar day with
//! [`utc_day`] before any grouping or comparison, so query boundaries and
//! bucket keys always agree.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// The UTC calendar day of a timestamp.
#[must_use]
pub fn utc_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Midnight UTC at the start of `day`.
#[must_use]
pub fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// The last representable instant of `day` in UTC (23:59:59.999999999).
#[must_use]
pub fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.succ_opt()
        .map_or(DateTime::<Utc>::MAX_UTC, |next| {
            start_of_day(next) - chrono::Duration::nanoseconds(1)
        })
}

/// An inclusive range of calendar days.
///
/// A range whose start falls after its end is empty rather than invalid:
/// [`DayRange::len`] returns zero and [`DayRange::days`] yields nothing.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shopfront_core::DayRange;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let feb_01 = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
///
/// let range = DayRange::new(jan_31, feb_01);
/// assert_eq!(range.len(), 2);
/// assert_eq!(range.days().collect::<Vec<_>>(), vec![jan_31, feb_01]);
///
/// assert!(DayRange::new(feb_01, jan_31).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayRange {
    /// Create a range from `start` to `end`, both inclusive.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The days covered by two instants, each reduced to its UTC day.
    #[must_use]
    pub fn from_instants(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(utc_day(start), utc_day(end))
    }

    /// A trailing window of `days` days ending on (and including) `today`.
    ///
    /// A seven-day window ending 2024-03-07 starts on 2024-03-01. A zero-day
    /// window is treated as a single day.
    #[must_use]
    pub fn trailing(days: u32, today: NaiveDate) -> Self {
        let back = Days::new(u64::from(days.saturating_sub(1)));
        let start = today.checked_sub_days(back).unwrap_or(NaiveDate::MIN);
        Self::new(start, today)
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, counting both endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        let span = self.end.signed_duration_since(self.start).num_days();
        usize::try_from(span).map_or(0, |days| days + 1)
    }

    /// Whether the range contains no days (start is after end).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// The day `offset` days after the start, if it lies inside the range.
    #[must_use]
    pub fn nth(&self, offset: usize) -> Option<NaiveDate> {
        if offset >= self.len() {
            return None;
        }
        self.start
            .checked_add_days(Days::new(u64::try_from(offset).ok()?))
    }

    /// Iterate over every day in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.len()).filter_map(move |offset| self.nth(offset))
    }

    /// Whether `day` lies within the range.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Midnight UTC at the start of the first day.
    #[must_use]
    pub fn first_instant(&self) -> DateTime<Utc> {
        start_of_day(self.start)
    }

    /// The last instant of the final day, in UTC.
    #[must_use]
    pub fn last_instant(&self) -> DateTime<Utc> {
        end_of_day(self.end)
    }
}
