//! Inclusive calendar date ranges.
//!
//! This module contains the [`DateRange`] type used for averaging windows
//! and wage record periods.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar date range, inclusive of both `start` and `end`.
///
/// # Example
///
/// ```
/// use vacation_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.days(), 31);
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting one whose end precedes its start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidDateRange {
                start,
                end,
                message: "end date precedes start date".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Builds the trailing window of `months` calendar months ending on `end`.
    ///
    /// The window starts the day after `end - months`, so a 12 month window
    /// ending 2026-01-31 covers 2025-02-01 through 2026-01-31. Month
    /// subtraction clamps to the last day of shorter months.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let window = DateRange::trailing_months(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(), 12).unwrap();
    /// assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    /// assert_eq!(window.days(), 365);
    /// ```
    pub fn trailing_months(end: NaiveDate, months: u32) -> EngineResult<Self> {
        let start = end
            .checked_sub_months(Months::new(months))
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .ok_or_else(|| EngineError::InvalidDateRange {
                start: NaiveDate::MIN,
                end,
                message: format!("cannot build a {} month window ending on {}", months, end),
            })?;
        Self::new(start, end)
    }

    /// Checks if a given date falls within this range (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the number of calendar days in the range, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns the part of this range that is also inside `other`, if any.
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(DateRange { start, end })
    }

    /// Returns true if the two ranges share at least one day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.intersection(other).is_some()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
