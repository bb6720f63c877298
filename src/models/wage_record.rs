//! Wage record model.
//!
//! A [`WageRecord`] is one dated earnings entry for an employee, as supplied
//! by the record store. Records are immutable once written and their periods
//! must not overlap for the same employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DateRange, EmployeeId};
use crate::error::{EngineError, EngineResult};

/// Earnings for an employee over an inclusive date period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageRecord {
    /// The employee the earnings belong to.
    pub employee_id: EmployeeId,
    /// First day of the earnings period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the earnings period (inclusive).
    pub period_end: NaiveDate,
    /// Total amount earned over the period.
    pub amount: Decimal,
}

impl WageRecord {
    /// Returns the record's period as a [`DateRange`].
    ///
    /// The range is not validated here; call [`WageRecord::validate`] first
    /// when the record comes from an untrusted source.
    pub fn period(&self) -> DateRange {
        DateRange {
            start: self.period_start,
            end: self.period_end,
        }
    }

    /// Returns the number of calendar days the record covers.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::WageRecord;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = WageRecord {
    ///     employee_id: 1,
    ///     period_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     period_end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    ///     amount: Decimal::new(310000, 2),
    /// };
    /// assert_eq!(record.days(), 31);
    /// ```
    pub fn days(&self) -> i64 {
        self.period().days()
    }

    /// Checks that the period is ordered and the amount is non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.period_end < self.period_start {
            return Err(EngineError::InvalidWageRecord {
                employee_id: self.employee_id,
                message: format!(
                    "period end {} precedes period start {}",
                    self.period_end, self.period_start
                ),
            });
        }
        if self.amount < Decimal::ZERO {
            return Err(EngineError::InvalidWageRecord {
                employee_id: self.employee_id,
                message: format!("amount {} is negative", self.amount),
            });
        }
        Ok(())
    }
}
