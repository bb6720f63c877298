//! Average daily wage calculation.
//!
//! This module computes an employee's average daily wage over the trailing
//! calculation period defined by [`PolicySettings`]. The denominator is the
//! number of days in the window that wage records actually cover, so an
//! employee with a short history is not penalized by a long nominal window.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::PolicySettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditWarning, DateRange, EmployeeId, NO_WAGE_HISTORY_WARNING, WageRecord,
};

/// The result of an average wage calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct AverageWageResult {
    /// The employee the average was computed for.
    pub employee_id: EmployeeId,
    /// Average earnings per covered day (unrounded). Zero when there is no history.
    pub average_daily_wage: Decimal,
    /// The averaging window.
    pub window: DateRange,
    /// Earnings attributed to the window after prorating partial records.
    pub total_earnings: Decimal,
    /// Days inside the window covered by at least one record.
    pub covered_days: i64,
    /// Number of records that overlapped the window.
    pub records_used: usize,
    /// True when no records fell inside the window.
    pub no_wage_history: bool,
    /// A `NO_WAGE_HISTORY` warning when `no_wage_history` is set.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl AverageWageResult {
    /// Returns the average wage, or `NoWageHistory` if there was none.
    ///
    /// Use this when a missing history should block the calculation rather
    /// than value it at zero.
    pub fn require_history(&self) -> EngineResult<Decimal> {
        if self.no_wage_history {
            return Err(EngineError::NoWageHistory {
                employee_id: self.employee_id,
                window_start: self.window.start,
                window_end: self.window.end,
            });
        }
        Ok(self.average_daily_wage)
    }
}

/// Computes an employee's average daily wage as of a date.
///
/// The window is the `calculation_period_months` calendar months ending on
/// `as_of_date` (see [`DateRange::trailing_months`]). Records belonging to
/// other employees are ignored. A record that lies partly outside the window
/// contributes `amount * days_inside / record_days`.
///
/// # Arguments
///
/// * `employee_id` - The employee to average
/// * `as_of_date` - Last day of the averaging window
/// * `records` - Wage records fetched for the employee
/// * `settings` - The policy settings supplying the period length
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `AverageWageResult`. With no records in the window the average
/// is zero and `no_wage_history` is set. Fails with:
/// - `InvalidWageRecord` if a record is malformed or two records overlap
/// - `InvalidDateRange` if the window cannot be represented
/// - `InvalidAmount` if the prorated earnings do not fit in a `Decimal`
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::compute_average_daily_wage;
/// use vacation_engine::config::PolicySettings;
/// use vacation_engine::models::WageRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![WageRecord {
///     employee_id: 1,
///     period_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     amount: Decimal::new(3100, 0),
/// }];
///
/// let result = compute_average_daily_wage(
///     1,
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     &records,
///     &PolicySettings::default(),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(result.average_daily_wage, Decimal::new(100, 0));
/// assert_eq!(result.covered_days, 31);
/// ```
pub fn compute_average_daily_wage(
    employee_id: EmployeeId,
    as_of_date: NaiveDate,
    records: &[WageRecord],
    settings: &PolicySettings,
    step_number: u32,
) -> EngineResult<AverageWageResult> {
    let window = DateRange::trailing_months(as_of_date, settings.calculation_period_months)?;

    let mut selected: Vec<&WageRecord> = Vec::new();
    for record in records.iter().filter(|r| r.employee_id == employee_id) {
        record.validate()?;
        if record.period().overlaps(&window) {
            selected.push(record);
        }
    }
    selected.sort_by_key(|r| r.period_start);

    // Overlapping records would double count both earnings and days.
    for pair in selected.windows(2) {
        if pair[1].period_start <= pair[0].period_end {
            return Err(EngineError::InvalidWageRecord {
                employee_id,
                message: format!(
                    "period {} overlaps period {}",
                    pair[1].period(),
                    pair[0].period()
                ),
            });
        }
    }

    let mut total_earnings = Decimal::ZERO;
    let mut covered_days: i64 = 0;
    for record in &selected {
        let Some(inside) = record.period().intersection(&window) else {
            continue;
        };
        let inside_days = inside.days();
        let record_days = record.days();
        let attributed = if inside_days == record_days {
            Some(record.amount)
        } else {
            record
                .amount
                .checked_mul(Decimal::from(inside_days))
                .and_then(|v| v.checked_div(Decimal::from(record_days)))
        };
        total_earnings = attributed
            .and_then(|v| total_earnings.checked_add(v))
            .ok_or_else(|| EngineError::InvalidAmount {
                field: "total_earnings".to_string(),
                message: format!(
                    "earnings for employee {} in window {} exceed representable range",
                    employee_id, window
                ),
            })?;
        covered_days += inside_days;
    }

    let no_wage_history = covered_days == 0;
    let average_daily_wage = if no_wage_history {
        Decimal::ZERO
    } else {
        total_earnings / Decimal::from(covered_days)
    };

    let warning = no_wage_history.then(|| AuditWarning {
        code: NO_WAGE_HISTORY_WARNING.to_string(),
        message: format!(
            "No wage records for employee {} between {} and {}; average daily wage treated as 0",
            employee_id, window.start, window.end
        ),
        severity: "medium".to_string(),
    });

    let reasoning = if no_wage_history {
        format!(
            "No wage records in window {}; average daily wage is $0",
            window
        )
    } else {
        format!(
            "${} earned over {} covered days in window {} = ${} per day",
            total_earnings.normalize(),
            covered_days,
            window,
            average_daily_wage.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "average_daily_wage".to_string(),
        rule_name: "Average Daily Wage".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "as_of_date": as_of_date.to_string(),
            "calculation_period_months": settings.calculation_period_months,
            "window_start": window.start.to_string(),
            "window_end": window.end.to_string(),
            "records_in_window": selected.len()
        }),
        output: serde_json::json!({
            "total_earnings": total_earnings.normalize().to_string(),
            "covered_days": covered_days,
            "average_daily_wage": average_daily_wage.normalize().to_string(),
            "no_wage_history": no_wage_history
        }),
        reasoning,
    };

    Ok(AverageWageResult {
        employee_id,
        average_daily_wage,
        window,
        total_earnings,
        covered_days,
        records_used: selected.len(),
        no_wage_history,
        warning,
        audit_step,
    })
}
