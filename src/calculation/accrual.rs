//! Vacation accrual calculation.
//!
//! Vacation days accrue daily from the hire date at
//! `default_days_per_year / ACCRUAL_DAYS_PER_YEAR`. The denominator is fixed
//! at 365 regardless of leap years so that repeating a calculation always
//! produces the same figure.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{AccrualCap, PolicySettings};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EmployeeId};

/// Days per year used as the accrual rate denominator.
pub const ACCRUAL_DAYS_PER_YEAR: i64 = 365;

/// The result of an accrual calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct AccrualResult {
    /// Vacation days accrued as of the calculation date (unrounded).
    pub accrued_days: Decimal,
    /// Whole days between the hire date and the calculation date.
    pub days_employed: i64,
    /// Days accrued per day employed.
    pub daily_rate: Decimal,
    /// The cap that applied, if the policy caps accrual.
    pub cap: Option<Decimal>,
    /// True when the cap reduced the accrued days.
    pub cap_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the accrual rate in vacation days per day employed.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::accrual_rate;
/// use vacation_engine::config::PolicySettings;
/// use rust_decimal::Decimal;
///
/// let rate = accrual_rate(&PolicySettings::default());
/// assert_eq!((rate * Decimal::from(365)).round_dp(10), Decimal::from(24));
/// ```
pub fn accrual_rate(settings: &PolicySettings) -> Decimal {
    settings.default_days_per_year / Decimal::from(ACCRUAL_DAYS_PER_YEAR)
}

/// Computes the vacation days an employee has accrued as of a date.
///
/// `accrued = days_employed * default_days_per_year / 365`, where
/// `days_employed = as_of_date - hire_date`. The product is formed before the
/// division so whole years come out exact. When the policy uses
/// [`AccrualCap::AnnualAllotment`], the balance never exceeds one year's
/// `default_days_per_year`.
///
/// # Arguments
///
/// * `employee_id` - The employee, for audit purposes
/// * `hire_date` - The date accrual starts
/// * `as_of_date` - The date accrual is measured to
/// * `settings` - The policy settings
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `AccrualResult`, or an error if:
/// - `as_of_date` is before `hire_date` (`InvalidDateRange`)
/// - the accrued balance does not fit in a `Decimal` (`InvalidAmount`)
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::compute_accrued_days;
/// use vacation_engine::config::PolicySettings;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = compute_accrued_days(
///     1,
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     &PolicySettings::default(),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(result.days_employed, 365);
/// assert_eq!(result.accrued_days, Decimal::from(24));
/// ```
pub fn compute_accrued_days(
    employee_id: EmployeeId,
    hire_date: NaiveDate,
    as_of_date: NaiveDate,
    settings: &PolicySettings,
    step_number: u32,
) -> EngineResult<AccrualResult> {
    if as_of_date < hire_date {
        return Err(EngineError::InvalidDateRange {
            start: hire_date,
            end: as_of_date,
            message: format!(
                "calculation date precedes hire date for employee {}",
                employee_id
            ),
        });
    }

    let days_employed = (as_of_date - hire_date).num_days();
    let daily_rate = accrual_rate(settings);
    let uncapped = Decimal::from(days_employed)
        .checked_mul(settings.default_days_per_year)
        .and_then(|v| v.checked_div(Decimal::from(ACCRUAL_DAYS_PER_YEAR)))
        .ok_or_else(|| EngineError::InvalidAmount {
            field: "accrued_days".to_string(),
            message: format!(
                "{} days x {} days per year exceeds representable range",
                days_employed, settings.default_days_per_year
            ),
        })?;

    let cap = match settings.accrual_cap {
        AccrualCap::Unbounded => None,
        AccrualCap::AnnualAllotment => Some(settings.default_days_per_year),
    };

    let (accrued_days, cap_applied) = match cap {
        Some(limit) if uncapped > limit => (limit, true),
        _ => (uncapped, false),
    };

    let reasoning = if cap_applied {
        format!(
            "{} days x {}/{} = {} days (capped at {} days)",
            days_employed,
            settings.default_days_per_year.normalize(),
            ACCRUAL_DAYS_PER_YEAR,
            uncapped.normalize(),
            accrued_days.normalize()
        )
    } else {
        format!(
            "{} days x {}/{} = {} days",
            days_employed,
            settings.default_days_per_year.normalize(),
            ACCRUAL_DAYS_PER_YEAR,
            accrued_days.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_accrual".to_string(),
        rule_name: "Vacation Accrual".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "hire_date": hire_date.to_string(),
            "as_of_date": as_of_date.to_string(),
            "default_days_per_year": settings.default_days_per_year.normalize().to_string(),
            "accrual_cap": settings.accrual_cap
        }),
        output: serde_json::json!({
            "days_employed": days_employed,
            "accrued_days": accrued_days.normalize().to_string(),
            "cap_applied": cap_applied
        }),
        reasoning,
    };

    Ok(AccrualResult {
        accrued_days,
        days_employed,
        daily_rate,
        cap,
        cap_applied,
        audit_step,
    })
}
