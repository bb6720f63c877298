//! Calculation result models for the Vacation Engine.
//!
//! This module contains the [`PayoutResult`] type returned for a single
//! vacation payout request, together with the audit structures every
//! calculator emits so a payout can be traced back to its inputs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeId;

/// Warning code raised when no wage records fall inside the averaging window.
pub const NO_WAGE_HISTORY_WARNING: &str = "NO_WAGE_HISTORY";

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation
/// but may require attention, such as missing wage history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use vacation_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(!trace.has_warning("NO_WAGE_HISTORY"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The complete result of valuing a vacation request.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{AuditTrace, PayoutResult};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PayoutResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: 1,
///     as_of_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     requested_days: Decimal::new(5, 0),
///     accrued_days: Decimal::new(24, 0),
///     average_daily_wage: Decimal::new(100, 0),
///     amount: Decimal::new(50000, 2),
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the payout is for.
    pub employee_id: EmployeeId,
    /// The date the calculation was made as of.
    pub as_of_date: NaiveDate,
    /// The number of days valued.
    pub requested_days: Decimal,
    /// The days the employee had accrued as of `as_of_date`.
    pub accrued_days: Decimal,
    /// The average daily wage over the calculation period (unrounded).
    pub average_daily_wage: Decimal,
    /// The payout amount, rounded to cents.
    pub amount: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
