//! Vacation request and totals models.
//!
//! These are the ephemeral inputs and derived outputs of the vacation
//! engine. None of them are persisted by the engine itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// A request to value a number of vacation days for an employee.
///
/// # Example
///
/// ```
/// use vacation_engine::models::VacationRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = VacationRequest {
///     employee_id: 1,
///     as_of_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     requested_days: Decimal::new(5, 0),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// The employee taking or being paid out for vacation.
    pub employee_id: EmployeeId,
    /// The date the calculation is made as of.
    pub as_of_date: NaiveDate,
    /// The number of vacation days to value.
    pub requested_days: Decimal,
}

/// The vacation payout owed to a single employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeVacationTotal {
    /// The employee the amount belongs to.
    pub employee_id: EmployeeId,
    /// The employee's display name.
    pub employee_name: String,
    /// The payout amount.
    pub amount: Decimal,
}

/// A fleet-wide rollup of vacation payouts.
///
/// `total_amount` always equals the sum of `employee_totals` amounts,
/// rounded once to two decimal places.
///
/// # Example
///
/// ```
/// use vacation_engine::models::VacationTotalsSummary;
/// use rust_decimal::Decimal;
///
/// let summary = VacationTotalsSummary::empty();
/// assert_eq!(summary.total_amount, Decimal::ZERO);
/// assert!(summary.employee_totals.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationTotalsSummary {
    /// The sum of all employee amounts.
    pub total_amount: Decimal,
    /// Per-employee amounts, in input order.
    pub employee_totals: Vec<EmployeeVacationTotal>,
}

impl VacationTotalsSummary {
    /// The summary reported when there is no data to aggregate.
    pub fn empty() -> Self {
        Self {
            total_amount: Decimal::ZERO,
            employee_totals: Vec::new(),
        }
    }

    /// Looks up the total for a single employee.
    pub fn for_employee(&self, employee_id: EmployeeId) -> Option<&EmployeeVacationTotal> {
        self.employee_totals
            .iter()
            .find(|t| t.employee_id == employee_id)
    }
}
