//! Fleet-wide vacation totals aggregation.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeVacationTotal, VacationTotalsSummary};

use super::rounding::round_currency;

/// Rolls per-employee payouts up into a [`VacationTotalsSummary`].
///
/// Entries keep their input order. The total is the plain sum of every
/// amount, rounded once at the end; individual amounts are passed through
/// untouched so that aggregating a summary's own `employee_totals` again
/// reproduces the same total.
///
/// # Returns
///
/// Returns the summary, or an error if:
/// - an employee appears more than once (`DuplicateEmployeeEntry`)
/// - an amount is negative or the sum overflows (`InvalidAmount`)
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::aggregate;
/// use vacation_engine::models::EmployeeVacationTotal;
/// use rust_decimal::Decimal;
///
/// let summary = aggregate(&[
///     EmployeeVacationTotal { employee_id: 1, employee_name: "John Doe".to_string(), amount: Decimal::from(3000) },
///     EmployeeVacationTotal { employee_id: 2, employee_name: "Jane Smith".to_string(), amount: Decimal::from(2000) },
/// ])
/// .unwrap();
///
/// assert_eq!(summary.total_amount, Decimal::from(5000));
/// assert_eq!(summary.employee_totals.len(), 2);
/// ```
pub fn aggregate(entries: &[EmployeeVacationTotal]) -> EngineResult<VacationTotalsSummary> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut sum = Decimal::ZERO;

    for entry in entries {
        if !seen.insert(entry.employee_id) {
            return Err(EngineError::DuplicateEmployeeEntry {
                employee_id: entry.employee_id,
            });
        }
        if entry.amount < Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                field: "amount".to_string(),
                message: format!(
                    "amount {} for employee {} is negative",
                    entry.amount, entry.employee_id
                ),
            });
        }
        sum = sum
            .checked_add(entry.amount)
            .ok_or_else(|| EngineError::InvalidAmount {
                field: "total_amount".to_string(),
                message: "total exceeds representable range".to_string(),
            })?;
    }

    Ok(VacationTotalsSummary {
        total_amount: round_currency(sum),
        employee_totals: entries.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeId;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(employee_id: EmployeeId, name: &str, amount: &str) -> EmployeeVacationTotal {
        EmployeeVacationTotal {
            employee_id,
            employee_name: name.to_string(),
            amount: dec(amount),
        }
    }

    /// AG-001: empty input is the "no data" summary
    #[test]
    fn test_empty_input_yields_zero_summary() {
        let summary = aggregate(&[]).unwrap();

        assert_eq!(summary, VacationTotalsSummary::empty());
        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert!(summary.employee_totals.is_empty());
    }

    /// AG-002: two employees sum to their combined amount
    #[test]
    fn test_two_employees_sum() {
        let summary = aggregate(&[
            entry(1, "John Doe", "3000"),
            entry(2, "Jane Smith", "2000"),
        ])
        .unwrap();

        assert_eq!(summary.total_amount, dec("5000"));
        assert_eq!(summary.employee_totals.len(), 2);
        assert_eq!(summary.employee_totals[0].employee_name, "John Doe");
        assert_eq!(summary.employee_totals[1].employee_name, "Jane Smith");
    }

    /// AG-003: duplicate employee rejects the whole aggregation
    #[test]
    fn test_duplicate_employee_rejected() {
        let result = aggregate(&[
            entry(1, "John Doe", "3000"),
            entry(2, "Jane Smith", "2000"),
            entry(1, "John Doe", "10"),
        ]);

        match result {
            Err(EngineError::DuplicateEmployeeEntry { employee_id }) => assert_eq!(employee_id, 1),
            _ => panic!("Expected DuplicateEmployeeEntry error"),
        }
    }

    /// AG-004: re-aggregating a summary's entries reproduces it
    #[test]
    fn test_reaggregation_is_idempotent() {
        let first = aggregate(&[
            entry(3, "Alex Brown", "0.004"),
            entry(1, "John Doe", "1234.565"),
            entry(2, "Jane Smith", "0.333"),
        ])
        .unwrap();
        let second = aggregate(&first.employee_totals).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.total_amount, dec("1234.90"));
    }

    #[test]
    fn test_total_is_rounded_once_not_per_entry() {
        // Per-entry rounding would give 0.00 + 0.00 + 0.00; summing first gives 0.012 -> 0.01
        let summary = aggregate(&[
            entry(1, "A", "0.004"),
            entry(2, "B", "0.004"),
            entry(3, "C", "0.004"),
        ])
        .unwrap();

        assert_eq!(summary.total_amount, dec("0.01"));
        assert_eq!(summary.employee_totals[0].amount, dec("0.004"));
    }

    #[test]
    fn test_input_order_preserved() {
        let summary = aggregate(&[
            entry(9, "Z", "1"),
            entry(2, "B", "1"),
            entry(5, "M", "1"),
        ])
        .unwrap();

        let ids: Vec<EmployeeId> = summary.employee_totals.iter().map(|t| t.employee_id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = aggregate(&[entry(1, "John Doe", "-1")]);

        assert!(matches!(result, Err(EngineError::InvalidAmount { .. })));
    }
}
