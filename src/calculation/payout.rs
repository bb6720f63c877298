//! Vacation payout calculation.
//!
//! This module values a number of vacation days at the employee's average
//! daily wage, scaled by the policy's vacation coefficient.

use rust_decimal::Decimal;

use crate::config::PolicySettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, EmployeeId};

use super::rounding::round_currency;

/// The result of a payout calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct PayoutCalculation {
    /// The payout rounded to cents.
    pub amount: Decimal,
    /// The payout before rounding.
    pub unrounded_amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the payout owed for a number of vacation days.
///
/// `payout = days_to_payout * avg_daily_wage * vacation_coefficient`, rounded
/// half-up to two decimal places once at the end.
///
/// # Arguments
///
/// * `employee_id` - The employee being paid
/// * `days_to_payout` - Vacation days to value
/// * `avg_daily_wage` - The employee's average daily wage
/// * `accrued_days` - Days the employee has accrued; the request may not exceed this
/// * `settings` - The policy settings supplying the coefficient
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `PayoutCalculation`, or an error if:
/// - `days_to_payout` or `avg_daily_wage` is negative (`InvalidAmount`)
/// - `days_to_payout` exceeds `accrued_days` (`InsufficientAccrual`)
/// - the product does not fit in a `Decimal` (`InvalidAmount`)
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::compute_payout;
/// use vacation_engine::config::PolicySettings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute_payout(
///     1,
///     Decimal::from(5),
///     Decimal::from_str("101.917808").unwrap(),
///     Decimal::from(24),
///     &PolicySettings::default(),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(result.amount, Decimal::from_str("509.59").unwrap());
/// ```
pub fn compute_payout(
    employee_id: EmployeeId,
    days_to_payout: Decimal,
    avg_daily_wage: Decimal,
    accrued_days: Decimal,
    settings: &PolicySettings,
    step_number: u32,
) -> EngineResult<PayoutCalculation> {
    if days_to_payout < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: "days_to_payout".to_string(),
            message: format!("{} is negative", days_to_payout),
        });
    }
    if avg_daily_wage < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: "avg_daily_wage".to_string(),
            message: format!("{} is negative", avg_daily_wage),
        });
    }
    if days_to_payout > accrued_days {
        return Err(EngineError::InsufficientAccrual {
            employee_id,
            requested: days_to_payout,
            accrued: accrued_days,
        });
    }

    let unrounded_amount = days_to_payout
        .checked_mul(avg_daily_wage)
        .and_then(|v| v.checked_mul(settings.vacation_coefficient))
        .ok_or_else(|| EngineError::InvalidAmount {
            field: "payout".to_string(),
            message: "payout exceeds representable range".to_string(),
        })?;
    let amount = round_currency(unrounded_amount);

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_payout".to_string(),
        rule_name: "Vacation Payout".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "days_to_payout": days_to_payout.normalize().to_string(),
            "avg_daily_wage": avg_daily_wage.normalize().to_string(),
            "accrued_days": accrued_days.normalize().to_string(),
            "vacation_coefficient": settings.vacation_coefficient.normalize().to_string()
        }),
        output: serde_json::json!({
            "unrounded_amount": unrounded_amount.normalize().to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{} days x ${} x {} = ${} (rounded to ${})",
            days_to_payout.normalize(),
            avg_daily_wage.normalize(),
            settings.vacation_coefficient.normalize(),
            unrounded_amount.normalize(),
            amount
        ),
    };

    Ok(PayoutCalculation {
        amount,
        unrounded_amount,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settings_with_coefficient(coefficient: &str) -> PolicySettings {
        PolicySettings {
            vacation_coefficient: dec(coefficient),
            ..PolicySettings::default()
        }
    }

    /// PO-001: whole days at a whole wage
    #[test]
    fn test_basic_payout() {
        let result =
            compute_payout(1, dec("10"), dec("150"), dec("24"), &PolicySettings::default(), 1)
                .unwrap();

        assert_eq!(result.amount, dec("1500"));
        assert_eq!(result.unrounded_amount, dec("1500"));
    }

    /// PO-002: coefficient scales the payout
    #[test]
    fn test_coefficient_applied() {
        let result = compute_payout(
            1,
            dec("10"),
            dec("150"),
            dec("24"),
            &settings_with_coefficient("1.25"),
            1,
        )
        .unwrap();

        assert_eq!(result.amount, dec("1875"));
    }

    /// PO-003: final value is rounded half-up once
    #[test]
    fn test_rounding_half_up_on_final_amount() {
        // 2.5 * 42.81 = 107.025 -> 107.03
        let result =
            compute_payout(1, dec("2.5"), dec("42.81"), dec("24"), &PolicySettings::default(), 1)
                .unwrap();

        assert_eq!(result.unrounded_amount, dec("107.025"));
        assert_eq!(result.amount, dec("107.03"));
    }

    /// PO-004: requesting more than accrued is rejected
    #[test]
    fn test_insufficient_accrual_rejected() {
        let result =
            compute_payout(4, dec("10.5"), dec("100"), dec("10"), &PolicySettings::default(), 1);

        match result {
            Err(EngineError::InsufficientAccrual {
                employee_id,
                requested,
                accrued,
            }) => {
                assert_eq!(employee_id, 4);
                assert_eq!(requested, dec("10.5"));
                assert_eq!(accrued, dec("10"));
            }
            _ => panic!("Expected InsufficientAccrual error"),
        }
    }

    /// PO-005: requesting exactly the accrued balance is allowed
    #[test]
    fn test_exact_accrued_balance_allowed() {
        let accrued = dec("8784") / dec("365");
        let result =
            compute_payout(1, accrued, dec("100"), accrued, &PolicySettings::default(), 1)
                .unwrap();

        assert_eq!(result.amount, dec("2406.58"));
    }

    #[test]
    fn test_zero_days_pays_nothing() {
        let result =
            compute_payout(1, dec("0"), dec("100"), dec("0"), &PolicySettings::default(), 1)
                .unwrap();

        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_zero_wage_pays_nothing() {
        let result =
            compute_payout(1, dec("5"), Decimal::ZERO, dec("10"), &PolicySettings::default(), 1)
                .unwrap();

        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_negative_days_rejected() {
        let result =
            compute_payout(1, dec("-1"), dec("100"), dec("10"), &PolicySettings::default(), 1);

        assert!(matches!(
            result,
            Err(EngineError::InvalidAmount { field, .. }) if field == "days_to_payout"
        ));
    }

    #[test]
    fn test_negative_wage_rejected() {
        let result =
            compute_payout(1, dec("1"), dec("-100"), dec("10"), &PolicySettings::default(), 1);

        assert!(matches!(
            result,
            Err(EngineError::InvalidAmount { field, .. }) if field == "avg_daily_wage"
        ));
    }

    #[test]
    fn test_audit_step_explains_calculation() {
        let result = compute_payout(
            1,
            dec("2.5"),
            dec("42.81"),
            dec("24"),
            &PolicySettings::default(),
            3,
        )
        .unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "vacation_payout");
        assert_eq!(result.audit_step.output["amount"], "107.03");
        assert!(result.audit_step.reasoning.contains("2.5 days x $42.81"));
        assert!(result.audit_step.reasoning.contains("$107.03"));
    }
}
