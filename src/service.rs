//! Vacation service.
//!
//! The service is the layer between a [`RecordStore`] and the pure
//! calculators. It fetches the policy, roster and wage history, threads the
//! policy snapshot through each calculation explicitly, and assembles the
//! results. Store calls are made once per request and never retried.

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate, compute_accrued_days, compute_average_daily_wage, compute_payout,
};
use crate::config::PolicySettings;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, DateRange, Employee, EmployeeVacationTotal, LoadState, PayoutResult,
    VacationRequest, VacationTotalsSummary,
};
use crate::store::RecordStore;

/// Computes vacation payouts and totals against a record store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vacation_engine::config::PolicySettings;
/// use vacation_engine::service::VacationService;
/// use vacation_engine::store::InMemoryRecordStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let store = Arc::new(InMemoryRecordStore::new(PolicySettings::default()));
/// let service = VacationService::new(store);
///
/// let totals = service
///     .get_vacation_totals(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap())
///     .unwrap();
/// assert_eq!(totals.total_amount, Decimal::ZERO);
/// ```
pub struct VacationService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for VacationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RecordStore + ?Sized> VacationService<S> {
    /// Creates a service backed by the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the current policy settings.
    pub fn policy_settings(&self) -> EngineResult<PolicySettings> {
        self.store.policy_settings()
    }

    /// Validates and stores new policy settings. Administrative path only.
    pub fn update_policy_settings(&self, settings: PolicySettings) -> EngineResult<()> {
        settings.validate()?;
        self.store.upsert_policy_settings(settings)
    }

    /// Values a vacation request for a single employee.
    ///
    /// Runs accrual, average wage and payout in that order, recording an
    /// audit step for each. An employee with no wage history in the window
    /// is valued at zero and a `NO_WAGE_HISTORY` warning is added to the
    /// trace.
    pub fn calculate_payout(&self, request: &VacationRequest) -> EngineResult<PayoutResult> {
        let start_time = Instant::now();
        let policy = self.store.policy_settings()?;
        policy.validate()?;

        let employee = self.store.employee(request.employee_id)?;
        let mut steps = Vec::new();
        let mut warnings = Vec::new();

        let accrual = compute_accrued_days(
            employee.id,
            employee.hire_date,
            request.as_of_date,
            &policy,
            1,
        )?;
        steps.push(accrual.audit_step);

        let window = DateRange::trailing_months(request.as_of_date, policy.calculation_period_months)?;
        let records = self.store.wage_records(employee.id, window)?;
        let average =
            compute_average_daily_wage(employee.id, request.as_of_date, &records, &policy, 2)?;
        if let Some(warning) = average.warning {
            warn!(
                employee_id = employee.id,
                window = %average.window,
                "No wage history in calculation period"
            );
            warnings.push(warning);
        }
        steps.push(average.audit_step);

        let payout = compute_payout(
            employee.id,
            request.requested_days,
            average.average_daily_wage,
            accrual.accrued_days,
            &policy,
            3,
        )?;
        steps.push(payout.audit_step);

        let duration = start_time.elapsed();
        debug!(
            employee_id = employee.id,
            amount = %payout.amount,
            duration_us = duration.as_micros(),
            "Payout calculated"
        );

        Ok(PayoutResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id: employee.id,
            as_of_date: request.as_of_date,
            requested_days: request.requested_days,
            accrued_days: accrual.accrued_days,
            average_daily_wage: average.average_daily_wage,
            amount: payout.amount,
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us: duration.as_micros() as u64,
            },
        })
    }

    /// Computes the payout owed to every employee for their full accrued
    /// balance as of `as_of_date`, and aggregates the results.
    ///
    /// Employees hired after `as_of_date` have accrued nothing yet and are
    /// left out of the summary.
    pub fn get_vacation_totals(&self, as_of_date: NaiveDate) -> EngineResult<VacationTotalsSummary> {
        let start_time = Instant::now();
        let policy = self.store.policy_settings()?;
        policy.validate()?;

        let employees = self.store.employees()?;
        let mut entries = Vec::with_capacity(employees.len());
        for employee in &employees {
            if !employee.is_hired_by(as_of_date) {
                warn!(
                    employee_id = employee.id,
                    hire_date = %employee.hire_date,
                    as_of_date = %as_of_date,
                    "Skipping employee hired after calculation date"
                );
                continue;
            }
            let amount = self.balance_payout(employee, as_of_date, &policy)?;
            entries.push(EmployeeVacationTotal {
                employee_id: employee.id,
                employee_name: employee.name.clone(),
                amount,
            });
        }

        let summary = aggregate(&entries)?;
        info!(
            as_of_date = %as_of_date,
            employees = summary.employee_totals.len(),
            total_amount = %summary.total_amount,
            duration_us = start_time.elapsed().as_micros(),
            "Vacation totals computed"
        );
        Ok(summary)
    }

    /// Same as [`VacationService::get_vacation_totals`], wrapped for display.
    pub fn load_vacation_totals(&self, as_of_date: NaiveDate) -> LoadState<VacationTotalsSummary> {
        self.get_vacation_totals(as_of_date).into()
    }

    /// Values an employee's entire accrued balance.
    fn balance_payout(
        &self,
        employee: &Employee,
        as_of_date: NaiveDate,
        policy: &PolicySettings,
    ) -> EngineResult<Decimal> {
        let accrual = compute_accrued_days(employee.id, employee.hire_date, as_of_date, policy, 1)?;

        let window = DateRange::trailing_months(as_of_date, policy.calculation_period_months)?;
        let records = self.store.wage_records(employee.id, window)?;
        let average = compute_average_daily_wage(employee.id, as_of_date, &records, policy, 2)?;
        if average.no_wage_history {
            debug!(employee_id = employee.id, "No wage history; balance valued at zero");
        }

        let payout = compute_payout(
            employee.id,
            accrual.accrued_days,
            average.average_daily_wage,
            accrual.accrued_days,
            policy,
            3,
        )?;
        Ok(payout.amount)
    }
}
