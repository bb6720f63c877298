//! In-memory [`RecordStore`] implementation.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use super::RecordStore;
use crate::config::PolicySettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Employee, EmployeeId, WageRecord};

/// A record store that keeps everything in process memory.
///
/// Wage records are append-only: once recorded they cannot be changed, and
/// a record whose period overlaps an existing record for the same employee
/// is rejected.
///
/// # Example
///
/// ```
/// use vacation_engine::config::PolicySettings;
/// use vacation_engine::models::Employee;
/// use vacation_engine::store::{InMemoryRecordStore, RecordStore};
/// use chrono::NaiveDate;
///
/// let store = InMemoryRecordStore::new(PolicySettings::default());
/// store
///     .add_employee(Employee {
///         id: 1,
///         name: "John Doe".to_string(),
///         hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     })
///     .unwrap();
///
/// assert_eq!(store.employees().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct InMemoryRecordStore {
    policy: RwLock<PolicySettings>,
    employees: RwLock<Vec<Employee>>,
    wage_records: RwLock<Vec<WageRecord>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store with the given policy.
    pub fn new(policy: PolicySettings) -> Self {
        Self {
            policy: RwLock::new(policy),
            employees: RwLock::new(Vec::new()),
            wage_records: RwLock::new(Vec::new()),
        }
    }

    /// Adds an employee, replacing any existing employee with the same ID.
    pub fn add_employee(&self, employee: Employee) -> EngineResult<()> {
        let mut employees = write(&self.employees)?;
        employees.retain(|e| e.id != employee.id);
        employees.push(employee);
        employees.sort_by_key(|e| e.id);
        Ok(())
    }

    /// Appends a wage record after validating it.
    ///
    /// # Returns
    ///
    /// Returns `InvalidWageRecord` if the record is malformed or its period
    /// overlaps a record already stored for the same employee.
    pub fn record_wage(&self, record: WageRecord) -> EngineResult<()> {
        record.validate()?;

        let mut records = write(&self.wage_records)?;
        let period = record.period();
        if let Some(existing) = records
            .iter()
            .find(|r| r.employee_id == record.employee_id && r.period().overlaps(&period))
        {
            return Err(EngineError::InvalidWageRecord {
                employee_id: record.employee_id,
                message: format!(
                    "period {} overlaps existing record {}",
                    period,
                    existing.period()
                ),
            });
        }

        records.push(record);
        Ok(())
    }
}

impl RecordStore for InMemoryRecordStore {
    fn wage_records(
        &self,
        employee_id: EmployeeId,
        range: DateRange,
    ) -> EngineResult<Vec<WageRecord>> {
        let records = read(&self.wage_records)?;
        let mut matching: Vec<WageRecord> = records
            .iter()
            .filter(|r| r.employee_id == employee_id && r.period().overlaps(&range))
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.period_start);
        Ok(matching)
    }

    fn policy_settings(&self) -> EngineResult<PolicySettings> {
        Ok(read(&self.policy)?.clone())
    }

    fn upsert_policy_settings(&self, settings: PolicySettings) -> EngineResult<()> {
        let mut policy = write(&self.policy)?;
        info!(
            calculation_period_months = settings.calculation_period_months,
            vacation_coefficient = %settings.vacation_coefficient,
            default_days_per_year = %settings.default_days_per_year,
            "Policy settings updated"
        );
        *policy = settings;
        Ok(())
    }

    fn employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(read(&self.employees)?.clone())
    }
}

fn read<T>(lock: &RwLock<T>) -> EngineResult<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| EngineError::StoreError {
        message: "record store lock poisoned".to_string(),
    })
}

fn write<T>(lock: &RwLock<T>) -> EngineResult<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| EngineError::StoreError {
        message: "record store lock poisoned".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(employee_id: EmployeeId, start: &str, end: &str) -> WageRecord {
        WageRecord {
            employee_id,
            period_start: make_date(start),
            period_end: make_date(end),
            amount: dec("1000"),
        }
    }

    fn employee(id: EmployeeId, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            hire_date: make_date("2024-01-01"),
        }
    }

    #[test]
    fn test_wage_records_filters_by_employee_and_range() {
        let store = InMemoryRecordStore::new(PolicySettings::default());
        store.record_wage(record(1, "2025-11-01", "2025-11-30")).unwrap();
        store.record_wage(record(1, "2025-12-01", "2025-12-31")).unwrap();
        store.record_wage(record(2, "2025-12-01", "2025-12-31")).unwrap();

        let range = DateRange::new(make_date("2025-12-15"), make_date("2026-01-15")).unwrap();
        let records = store.wage_records(1, range).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].period_start, make_date("2025-12-01"));
    }

    #[test]
    fn test_wage_records_sorted_by_period_start() {
        let store = InMemoryRecordStore::new(PolicySettings::default());
        store.record_wage(record(1, "2025-12-01", "2025-12-31")).unwrap();
        store.record_wage(record(1, "2025-10-01", "2025-10-31")).unwrap();

        let range = DateRange::new(make_date("2025-01-01"), make_date("2025-12-31")).unwrap();
        let records = store.wage_records(1, range).unwrap();

        assert_eq!(records[0].period_start, make_date("2025-10-01"));
        assert_eq!(records[1].period_start, make_date("2025-12-01"));
    }

    #[test]
    fn test_record_wage_rejects_overlap_for_same_employee() {
        let store = InMemoryRecordStore::new(PolicySettings::default());
        store.record_wage(record(1, "2025-12-01", "2025-12-31")).unwrap();

        let result = store.record_wage(record(1, "2025-12-31", "2026-01-30"));
        match result {
            Err(EngineError::InvalidWageRecord { employee_id, message }) => {
                assert_eq!(employee_id, 1);
                assert!(message.contains("overlaps"));
            }
            _ => panic!("Expected InvalidWageRecord error"),
        }
    }

    #[test]
    fn test_record_wage_allows_overlap_across_employees() {
        let store = InMemoryRecordStore::new(PolicySettings::default());
        store.record_wage(record(1, "2025-12-01", "2025-12-31")).unwrap();
        assert!(store.record_wage(record(2, "2025-12-01", "2025-12-31")).is_ok());
    }

    #[test]
    fn test_record_wage_rejects_invalid_record() {
        let store = InMemoryRecordStore::new(PolicySettings::default());
        let result = store.record_wage(record(1, "2025-12-31", "2025-12-01"));
        assert!(matches!(result, Err(EngineError::InvalidWageRecord { .. })));
    }

    #[test]
    fn test_upsert_policy_settings_replaces_snapshot() {
        let store = InMemoryRecordStore::new(PolicySettings::default());
        let updated = PolicySettings {
            calculation_period_months: 3,
            vacation_coefficient: dec("1.5"),
            ..PolicySettings::default()
        };

        store.upsert_policy_settings(updated.clone()).unwrap();
        assert_eq!(store.policy_settings().unwrap(), updated);
    }

    #[test]
    fn test_employees_ordered_by_id() {
        let store = InMemoryRecordStore::new(PolicySettings::default());
        store.add_employee(employee(2, "Jane Smith")).unwrap();
        store.add_employee(employee(1, "John Doe")).unwrap();

        let ids: Vec<EmployeeId> = store.employees().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_employee_lookup_not_found() {
        let store = InMemoryRecordStore::new(PolicySettings::default());
        assert!(matches!(
            store.employee(5),
            Err(EngineError::EmployeeNotFound { employee_id: 5 })
        ));
    }
}
