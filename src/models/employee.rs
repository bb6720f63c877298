//! Employee model.
//!
//! This module defines the roster entry the record store hands to the
//! vacation engine when it needs to compute totals for every employee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier used for employees throughout the engine.
pub type EmployeeId = u64;

/// Represents an employee whose vacation entitlement is being calculated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// The employee's display name.
    pub name: String,
    /// The date the employee was hired. Accrual starts on this date.
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Returns true if the employee had been hired on or before `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     name: "John Doe".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    /// };
    /// assert!(employee.is_hired_by(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    /// assert!(!employee.is_hired_by(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    /// ```
    pub fn is_hired_by(&self, date: NaiveDate) -> bool {
        self.hire_date <= date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: 1,
            name: "John Doe".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 2,
            "name": "Jane Smith",
            "hire_date": "2022-03-01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 2);
        assert_eq!(employee.name, "Jane Smith");
        assert_eq!(
            employee.hire_date,
            NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_is_hired_by_after_hire_date() {
        let employee = create_test_employee();
        assert!(employee.is_hired_by(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
    }

    #[test]
    fn test_is_hired_by_before_hire_date() {
        let employee = create_test_employee();
        assert!(!employee.is_hired_by(NaiveDate::from_ymd_opt(2023, 5, 31).unwrap()));
    }
}
