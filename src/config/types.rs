//! Configuration types for vacation calculations.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, WageRecord};

/// How accrued vacation days are bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualCap {
    /// Accrued days roll over without limit.
    #[default]
    Unbounded,
    /// Accrued days never exceed one annual allotment (`default_days_per_year`).
    AnnualAllotment,
}

/// Policy parameters that drive every vacation calculation.
///
/// Settings are passed explicitly into each calculation; nothing in the
/// engine reads them from shared state. The default values match the
/// seeded policy row: a 12 month calculation period, a coefficient of 1.0
/// and 24 days per year.
///
/// # Example
///
/// ```
/// use vacation_engine::config::{AccrualCap, PolicySettings};
/// use rust_decimal::Decimal;
///
/// let settings = PolicySettings::default();
/// assert_eq!(settings.calculation_period_months, 12);
/// assert_eq!(settings.default_days_per_year, Decimal::new(24, 0));
/// assert_eq!(settings.accrual_cap, AccrualCap::Unbounded);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySettings {
    /// Length of the trailing wage averaging window, in months.
    pub calculation_period_months: u32,
    /// Multiplier applied to the wage-based payout.
    pub vacation_coefficient: Decimal,
    /// Vacation days granted per year of service.
    pub default_days_per_year: Decimal,
    /// Whether accrual is capped.
    #[serde(default)]
    pub accrual_cap: AccrualCap,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            calculation_period_months: 12,
            vacation_coefficient: Decimal::ONE,
            default_days_per_year: Decimal::new(24, 0),
            accrual_cap: AccrualCap::Unbounded,
        }
    }
}

impl PolicySettings {
    /// Checks that every numeric setting is strictly positive.
    ///
    /// # Returns
    ///
    /// Returns `InvalidPolicy` naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.calculation_period_months == 0 {
            return Err(invalid_policy("calculation_period_months"));
        }
        if self.vacation_coefficient <= Decimal::ZERO {
            return Err(invalid_policy("vacation_coefficient"));
        }
        if self.default_days_per_year <= Decimal::ZERO {
            return Err(invalid_policy("default_days_per_year"));
        }
        Ok(())
    }
}

fn invalid_policy(field: &str) -> EngineError {
    EngineError::InvalidPolicy {
        field: field.to_string(),
        message: "must be greater than zero".to_string(),
    }
}

/// Employees configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The employee roster.
    pub employees: Vec<Employee>,
}

/// Wage records configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct WageRecordsConfig {
    /// Wage records for all employees.
    #[serde(default)]
    pub wage_records: Vec<WageRecord>,
}
