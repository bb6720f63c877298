//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the vacation
//! policy and seed data from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, WageRecord};
use crate::store::InMemoryRecordStore;

use super::types::{EmployeesConfig, PolicySettings, WageRecordsConfig};

/// Loads and provides access to vacation policy configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── policy.yaml        # Policy settings
/// ├── employees.yaml     # Employee roster
/// └── wage_records.yaml  # Dated earnings per employee
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Coefficient: {}", loader.policy().vacation_coefficient);
///
/// let store = loader.into_store().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicySettings,
    employees: Vec<Employee>,
    wage_records: Vec<WageRecord>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The policy settings fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicySettings>(&path.join("policy.yaml"))?;
        policy.validate()?;

        let employees = Self::load_yaml::<EmployeesConfig>(&path.join("employees.yaml"))?;
        let wages = Self::load_yaml::<WageRecordsConfig>(&path.join("wage_records.yaml"))?;

        debug!(
            path = %path.display(),
            employees = employees.employees.len(),
            wage_records = wages.wage_records.len(),
            "Loaded vacation configuration"
        );

        Ok(Self {
            policy,
            employees: employees.employees,
            wage_records: wages.wage_records,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy settings.
    pub fn policy(&self) -> &PolicySettings {
        &self.policy
    }

    /// Builds an in-memory record store seeded with this configuration.
    ///
    /// Wage records are validated as they are inserted, so malformed or
    /// overlapping records in the seed files are reported here.
    pub fn into_store(self) -> EngineResult<InMemoryRecordStore> {
        let store = InMemoryRecordStore::new(self.policy);
        for employee in self.employees {
            store.add_employee(employee)?;
        }
        for record in self.wage_records {
            store.record_wage(record)?;
        }
        Ok(store)
    }
}
