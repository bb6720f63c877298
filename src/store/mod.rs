//! Record store abstraction.
//!
//! The vacation engine never talks to a database directly. Everything it
//! needs (policy settings, the employee roster and wage history) comes
//! through the [`RecordStore`] trait, so calculations can run against an
//! in-memory store in tests and a real persistence layer in production.

mod memory;

pub use memory::InMemoryRecordStore;

use crate::config::PolicySettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Employee, EmployeeId, WageRecord};

/// Defines the contract for the external record store.
///
/// Implementations must be safe to share across threads. The engine does
/// not retry or cache any of these calls.
pub trait RecordStore: Send + Sync {
    /// Returns the employee's wage records whose period overlaps `range`.
    fn wage_records(
        &self,
        employee_id: EmployeeId,
        range: DateRange,
    ) -> EngineResult<Vec<WageRecord>>;

    /// Returns the current policy settings snapshot.
    fn policy_settings(&self) -> EngineResult<PolicySettings>;

    /// Replaces the policy settings. Administrative path only.
    fn upsert_policy_settings(&self, settings: PolicySettings) -> EngineResult<()>;

    /// Returns the full employee roster, ordered by employee ID.
    fn employees(&self) -> EngineResult<Vec<Employee>>;

    /// Returns a single employee.
    ///
    /// The default implementation scans [`RecordStore::employees`].
    fn employee(&self, employee_id: EmployeeId) -> EngineResult<Employee> {
        self.employees()?
            .into_iter()
            .find(|e| e.id == employee_id)
            .ok_or(EngineError::EmployeeNotFound { employee_id })
    }
}
