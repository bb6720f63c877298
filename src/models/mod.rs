//! Core data models for the Vacation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod date_range;
mod employee;
mod load_state;
mod vacation;
mod wage_record;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, NO_WAGE_HISTORY_WARNING, PayoutResult,
};
pub use date_range::DateRange;
pub use employee::{Employee, EmployeeId};
pub use load_state::LoadState;
pub use vacation::{EmployeeVacationTotal, VacationRequest, VacationTotalsSummary};
pub use wage_record::WageRecord;
