//! Error types for the Vacation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during accrual, payout and
//! aggregation calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::EmployeeId;

/// The main error type for the Vacation Engine.
///
/// All operations in the engine return this error type. Calculations never
/// panic on bad input; they hand one of these back to the calling layer,
/// which decides how to present it.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::DuplicateEmployeeEntry { employee_id: 7 };
/// assert_eq!(error.to_string(), "Duplicate entry for employee 7 in aggregation input");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No wage records fall inside the averaging window.
    ///
    /// Recoverable: the average wage calculator reports this as a flag and
    /// only raises it when the caller asks for history to be required.
    #[error("No wage history for employee {employee_id} between {window_start} and {window_end}")]
    NoWageHistory {
        /// The employee whose history is empty.
        employee_id: EmployeeId,
        /// First day of the averaging window.
        window_start: NaiveDate,
        /// Last day of the averaging window.
        window_end: NaiveDate,
    },

    /// A date range was inverted or could not be represented.
    #[error("Invalid date range {start} to {end}: {message}")]
    InvalidDateRange {
        /// Start of the offending range.
        start: NaiveDate,
        /// End of the offending range.
        end: NaiveDate,
        /// A description of what is wrong with the range.
        message: String,
    },

    /// More days were requested for payout than the employee has accrued.
    #[error("Employee {employee_id} requested {requested} days but has only accrued {accrued}")]
    InsufficientAccrual {
        /// The employee requesting the payout.
        employee_id: EmployeeId,
        /// The number of days requested.
        requested: Decimal,
        /// The number of days accrued.
        accrued: Decimal,
    },

    /// The same employee appeared more than once in an aggregation input.
    #[error("Duplicate entry for employee {employee_id} in aggregation input")]
    DuplicateEmployeeEntry {
        /// The repeated employee ID.
        employee_id: EmployeeId,
    },

    /// A wage record was malformed or overlapped another record.
    #[error("Invalid wage record for employee {employee_id}: {message}")]
    InvalidWageRecord {
        /// The employee the record belongs to.
        employee_id: EmployeeId,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A numeric input was outside its allowed range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidAmount {
        /// The field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Policy settings failed validation.
    #[error("Invalid policy setting '{field}': {message}")]
    InvalidPolicy {
        /// The setting that was invalid.
        field: String,
        /// A description of what made the setting invalid.
        message: String,
    },

    /// The requested employee is not in the record store.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        employee_id: EmployeeId,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The record store failed to serve a request.
    #[error("Record store error: {message}")]
    StoreError {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
