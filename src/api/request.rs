//! Request types for the Vacation Engine API.
//!
//! This module defines the JSON request body for `/payout` and the query
//! string for `/vacation-totals`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeId, VacationRequest};

/// Request body for the `/payout` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutRequest {
    /// The employee to value vacation for.
    pub employee_id: EmployeeId,
    /// The date the calculation is made as of.
    pub as_of_date: NaiveDate,
    /// Vacation days to pay out.
    pub requested_days: Decimal,
}

/// Query string for the `/vacation-totals` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsQuery {
    /// The date the totals are computed as of.
    pub as_of: NaiveDate,
}

impl From<PayoutRequest> for VacationRequest {
    fn from(req: PayoutRequest) -> Self {
        VacationRequest {
            employee_id: req.employee_id,
            as_of_date: req.as_of_date,
            requested_days: req.requested_days,
        }
    }
}
