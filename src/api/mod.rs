//! HTTP API module for the Vacation Engine.
//!
//! This module provides the REST API endpoints for vacation totals, payouts
//! and policy administration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayoutRequest, TotalsQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
