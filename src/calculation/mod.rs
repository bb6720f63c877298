//! Calculation logic for the Vacation Engine.
//!
//! This module contains the pure calculation functions: average daily wage
//! over the policy's calculation period, vacation accrual from tenure,
//! payout valuation, and aggregation of payouts across employees. None of
//! them perform I/O or read shared state; policy settings are always passed
//! in explicitly.

mod accrual;
mod average_wage;
mod payout;
mod rounding;
mod totals;

pub use accrual::{ACCRUAL_DAYS_PER_YEAR, AccrualResult, accrual_rate, compute_accrued_days};
pub use average_wage::{AverageWageResult, compute_average_daily_wage};
pub use payout::{PayoutCalculation, compute_payout};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use totals::aggregate;
