//! Vacation Engine
//!
//! This crate computes vacation entitlement and payouts: how many vacation
//! days an employee has accrued from their tenure, what those days are worth
//! at their average daily wage, and the fleet-wide total owed across all
//! employees. Every calculation is parameterized by an explicit
//! [`config::PolicySettings`] snapshot and records an audit trail.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
