//! Configuration loading and management for the Vacation Engine.
//!
//! This module provides the [`PolicySettings`] snapshot that parameterizes
//! every calculation, and a loader that reads the policy and seed data
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Days per year: {}", config.policy().default_days_per_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccrualCap, EmployeesConfig, PolicySettings, WageRecordsConfig};
