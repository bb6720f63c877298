//! Application state for the Vacation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::service::VacationService;
use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the vacation service, which in turn owns the record store every
/// handler reads from.
#[derive(Clone)]
pub struct AppState {
    /// The vacation service backed by the configured record store.
    service: VacationService<dyn RecordStore>,
}

impl AppState {
    /// Creates a new application state over the given record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            service: VacationService::new(store),
        }
    }

    /// Creates application state seeded from a loaded configuration.
    pub fn from_config(config: ConfigLoader) -> EngineResult<Self> {
        let store = config.into_store()?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Returns the vacation service.
    pub fn service(&self) -> &VacationService<dyn RecordStore> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicySettings;
    use crate::store::InMemoryRecordStore;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_config() {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        let state = AppState::from_config(config).unwrap();

        assert_eq!(state.service().store().employees().unwrap().len(), 3);
    }

    #[test]
    fn test_app_state_shares_store_between_clones() {
        let state = AppState::new(Arc::new(InMemoryRecordStore::new(
            PolicySettings::default(),
        )));
        let clone = state.clone();

        clone
            .service()
            .update_policy_settings(PolicySettings {
                calculation_period_months: 6,
                ..PolicySettings::default()
            })
            .unwrap();

        assert_eq!(
            state.service().policy_settings().unwrap().calculation_period_months,
            6
        );
    }
}
