//! Load state wrapper for presentation layers.
//!
//! The engine itself only ever returns data or an [`EngineError`]. Screens
//! that poll for results need to distinguish "not fetched yet" from "no
//! data", so they wrap results in a [`LoadState`] instead of carrying
//! separate loading and error flags next to the data.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The lifecycle of a value being fetched for display.
///
/// # Example
///
/// ```
/// use vacation_engine::models::LoadState;
///
/// let state: LoadState<u32> = LoadState::Pending;
/// assert!(state.is_loading());
/// assert_eq!(state.error(), None);
///
/// let state = LoadState::Ready(3);
/// assert_eq!(state.value(), Some(&3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    /// The value has been requested but not produced yet.
    Pending,
    /// The value is available.
    Ready(T),
    /// Producing the value failed; holds a user-presentable message.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Returns true while the value is still pending.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    /// Returns the failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the value if it is ready.
    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, EngineError>> for LoadState<T> {
    fn from(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}
