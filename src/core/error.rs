//! Error types.
//!
//! Nothing in the engine is fatal. Reducers turn these into explicit state
//! (`PoolStatus::Empty`, `PoolStatus::Failed`) or into a rejected
//! [`Outcome`](crate::engine::Outcome) that leaves the state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::{Category, ItemId};
use super::round::RoundState;

/// Errors surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The category resolved but contains zero items.
    #[error("no content available for this category")]
    EmptyPool,

    /// The content provider failed.
    #[error("failed to load content: {0}")]
    LoadFailed(String),

    /// A draw was requested before the active category finished loading.
    #[error("pool not ready - category load still in flight")]
    PoolNotReady,

    /// A command was issued in a state that forbids it.
    #[error("command `{command}` is not allowed while {state}")]
    InvalidTransition {
        state: RoundState,
        command: &'static str,
    },

    /// Two items in one pool share an id.
    #[error("duplicate item id {0} in pool")]
    DuplicateItemId(ItemId),

    /// No game registered under this id.
    #[error("unknown game: {0}")]
    UnknownGame(String),

    /// The game does not offer this category.
    #[error("game {game} has no category {category}")]
    UnknownCategory { game: String, category: Category },
}

/// Errors reported by a content provider.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ProviderError {
    /// Backend unreachable or refused the request.
    #[error("content backend unavailable: {0}")]
    Unavailable(String),

    /// Backend answered with an error.
    #[error("content query failed: {0}")]
    Query(String),
}

impl From<ProviderError> for EngineError {
    fn from(err: ProviderError) -> Self {
        EngineError::LoadFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_converts_to_load_failed() {
        let err: EngineError = ProviderError::Query("timeout".to_string()).into();
        assert_eq!(
            err,
            EngineError::LoadFailed("content query failed: timeout".to_string())
        );
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = EngineError::InvalidTransition {
            state: RoundState::Idle,
            command: "submit",
        };
        assert_eq!(err.to_string(), "command `submit` is not allowed while idle");
    }
}
