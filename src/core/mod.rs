//! Core engine types: items, rounds, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by both engines.
//! Games configure them via `GameConfig` rather than modifying the core.

pub mod config;
pub mod error;
pub mod item;
pub mod registry;
pub mod rng;
pub mod round;

pub use config::{EngineConfig, GameConfig, GameMode, DEFAULT_SETTLE_DELAY};
pub use error::{EngineError, ProviderError};
pub use item::{Category, Item, ItemId};
pub use registry::GameRegistry;
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use round::{Feedback, Round, RoundState, Session};
