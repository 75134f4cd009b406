//! # party-engine
//!
//! Session and selection engine for party games: dumb charades,
//! hum-the-song and guess-the-phrase.
//!
//! ## Design Principles
//!
//! 1. **Reducers, not callbacks**: every transition is
//!    `(state, command) -> (state, effects)`. State machines are testable
//!    without any UI or runtime.
//!
//! 2. **Injectable randomness**: the selector draws through a
//!    `RandomSource`. Production uses a seeded ChaCha8 stream, tests use
//!    scripted indices.
//!
//! 3. **Cancel stale continuations**: category loads carry a generation,
//!    auto-advances carry a round token. Late completions are discarded,
//!    never applied to a round they no longer belong to.
//!
//! ## Architecture
//!
//! - **Selector**: uniform draw that never repeats the previous item when
//!   the pool has an alternative.
//!
//! - **Category Store**: the active category and its pool; a draw before
//!   the pool has loaded is rejected.
//!
//! - **Engines**: `RevealEngine` (operator reads, "next" draws) and
//!   `QuizEngine` (typed answers, scoring, settle-delay auto-advance).
//!
//! - **Runtime**: `GameDriver` executes effects on tokio and publishes
//!   state to the presentation layer.
//!
//! ## Modules
//!
//! - `core`: items, rounds, sessions, RNG, configuration, errors
//! - `pool`: pools and the category store
//! - `selector`: no-immediate-repeat draw
//! - `engine`: reducer trait, commands, effects, both engines
//! - `provider`: content provider trait and in-memory provider
//! - `runtime`: tokio driver

pub mod core;
pub mod engine;
pub mod pool;
pub mod provider;
pub mod runtime;
pub mod selector;

// Re-export commonly used types
pub use crate::core::{
    Category, EngineConfig, EngineError, Feedback, GameConfig, GameMode, GameRegistry, GameRng,
    Item, ItemId, ProviderError, RandomSource, Round, RoundState, ScriptedRng, Session,
};

pub use crate::pool::{CategoryStore, LoadTicket, Pool, PoolStatus};

pub use crate::selector::Selector;

pub use crate::engine::{
    AdvanceToken, Command, Effect, Outcome, QuizEngine, QuizState, Reducer, RevealEngine,
    RevealState, Step,
};

pub use crate::provider::{ContentProvider, MemoryProvider};

pub use crate::runtime::GameDriver;
