//! Game engines as explicit reducers.
//!
//! Each engine is a [`Reducer`]: given the current state and a [`Command`],
//! it returns the next state, the [`Effect`]s the runtime must execute, and
//! an [`Outcome`] saying whether the command took effect.
//!
//! - [`RevealEngine`]: charades / hum-the-song. The operator reads the item,
//!   a human judges the round, "next" draws another.
//! - [`QuizEngine`]: guess-the-phrase. Typed answers are checked, scored,
//!   and a correct answer auto-advances after the settle delay.
//!
//! ## Example
//!
//! ```
//! use party_engine::core::{Category, EngineConfig, Item, RoundState, ScriptedRng};
//! use party_engine::engine::{Command, Effect, Outcome, Reducer, RevealEngine};
//!
//! let engine = RevealEngine::new(EngineConfig::default());
//! let mut state = engine.initial_state();
//! let mut rng = ScriptedRng::new(vec![0]);
//!
//! let bolly = Category::new("bollywood");
//! let report = engine.apply(&mut state, Command::SelectCategory(bolly.clone()), &mut rng);
//! let Effect::FetchPool { ticket } = report.effects[0].clone() else { unreachable!() };
//!
//! let items = vec![Item::new(1u32, "Sholay", bolly.clone())];
//! engine.apply(&mut state, Command::PoolLoaded { ticket, result: Ok(items) }, &mut rng);
//!
//! let report = engine.apply(&mut state, Command::Start, &mut rng);
//! assert_eq!(report.outcome, Outcome::Applied);
//! assert_eq!(state.round.state, RoundState::Active);
//! ```

mod command;
mod effect;
mod quiz;
mod reveal;

pub use command::Command;
pub use effect::{AdvanceToken, Effect, Effects};
pub use quiz::{answers_match, QuizEngine, QuizState};
pub use reveal::{RevealEngine, RevealState};

use tracing::debug;

use crate::core::{Category, EngineConfig, EngineError, RandomSource, Round};
use crate::pool::{CategoryStore, LoadTicket};
use crate::selector::Selector;

/// Whether a command took effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// State advanced (possibly to an identical state, e.g. re-selecting
    /// the active category).
    Applied,
    /// A late completion that no longer matches the current round or load
    /// generation. State is untouched.
    Discarded,
    /// The command is not allowed right now. State is untouched.
    Rejected(EngineError),
}

impl Outcome {
    /// Check if the command took effect.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Result of one reduction.
#[derive(Clone, Debug)]
pub struct Step<S> {
    /// The next state.
    pub state: S,
    /// Work for the runtime.
    pub effects: Effects,
    /// Whether the command took effect.
    pub outcome: Outcome,
}

impl<S> Step<S> {
    /// A step that applied.
    pub fn applied(state: S, effects: Effects) -> Self {
        Self {
            state,
            effects,
            outcome: Outcome::Applied,
        }
    }

    /// A step that left `state` as it was.
    pub fn unchanged(state: S, outcome: Outcome) -> Self {
        Self {
            state,
            effects: Effects::new(),
            outcome,
        }
    }
}

/// What happened when a command was applied in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub effects: Effects,
    pub outcome: Outcome,
}

/// Reducer trait.
///
/// Engines implement this trait to define their state machine.
///
/// ## Implementation Notes
///
/// - `reduce` must not mutate anything but the returned state
/// - randomness comes only from the `rng` argument
/// - rejected and discarded commands return the input state unchanged
/// - recoverable conditions (empty or failed pools) live in the state,
///   not in `Outcome::Rejected`
pub trait Reducer {
    /// State machine state. Cheap to clone.
    type State: Clone;

    /// Get the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// State of a freshly entered game.
    fn initial_state(&self) -> Self::State;

    /// Compute the next state for `command`.
    fn reduce(
        &self,
        state: &Self::State,
        command: Command,
        rng: &mut dyn RandomSource,
    ) -> Step<Self::State>;

    // === Convenience Methods ===

    /// Reduce and replace `state` in place.
    fn apply(
        &self,
        state: &mut Self::State,
        command: Command,
        rng: &mut dyn RandomSource,
    ) -> Report {
        let step = self.reduce(state, command, rng);
        *state = step.state;
        Report {
            effects: step.effects,
            outcome: step.outcome,
        }
    }
}

// =============================================================================
// Shared transitions
// =============================================================================

/// Start loading `category` unless it is already loaded or loading.
fn begin_category(store: &mut CategoryStore, category: Category) -> Option<LoadTicket> {
    if store.is_settled_on(&category) {
        debug!(category = %category, "category already selected");
        return None;
    }
    Some(store.begin_load(category))
}

/// Draw from the active pool into `round`, avoiding its exclusion key.
///
/// Leaves `round` untouched on error.
fn draw_into(
    store: &CategoryStore,
    round: &mut Round,
    rng: &mut dyn RandomSource,
) -> Result<(), EngineError> {
    let pool = store.active_pool()?;
    let item = Selector::draw(pool, round.exclusion_key(), rng)?.clone();
    debug!(item = %item.id, category = %pool.category(), "drew item");
    round.activate(item);
    Ok(())
}

fn invalid(round: &Round, command: &'static str) -> EngineError {
    EngineError::InvalidTransition {
        state: round.state,
        command,
    }
}
