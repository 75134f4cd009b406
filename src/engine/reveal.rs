//! Reveal engine (charades, hum-the-song).
//!
//! States: `Idle -> Active -> Active -> ...`. There is no answer checking;
//! the operator reads the item privately and a human judges the round.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{begin_category, draw_into, invalid, Command, Effect, Effects, Outcome, Reducer, Step};
use crate::core::{EngineConfig, EngineError, GameConfig, Item, RandomSource, Round};
use crate::pool::{CategoryStore, LoadResult, PoolStatus};

/// State of a reveal game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    /// Active category and its pool.
    pub store: CategoryStore,
    /// Current draw.
    pub round: Round,
}

impl RevealState {
    /// Item the operator should act out.
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.round.current_item.as_ref()
    }

    /// Private hint for the operator.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.current_item().and_then(|item| item.hint.as_deref())
    }

    /// Availability of the active pool.
    #[must_use]
    pub fn pool_status(&self) -> &PoolStatus {
        self.store.status()
    }
}

/// Reducer for reveal games.
#[derive(Clone, Debug, Default)]
pub struct RevealEngine {
    config: EngineConfig,
}

impl RevealEngine {
    /// Create a reveal engine.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine for a catalogue entry.
    #[must_use]
    pub fn for_game(game: &GameConfig) -> Self {
        Self::new(game.engine.clone())
    }

    fn step(
        &self,
        state: &mut RevealState,
        command: Command,
        rng: &mut dyn RandomSource,
        effects: &mut Effects,
    ) -> Result<Outcome, EngineError> {
        match command {
            Command::SelectCategory(category) => {
                if let Some(ticket) = begin_category(&mut state.store, category) {
                    // Whatever was on screen belongs to the old category.
                    state.round.reset();
                    effects.push(Effect::FetchPool { ticket });
                }
                Ok(Outcome::Applied)
            }

            Command::PoolLoaded { ticket, result } => {
                match state.store.finish_load(&ticket, result) {
                    LoadResult::Stale => return Ok(Outcome::Discarded),
                    LoadResult::Ready(_) => {
                        state.round.reset();
                        if self.config.auto_start {
                            draw_into(&state.store, &mut state.round, rng)?;
                        }
                    }
                    LoadResult::Empty | LoadResult::Failed(_) => state.round.reset(),
                }
                Ok(Outcome::Applied)
            }

            // Next from Idle is the same as Start.
            Command::Start | Command::Next => {
                draw_into(&state.store, &mut state.round, rng)?;
                Ok(Outcome::Applied)
            }

            Command::Leave => {
                state.round.reset();
                Ok(Outcome::Applied)
            }

            other @ (Command::Submit(_)
            | Command::Skip
            | Command::RevealAnswer
            | Command::HideAnswer
            | Command::ToggleAnswer
            | Command::SettleElapsed(_)) => Err(invalid(&state.round, other.name())),
        }
    }
}

impl Reducer for RevealEngine {
    type State = RevealState;

    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn initial_state(&self) -> RevealState {
        RevealState::default()
    }

    fn reduce(
        &self,
        state: &RevealState,
        command: Command,
        rng: &mut dyn RandomSource,
    ) -> Step<RevealState> {
        let name = command.name();
        let mut next = state.clone();
        let mut effects = Effects::new();

        match self.step(&mut next, command, rng, &mut effects) {
            Ok(Outcome::Applied) => {
                debug!(command = name, round = %next.round.state, "reveal transition");
                Step::applied(next, effects)
            }
            Ok(outcome) => Step::unchanged(state.clone(), outcome),
            Err(err) => {
                debug!(command = name, error = %err, "reveal command rejected");
                Step::unchanged(state.clone(), Outcome::Rejected(err))
            }
        }
    }
}
