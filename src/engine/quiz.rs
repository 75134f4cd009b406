//! Quiz engine (guess-the-phrase).
//!
//! States: `Idle -> Active -> Answered -> Active` (auto, after the settle
//! delay) or `Idle` (category switch, leave).
//!
//! ## Answer checking
//!
//! Case-insensitive equality after trimming surrounding whitespace. No
//! fuzzy, partial or punctuation-insensitive matching.
//!
//! ## Auto-advance
//!
//! A correct answer schedules exactly one advance, identified by an
//! [`AdvanceToken`] taken from the round generation. Anything that abandons
//! the round bumps the generation and cancels the token, so a late
//! `SettleElapsed` is discarded instead of landing on a new round.
//!
//! ## Answer visibility
//!
//! Reveal/hide is locked while a correct answer waits for its advance but
//! stays free after a wrong one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    begin_category, draw_into, invalid, AdvanceToken, Command, Effect, Effects, Outcome, Reducer,
    Step,
};
use crate::core::{
    EngineConfig, EngineError, Feedback, GameConfig, Item, RandomSource, Round, RoundState, Session,
};
use crate::pool::{CategoryStore, LoadResult, PoolStatus};

/// Check a submission against the canonical answer.
///
/// ```
/// use party_engine::engine::answers_match;
///
/// assert!(answers_match("Paris", "  Paris "));
/// assert!(answers_match("Paris", "paris"));
/// assert!(!answers_match("Paris", "Pariss"));
/// ```
#[must_use]
pub fn answers_match(canonical: &str, submitted: &str) -> bool {
    canonical.trim().to_lowercase() == submitted.trim().to_lowercase()
}

/// State of a quiz game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    /// Active category and its pool.
    pub store: CategoryStore,

    /// Current question.
    pub round: Round,

    /// Score counters. Survive category switches.
    pub session: Session,

    /// Verdict on the latest submission for the current question.
    pub feedback: Option<Feedback>,

    /// Whether the canonical answer is shown.
    pub answer_visible: bool,

    /// Auto-advance waiting for its settle delay.
    pub pending_advance: Option<AdvanceToken>,

    // Bumped on every new question and every abandoned round.
    generation: u64,
}

impl QuizState {
    /// Question on screen.
    #[must_use]
    pub fn current_question(&self) -> Option<&Item> {
        self.round.current_item.as_ref()
    }

    /// Canonical answer, when revealed.
    #[must_use]
    pub fn shown_answer(&self) -> Option<&str> {
        if !self.answer_visible {
            return None;
        }
        self.current_question().and_then(|q| q.answer.as_deref())
    }

    /// Availability of the active pool.
    #[must_use]
    pub fn pool_status(&self) -> &PoolStatus {
        self.store.status()
    }

    /// Placeholder text when no question can be shown.
    ///
    /// ```
    /// use party_engine::engine::QuizState;
    ///
    /// assert_eq!(QuizState::default().status_message(), None);
    /// ```
    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        match self.store.status() {
            PoolStatus::Empty => Some("No questions found"),
            PoolStatus::Failed(_) => Some("Failed to load questions"),
            PoolStatus::Unloaded | PoolStatus::Loading | PoolStatus::Ready(_) => None,
        }
    }

    /// Current round generation.
    #[must_use]
    pub fn round_generation(&self) -> u64 {
        self.generation
    }

    /// Check if a correct answer is waiting for its auto-advance.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.feedback == Some(Feedback::Correct)
    }

    /// Drop feedback, hide the answer and cancel any pending advance.
    fn abandon(&mut self, effects: &mut Effects) {
        if let Some(token) = self.pending_advance.take() {
            debug!(%token, "cancelling pending advance");
            effects.push(Effect::CancelAdvance { token });
        }
        self.generation += 1;
        self.feedback = None;
        self.answer_visible = false;
    }

    /// Put a fresh question on screen. Leaves the state untouched on error.
    fn show_next(&mut self, rng: &mut dyn RandomSource) -> Result<(), EngineError> {
        draw_into(&self.store, &mut self.round, rng)?;
        self.session.record_shown();
        self.generation += 1;
        self.feedback = None;
        self.answer_visible = false;
        Ok(())
    }
}

/// Reducer for quiz games.
#[derive(Clone, Debug, Default)]
pub struct QuizEngine {
    config: EngineConfig,
}

impl QuizEngine {
    /// Create a quiz engine.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine for a catalogue entry.
    #[must_use]
    pub fn for_game(game: &GameConfig) -> Self {
        Self::new(game.engine.clone())
    }

    fn submit(
        &self,
        state: &mut QuizState,
        command: &'static str,
        text: &str,
        effects: &mut Effects,
    ) -> Result<Outcome, EngineError> {
        let accepting = match state.round.state {
            RoundState::Active => true,
            // Input stays open after a wrong answer.
            RoundState::Answered => state.feedback == Some(Feedback::Wrong),
            RoundState::Idle => false,
        };
        // Blank input never counts as an attempt.
        if !accepting || text.trim().is_empty() {
            return Err(invalid(&state.round, command));
        }
        let Some(question) = state.current_question() else {
            return Err(invalid(&state.round, command));
        };

        let correct = question
            .answer
            .as_deref()
            .is_some_and(|answer| answers_match(answer, text));

        state.round.state = RoundState::Answered;
        if correct {
            state.feedback = Some(Feedback::Correct);
            state.session.record_correct();
            state.generation += 1;
            let token = AdvanceToken(state.generation);
            state.pending_advance = Some(token);
            effects.push(Effect::ScheduleAdvance {
                token,
                delay: self.config.settle_delay,
            });
            debug!(%token, score = state.session.score(), "correct answer");
        } else {
            state.feedback = Some(Feedback::Wrong);
            debug!("wrong answer");
        }
        Ok(Outcome::Applied)
    }

    fn set_answer_visibility(
        &self,
        state: &mut QuizState,
        command: &'static str,
        visible: impl FnOnce(bool) -> bool,
    ) -> Result<Outcome, EngineError> {
        if !self.config.reveal_answer_enabled
            || state.is_settling()
            || state.current_question().is_none()
        {
            return Err(invalid(&state.round, command));
        }
        state.answer_visible = visible(state.answer_visible);
        Ok(Outcome::Applied)
    }

    fn step(
        &self,
        state: &mut QuizState,
        command: Command,
        rng: &mut dyn RandomSource,
        effects: &mut Effects,
    ) -> Result<Outcome, EngineError> {
        let name = command.name();
        match command {
            Command::SelectCategory(category) => {
                if let Some(ticket) = begin_category(&mut state.store, category) {
                    state.abandon(effects);
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
                            state.show_next(rng)?;
                        }
                    }
                    LoadResult::Empty | LoadResult::Failed(_) => state.round.reset(),
                }
                Ok(Outcome::Applied)
            }

            Command::Start | Command::Next => {
                if !state.round.is_idle() {
                    return Err(invalid(&state.round, name));
                }
                state.show_next(rng)?;
                Ok(Outcome::Applied)
            }

            Command::Submit(text) => self.submit(state, name, &text, effects),

            Command::Skip => {
                if state.pending_advance.is_some() {
                    return Err(invalid(&state.round, name));
                }
                state.show_next(rng)?;
                Ok(Outcome::Applied)
            }

            Command::RevealAnswer => self.set_answer_visibility(state, name, |_| true),
            Command::HideAnswer => self.set_answer_visibility(state, name, |_| false),
            Command::ToggleAnswer => self.set_answer_visibility(state, name, |shown| !shown),

            Command::SettleElapsed(token) => {
                if state.pending_advance != Some(token) {
                    debug!(%token, "ignoring superseded advance");
                    return Ok(Outcome::Discarded);
                }
                state.show_next(rng)?;
                state.pending_advance = None;
                Ok(Outcome::Applied)
            }

            Command::Leave => {
                state.abandon(effects);
                state.round.reset();
                Ok(Outcome::Applied)
            }
        }
    }
}

impl Reducer for QuizEngine {
    type State = QuizState;

    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn initial_state(&self) -> QuizState {
        QuizState::default()
    }

    fn reduce(
        &self,
        state: &QuizState,
        command: Command,
        rng: &mut dyn RandomSource,
    ) -> Step<QuizState> {
        let name = command.name();
        let mut next = state.clone();
        let mut effects = Effects::new();

        match self.step(&mut next, command, rng, &mut effects) {
            Ok(Outcome::Applied) => {
                debug!(
                    command = name,
                    round = %next.round.state,
                    seen = next.session.questions_seen,
                    correct = next.session.correct_count,
                    "quiz transition"
                );
                Step::applied(next, effects)
            }
            Ok(outcome) => Step::unchanged(state.clone(), outcome),
            Err(err) => {
                debug!(command = name, error = %err, "quiz command rejected");
                Step::unchanged(state.clone(), Outcome::Rejected(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, ScriptedRng};

    fn questions(n: u32) -> Vec<Item> {
        (0..n)
            .map(|i| {
                Item::new(i, format!("Question {i}"), Category::new("phrases"))
                    .with_answer(format!("answer {i}"))
            })
            .collect()
    }

    fn ready(engine: &QuizEngine, n: u32) -> QuizState {
        let mut state = engine.initial_state();
        let mut rng = ScriptedRng::default();
        let report = engine.apply(
            &mut state,
            Command::SelectCategory(Category::new("phrases")),
            &mut rng,
        );
        let Some(Effect::FetchPool { ticket }) = report.effects.first().cloned() else {
            panic!("expected a fetch");
        };
        engine.apply(
            &mut state,
            Command::PoolLoaded {
                ticket,
                result: Ok(questions(n)),
            },
            &mut rng,
        );
        state
    }

    fn scheduled_token(effects: &Effects) -> AdvanceToken {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::ScheduleAdvance { token, .. } => Some(*token),
                _ => None,
            })
            .expect("no advance scheduled")
    }

    #[test]
    fn test_answers_match_normalization() {
        assert!(answers_match("Paris", "  Paris "));
        assert!(answers_match("Paris", "paris"));
        assert!(answers_match("  Paris", "PARIS"));
        assert!(!answers_match("Paris", "Pariss"));
        assert!(!answers_match("Paris", "Par is"));
        assert!(!answers_match("New York", "new-york"));
    }

    #[test]
    fn test_submit_while_idle_rejected() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 3);
        let mut rng = ScriptedRng::default();

        let report = engine.apply(&mut state, Command::Submit("answer 0".into()), &mut rng);
        assert_eq!(
            report.outcome,
            Outcome::Rejected(EngineError::InvalidTransition {
                state: RoundState::Idle,
                command: "submit",
            })
        );
        assert_eq!(state.session, Session::new());
    }

    #[test]
    fn test_correct_answer_schedules_advance() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 3);
        let mut rng = ScriptedRng::new(vec![0]);
        engine.apply(&mut state, Command::Start, &mut rng);

        let report = engine.apply(&mut state, Command::Submit(" ANSWER 0 ".into()), &mut rng);
        assert!(report.outcome.is_applied());
        assert_eq!(state.round.state, RoundState::Answered);
        assert_eq!(state.feedback, Some(Feedback::Correct));
        assert_eq!(state.session.correct_count, 1);

        let token = scheduled_token(&report.effects);
        assert_eq!(state.pending_advance, Some(token));
        assert!(report.effects.iter().any(|e| matches!(
            e,
            Effect::ScheduleAdvance { delay, .. } if *delay == engine.config().settle_delay
        )));

        let report = engine.apply(&mut state, Command::SettleElapsed(token), &mut rng);
        assert!(report.outcome.is_applied());
        assert_eq!(state.round.state, RoundState::Active);
        assert_eq!(state.feedback, None);
        assert_eq!(state.pending_advance, None);
        assert_eq!(state.session.questions_seen, 2);
    }

    #[test]
    fn test_wrong_answer_keeps_input_open() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 3);
        let mut rng = ScriptedRng::new(vec![1]);
        engine.apply(&mut state, Command::Start, &mut rng);

        engine.apply(&mut state, Command::Submit("nope".into()), &mut rng);
        assert_eq!(state.round.state, RoundState::Answered);
        assert_eq!(state.feedback, Some(Feedback::Wrong));
        assert!(state.pending_advance.is_none());

        let report = engine.apply(&mut state, Command::Submit("answer 1".into()), &mut rng);
        assert!(report.outcome.is_applied());
        assert_eq!(state.feedback, Some(Feedback::Correct));
        assert_eq!(state.session.correct_count, 1);
        assert_eq!(state.session.questions_seen, 1);
    }

    #[test]
    fn test_blank_submission_rejected() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 2);
        let mut rng = ScriptedRng::default();
        engine.apply(&mut state, Command::Start, &mut rng);

        let report = engine.apply(&mut state, Command::Submit("   ".into()), &mut rng);
        assert!(matches!(report.outcome, Outcome::Rejected(_)));
        assert_eq!(state.feedback, None);
        assert_eq!(state.round.state, RoundState::Active);
    }

    #[test]
    fn test_settling_locks_commands() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 3);
        let mut rng = ScriptedRng::new(vec![2]);
        engine.apply(&mut state, Command::Start, &mut rng);
        engine.apply(&mut state, Command::Submit("answer 2".into()), &mut rng);
        let before = state.clone();

        for command in [
            Command::Submit("answer 2".into()),
            Command::Skip,
            Command::RevealAnswer,
            Command::ToggleAnswer,
            Command::Start,
        ] {
            let report = engine.apply(&mut state, command, &mut rng);
            assert!(matches!(report.outcome, Outcome::Rejected(_)));
        }
        assert_eq!(state, before);
        assert_eq!(state.session.correct_count, 1);
    }

    #[test]
    fn test_skip_draws_without_penalty() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 3);
        let mut rng = ScriptedRng::new(vec![0, 0]);
        engine.apply(&mut state, Command::Start, &mut rng);
        engine.apply(&mut state, Command::Submit("nope".into()), &mut rng);
        engine.apply(&mut state, Command::RevealAnswer, &mut rng);

        let report = engine.apply(&mut state, Command::Skip, &mut rng);
        assert!(report.outcome.is_applied());
        assert_eq!(state.round.state, RoundState::Active);
        assert_eq!(state.feedback, None);
        assert!(!state.answer_visible);
        assert_eq!(state.session.questions_seen, 2);
        assert_eq!(state.session.correct_count, 0);
        assert_ne!(state.round.current_id(), state.round.previous_item_id.as_ref());
    }

    #[test]
    fn test_reveal_answer_free_after_wrong() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 2);
        let mut rng = ScriptedRng::new(vec![0]);
        engine.apply(&mut state, Command::Start, &mut rng);
        engine.apply(&mut state, Command::Submit("wrong".into()), &mut rng);

        engine.apply(&mut state, Command::RevealAnswer, &mut rng);
        assert_eq!(state.shown_answer(), Some("answer 0"));
        engine.apply(&mut state, Command::ToggleAnswer, &mut rng);
        assert_eq!(state.shown_answer(), None);
        engine.apply(&mut state, Command::ToggleAnswer, &mut rng);
        engine.apply(&mut state, Command::HideAnswer, &mut rng);
        assert!(!state.answer_visible);

        // Visibility never touches scoring.
        assert_eq!(state.session.correct_count, 0);
        assert_eq!(state.feedback, Some(Feedback::Wrong));
    }

    #[test]
    fn test_reveal_disabled_by_config() {
        let engine = QuizEngine::new(EngineConfig::default().with_reveal_answer(false));
        let mut state = ready(&engine, 2);
        let mut rng = ScriptedRng::default();
        engine.apply(&mut state, Command::Start, &mut rng);

        let report = engine.apply(&mut state, Command::RevealAnswer, &mut rng);
        assert!(matches!(report.outcome, Outcome::Rejected(_)));
    }

    #[test]
    fn test_leave_cancels_pending_advance() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 3);
        let mut rng = ScriptedRng::default();
        engine.apply(&mut state, Command::Start, &mut rng);
        let report = engine.apply(&mut state, Command::Submit("answer 0".into()), &mut rng);
        let token = scheduled_token(&report.effects);

        let report = engine.apply(&mut state, Command::Leave, &mut rng);
        assert_eq!(report.effects.as_slice(), &[Effect::CancelAdvance { token }]);
        assert!(state.round.is_idle());
        assert_eq!(state.session.correct_count, 1);

        let report = engine.apply(&mut state, Command::SettleElapsed(token), &mut rng);
        assert_eq!(report.outcome, Outcome::Discarded);
        assert!(state.round.is_idle());
    }

    #[test]
    fn test_auto_start_counts_first_question() {
        let engine = QuizEngine::new(EngineConfig::default().with_auto_start(true));
        let state = ready(&engine, 2);

        assert_eq!(state.round.state, RoundState::Active);
        assert_eq!(state.session.questions_seen, 1);
    }

    #[test]
    fn test_start_while_active_rejected() {
        let engine = QuizEngine::default();
        let mut state = ready(&engine, 2);
        let mut rng = ScriptedRng::default();
        engine.apply(&mut state, Command::Start, &mut rng);

        let report = engine.apply(&mut state, Command::Next, &mut rng);
        assert!(matches!(report.outcome, Outcome::Rejected(_)));
        assert_eq!(state.session.questions_seen, 1);
    }
}
