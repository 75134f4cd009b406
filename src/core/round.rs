//! Round and session records.
//!
//! ## Round
//!
//! The current draw: which item is shown, which id must not be drawn next,
//! and where the round sits in `Idle -> Active -> Answered`.
//!
//! ## Session
//!
//! Quiz-only counters. They only ever grow; a category switch never resets
//! them. Leaving the game and coming back starts a fresh session.

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemId};

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// No item drawn yet (or the previous one was discarded).
    #[default]
    Idle,
    /// An item is shown.
    Active,
    /// A quiz submission was judged and feedback is shown.
    Answered,
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoundState::Idle => "idle",
            RoundState::Active => "active",
            RoundState::Answered => "answered",
        })
    }
}

/// Verdict on the latest quiz submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Wrong,
}

/// The engine's record of the current draw.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Item currently shown.
    pub current_item: Option<Item>,

    /// Item shown before the current one.
    pub previous_item_id: Option<ItemId>,

    /// Where the round sits in its lifecycle.
    pub state: RoundState,
}

impl Round {
    /// Create an idle round.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Id the next draw must avoid.
    ///
    /// The item on screen while one is shown, otherwise the last one seen
    /// in this round.
    #[must_use]
    pub fn exclusion_key(&self) -> Option<&ItemId> {
        self.current_item
            .as_ref()
            .map(|item| &item.id)
            .or(self.previous_item_id.as_ref())
    }

    /// Show a freshly drawn item.
    pub fn activate(&mut self, item: Item) {
        if let Some(old) = self.current_item.take() {
            self.previous_item_id = Some(old.id);
        }
        self.current_item = Some(item);
        self.state = RoundState::Active;
    }

    /// Discard the current item and forget the exclusion key.
    pub fn reset(&mut self) {
        *self = Self::idle();
    }

    /// Id of the item on screen.
    #[must_use]
    pub fn current_id(&self) -> Option<&ItemId> {
        self.current_item.as_ref().map(|item| &item.id)
    }

    /// Check if no item is shown.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == RoundState::Idle
    }
}

/// Cumulative quiz counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Questions put on screen, including skipped ones.
    pub questions_seen: u32,

    /// Questions answered correctly.
    pub correct_count: u32,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score equals the number of correct answers.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct_count
    }

    pub(crate) fn record_shown(&mut self) {
        self.questions_seen = self.questions_seen.saturating_add(1);
    }

    pub(crate) fn record_correct(&mut self) {
        self.correct_count = self.correct_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::Category;

    fn item(id: &str) -> Item {
        Item::new(id, id.to_uppercase(), Category::new("test"))
    }

    #[test]
    fn test_idle_round() {
        let round = Round::idle();
        assert!(round.is_idle());
        assert!(round.exclusion_key().is_none());
    }

    #[test]
    fn test_activate_tracks_previous() {
        let mut round = Round::idle();
        round.activate(item("a"));
        assert_eq!(round.state, RoundState::Active);
        assert_eq!(round.exclusion_key(), Some(&ItemId::new("a")));
        assert!(round.previous_item_id.is_none());

        round.activate(item("b"));
        assert_eq!(round.current_id(), Some(&ItemId::new("b")));
        assert_eq!(round.previous_item_id, Some(ItemId::new("a")));
        assert_eq!(round.exclusion_key(), Some(&ItemId::new("b")));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut round = Round::idle();
        round.activate(item("a"));
        round.activate(item("b"));
        round.reset();

        assert!(round.is_idle());
        assert!(round.current_item.is_none());
        assert!(round.previous_item_id.is_none());
    }

    #[test]
    fn test_session_score() {
        let mut session = Session::new();
        session.record_shown();
        session.record_shown();
        session.record_correct();

        assert_eq!(session.questions_seen, 2);
        assert_eq!(session.correct_count, 1);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_round_state_display() {
        assert_eq!(RoundState::Answered.to_string(), "answered");
    }
}
