//! Commands accepted by the engines.
//!
//! Presentation issues the user-facing commands (`SelectCategory`, `Start`,
//! `Next`, `Submit`, `Skip`, answer visibility, `Leave`). The runtime feeds
//! back the completions of effects it executed (`PoolLoaded`,
//! `SettleElapsed`). Both engines accept the same command type and reject
//! what their mode does not support.

use serde::{Deserialize, Serialize};

use super::effect::AdvanceToken;
use crate::core::{Category, Item, ProviderError};
use crate::pool::LoadTicket;

/// A discrete event fed to a reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Switch to another category (or retry the current one).
    SelectCategory(Category),

    /// A category fetch resolved.
    PoolLoaded {
        ticket: LoadTicket,
        result: Result<Vec<Item>, ProviderError>,
    },

    /// Draw the first item.
    Start,

    /// Draw the next item.
    Next,

    /// Quiz: submit a typed answer.
    Submit(String),

    /// Quiz: discard the current question and draw another.
    Skip,

    /// Quiz: show the canonical answer.
    RevealAnswer,

    /// Quiz: hide the canonical answer.
    HideAnswer,

    /// Quiz: flip answer visibility.
    ToggleAnswer,

    /// Quiz: the settle delay after a correct answer elapsed.
    SettleElapsed(AdvanceToken),

    /// Navigation away from the game.
    Leave,
}

impl Command {
    /// Short name used in logs and `InvalidTransition` errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectCategory(_) => "select_category",
            Command::PoolLoaded { .. } => "pool_loaded",
            Command::Start => "start",
            Command::Next => "next",
            Command::Submit(_) => "submit",
            Command::Skip => "skip",
            Command::RevealAnswer => "reveal_answer",
            Command::HideAnswer => "hide_answer",
            Command::ToggleAnswer => "toggle_answer",
            Command::SettleElapsed(_) => "settle_elapsed",
            Command::Leave => "leave",
        }
    }
}
