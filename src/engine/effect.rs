//! Side effects requested by reducers.
//!
//! Reducers never perform I/O or arm timers themselves. They describe what
//! should happen and the runtime executes it, feeding completions back as
//! commands.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::pool::LoadTicket;

/// Identity of one scheduled auto-advance.
///
/// Tokens come from the quiz round generation. A token that no longer
/// matches the pending one is ignored when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AdvanceToken(pub u64);

impl std::fmt::Display for AdvanceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Advance({})", self.0)
    }
}

/// Work for the runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Fetch the category named in the ticket, then send `PoolLoaded`.
    FetchPool { ticket: LoadTicket },

    /// Send `SettleElapsed(token)` after `delay`.
    ScheduleAdvance { token: AdvanceToken, delay: Duration },

    /// Drop the scheduled advance for `token`.
    CancelAdvance { token: AdvanceToken },
}

/// Effects of a single step.
/// SmallVec fits the common case (at most a cancel plus a fetch) inline.
pub type Effects = SmallVec<[Effect; 2]>;
