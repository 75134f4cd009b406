//! Engine and game configuration types.
//!
//! - `EngineConfig`: tunables shared by both engines (seed, settle delay)
//! - `GameMode`: which engine drives a game
//! - `GameConfig`: one entry in the game catalogue

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::item::Category;

/// Default pause between a correct answer and the next question.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Random seed for the selector.
    /// `None` seeds from entropy; a fixed seed makes draws reproducible.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Pause after a correct answer before the next question is drawn.
    #[serde(default = "default_settle_delay")]
    pub settle_delay: Duration,

    /// Draw the first item as soon as a pool arrives instead of waiting
    /// for an explicit start.
    #[serde(default)]
    pub auto_start: bool,

    /// Allow the quiz answer to be revealed on demand.
    #[serde(default = "default_true")]
    pub reveal_answer_enabled: bool,
}

fn default_settle_delay() -> Duration {
    DEFAULT_SETTLE_DELAY
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            settle_delay: DEFAULT_SETTLE_DELAY,
            auto_start: false,
            reveal_answer_enabled: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Create a new config that draws as soon as content arrives.
    #[must_use]
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// Create a new config with answer reveal switched on or off.
    #[must_use]
    pub fn with_reveal_answer(mut self, enabled: bool) -> Self {
        self.reveal_answer_enabled = enabled;
        self
    }
}

/// Which engine drives a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Operator reads the item privately and acts it out; no answer checking.
    Reveal,
    /// Players type answers that are checked against the canonical answer.
    Quiz,
}

/// One entry in the game catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stable identifier (e.g. `dumb-charades`).
    pub id: String,

    /// Human-readable title.
    pub title: String,

    /// One-line pitch shown on the home screen.
    pub description: String,

    /// Engine that runs this game.
    pub mode: GameMode,

    /// Categories offered by this game, in display order.
    pub categories: Vec<Category>,

    /// Category selected when the game opens.
    pub default_category: Category,

    /// Engine tunables for this game.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl GameConfig {
    /// Create a game with a single default category.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        mode: GameMode,
        default_category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            mode,
            categories: vec![default_category.clone()],
            default_category,
            engine: EngineConfig::default(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Offer an additional category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Set the engine configuration.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Check if this game offers a category.
    #[must_use]
    pub fn offers(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }
}
