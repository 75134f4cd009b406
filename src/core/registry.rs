//! Game catalogue.
//!
//! The `GameRegistry` stores every playable game and resolves category
//! selections against the categories each game offers.

use rustc_hash::FxHashMap;

use super::config::{EngineConfig, GameConfig, GameMode};
use super::error::EngineError;
use super::item::Category;

/// Registry of game configurations.
///
/// ## Example
///
/// ```
/// use party_engine::core::{GameMode, GameRegistry};
///
/// let registry = GameRegistry::standard();
///
/// let charades = registry.get("dumb-charades").unwrap();
/// assert_eq!(charades.mode, GameMode::Reveal);
/// assert_eq!(charades.default_category.as_str(), "bollywood");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameRegistry {
    games: FxHashMap<String, GameConfig>,
    order: Vec<String>,
}

impl GameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The three games of the party pack.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(
            GameConfig::new(
                "dumb-charades",
                "Dumb Charades",
                GameMode::Reveal,
                Category::new("bollywood"),
            )
            .with_description("Act out movies and guess with your team!")
            .with_category(Category::new("hollywood")),
        );

        registry.register(
            GameConfig::new(
                "guess-phrase",
                "Guess The Phrase",
                GameMode::Quiz,
                Category::new("phrases"),
            )
            .with_description("Guess phrases based on clues provided!")
            .with_engine(EngineConfig::default().with_auto_start(true)),
        );

        registry.register(
            GameConfig::new(
                "hum-the-song",
                "Hum The Song",
                GameMode::Reveal,
                Category::new("english"),
            )
            .with_description("Hum popular songs and let your team guess them!")
            .with_category(Category::new("hindi")),
        );

        registry
    }

    /// Register a game.
    ///
    /// Panics if a game with the same ID already exists.
    pub fn register(&mut self, game: GameConfig) {
        if self.games.contains_key(&game.id) {
            panic!("Game with ID {:?} already registered", game.id);
        }
        self.order.push(game.id.clone());
        self.games.insert(game.id.clone(), game);
    }

    /// Get a game by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GameConfig> {
        self.games.get(id)
    }

    /// Get a game by ID or report it as unknown.
    pub fn lookup(&self, id: &str) -> Result<&GameConfig, EngineError> {
        self.get(id)
            .ok_or_else(|| EngineError::UnknownGame(id.to_string()))
    }

    /// Resolve a category selection for a game.
    pub fn resolve_category(&self, id: &str, category: &str) -> Result<Category, EngineError> {
        let game = self.lookup(id)?;
        let category = Category::new(category);
        if game.offers(&category) {
            Ok(category)
        } else {
            Err(EngineError::UnknownCategory {
                game: game.id.clone(),
                category,
            })
        }
    }

    /// Get the number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterate over games in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GameConfig> {
        self.order.iter().filter_map(|id| self.games.get(id))
    }

    /// Find games driven by a given engine.
    pub fn find_by_mode(&self, mode: GameMode) -> impl Iterator<Item = &GameConfig> {
        self.iter().filter(move |g| g.mode == mode)
    }
}
