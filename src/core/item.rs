//! Content items and their identifiers.
//!
//! Every drawable unit (a movie title, a song, a trivia question) is an
//! immutable [`Item`]. Items are grouped by [`Category`] and identified by an
//! opaque [`ItemId`] that is unique within one pool.
//!
//! ## Usage
//!
//! ```
//! use party_engine::core::{Category, Item};
//!
//! let movie = Item::new("7", "Sholay", Category::new("bollywood"))
//!     .with_hint("Two friends and a dacoit");
//! assert_eq!(movie.hint.as_deref(), Some("Two friends and a dacoit"));
//! assert!(!movie.is_quiz());
//!
//! let question = Item::new("q1", "Capital of <b>France</b>?", Category::new("phrases"))
//!     .with_answer("Paris");
//! assert!(question.is_quiz());
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier of an item.
///
/// Content providers hand out numeric ids for some tables and uuids for
/// others, so the engine keeps ids as strings and never interprets them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create a new item ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Category tag (e.g. `bollywood`, `hindi`).
///
/// Categories partition the content of a game. The engine compares them
/// verbatim; games decide which tags exist via `GameConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category(pub String);

impl Category {
    /// Create a new category tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable content unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within one pool.
    pub id: ItemId,

    /// What the operator reads out, or the rendered question markup.
    pub display_text: String,

    /// Private hint for the operator. `None` for quiz questions.
    pub hint: Option<String>,

    /// Canonical answer. Present only for quiz items.
    pub answer: Option<String>,

    /// Category tag this item belongs to.
    pub category: Category,
}

impl Item {
    /// Create an item with no hint and no answer.
    pub fn new(id: impl Into<ItemId>, display_text: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            display_text: display_text.into(),
            hint: None,
            answer: None,
            category,
        }
    }

    /// Attach an operator hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attach a canonical answer, turning this into a quiz item.
    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Check if this item carries an answer.
    #[must_use]
    pub fn is_quiz(&self) -> bool {
        self.answer.is_some()
    }
}
