//! Drawable item set for one category.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Category, EngineError, Item, ItemId};

/// The items of one category, supplied wholesale by the content provider.
///
/// Order carries no meaning. Backed by `im::Vector`, so cloning a pool
/// (and every state that holds one) is O(1).
///
/// ## Example
///
/// ```
/// use party_engine::core::{Category, Item};
/// use party_engine::pool::Pool;
///
/// let hollywood = Category::new("hollywood");
/// let pool = Pool::from_items(
///     hollywood.clone(),
///     vec![
///         Item::new(1u32, "Jaws", hollywood.clone()),
///         Item::new(2u32, "Alien", hollywood.clone()),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(pool.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    category: Category,
    items: Vector<Item>,
}

impl Pool {
    /// Build a pool for `category`.
    ///
    /// Items tagged with a different category are dropped. Fails with
    /// `DuplicateItemId` if two remaining items share an id.
    pub fn from_items(
        category: Category,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<Self, EngineError> {
        let mut seen = FxHashSet::default();
        let mut kept = Vector::new();

        for item in items {
            if item.category != category {
                debug!(
                    item = %item.id,
                    expected = %category,
                    found = %item.category,
                    "dropping item from foreign category"
                );
                continue;
            }
            if !seen.insert(item.id.clone()) {
                return Err(EngineError::DuplicateItemId(item.id));
            }
            kept.push_back(item);
        }

        Ok(Self {
            category,
            items: kept,
        })
    }

    /// Category this pool was built for.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Get the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the pool has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Position of the item with this id.
    #[must_use]
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Check if an item with this id is in the pool.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Iterate over all items.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
