//! Content providers.
//!
//! A [`ContentProvider`] supplies the full item set of one category. The
//! engine never retries a failed fetch; the failure is surfaced through
//! `PoolStatus::Failed` and the presentation layer decides whether to
//! select the category again.
//!
//! [`MemoryProvider`] keeps everything in memory. It backs tests and demos
//! and can simulate latency and outages per category.

use std::time::Duration;

use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::core::{Category, Item, ProviderError};

/// Source of category content.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch every item tagged with `category`.
    async fn fetch_items(&self, category: &Category) -> Result<Vec<Item>, ProviderError>;
}

/// In-memory provider.
///
/// ## Example
///
/// ```
/// use party_engine::core::{Category, Item};
/// use party_engine::provider::{ContentProvider, MemoryProvider};
///
/// let hindi = Category::new("hindi");
/// let provider = MemoryProvider::new()
///     .with_item(Item::new(1u32, "Tum Hi Ho", hindi.clone()));
///
/// let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
/// let items = rt.block_on(provider.fetch_items(&hindi)).unwrap();
/// assert_eq!(items.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryProvider {
    items: FxHashMap<Category, Vec<Item>>,
    latency: FxHashMap<Category, Duration>,
    failing: FxHashSet<Category>,
}

impl MemoryProvider {
    /// Create an empty provider. Every category resolves to zero items.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item under its own category.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.entry(item.category.clone()).or_default().push(item);
        self
    }

    /// Add several items.
    #[must_use]
    pub fn with_items(self, items: impl IntoIterator<Item = Item>) -> Self {
        items.into_iter().fold(self, Self::with_item)
    }

    /// Delay every fetch of `category` by `delay`.
    #[must_use]
    pub fn with_latency(mut self, category: Category, delay: Duration) -> Self {
        self.latency.insert(category, delay);
        self
    }

    /// Make every fetch of `category` fail.
    #[must_use]
    pub fn failing(mut self, category: Category) -> Self {
        self.failing.insert(category);
        self
    }

    /// Number of items stored for `category`.
    #[must_use]
    pub fn count(&self, category: &Category) -> usize {
        self.items.get(category).map_or(0, Vec::len)
    }
}

#[async_trait]
impl ContentProvider for MemoryProvider {
    async fn fetch_items(&self, category: &Category) -> Result<Vec<Item>, ProviderError> {
        if let Some(delay) = self.latency.get(category) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(category) {
            return Err(ProviderError::Unavailable(format!(
                "category {category} is offline"
            )));
        }
        let items = self.items.get(category).cloned().unwrap_or_default();
        debug!(category = %category, items = items.len(), "served category");
        Ok(items)
    }
}
