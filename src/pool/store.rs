//! Category store: the active category and its pool.
//!
//! Loading is split in two halves so the store never awaits anything itself:
//!
//! 1. [`CategoryStore::begin_load`] bumps the load generation, drops the old
//!    pool and hands out a [`LoadTicket`].
//! 2. [`CategoryStore::finish_load`] applies the provider's answer only if the
//!    ticket still matches the current generation.
//!
//! Whichever selection came last wins, no matter in which order the fetches
//! resolve.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::content::Pool;
use crate::core::{Category, EngineError, Item, ProviderError};

/// Identity of one category load request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    /// Store generation at the time the load started.
    pub generation: u64,
    /// Category being fetched.
    pub category: Category,
}

/// Availability of the active pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolStatus {
    /// No category selected yet.
    #[default]
    Unloaded,
    /// Fetch in flight; draws are rejected.
    Loading,
    /// Pool available for drawing.
    Ready(Pool),
    /// Category resolved to zero items ("no content").
    Empty,
    /// Provider failed; retry-eligible.
    Failed(String),
}

/// What `finish_load` did with a provider answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadResult {
    /// Pool installed with this many items.
    Ready(usize),
    /// Category has no content.
    Empty,
    /// Provider failed or returned an invalid pool.
    Failed(EngineError),
    /// A newer selection superseded this load; nothing changed.
    Stale,
}

/// Owns the active category and its pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStore {
    active: Option<Category>,
    status: PoolStatus,
    generation: u64,
}

impl CategoryStore {
    /// Create a store with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected category.
    #[must_use]
    pub fn active_category(&self) -> Option<&Category> {
        self.active.as_ref()
    }

    /// Availability of the active pool.
    #[must_use]
    pub fn status(&self) -> &PoolStatus {
        &self.status
    }

    /// Current load generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if `category` is already selected and loaded or loading.
    ///
    /// Re-selecting such a category needs no fetch. Empty or failed
    /// categories are always refetched.
    #[must_use]
    pub fn is_settled_on(&self, category: &Category) -> bool {
        self.active.as_ref() == Some(category)
            && matches!(self.status, PoolStatus::Ready(_) | PoolStatus::Loading)
    }

    /// Start loading `category`.
    ///
    /// The previous pool is discarded immediately, so draws are rejected
    /// until the matching `finish_load` arrives.
    pub fn begin_load(&mut self, category: Category) -> LoadTicket {
        self.generation += 1;
        self.active = Some(category.clone());
        self.status = PoolStatus::Loading;
        info!(category = %category, generation = self.generation, "loading category");

        LoadTicket {
            generation: self.generation,
            category,
        }
    }

    /// Check if a ticket belongs to the latest selection.
    #[must_use]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && self.active.as_ref() == Some(&ticket.category)
    }

    /// Apply a provider answer for `ticket`.
    pub fn finish_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<Item>, ProviderError>,
    ) -> LoadResult {
        if !self.is_current(ticket) {
            warn!(
                category = %ticket.category,
                generation = ticket.generation,
                current = self.generation,
                "discarding superseded category load"
            );
            return LoadResult::Stale;
        }

        let items = match result {
            Ok(items) => items,
            Err(err) => {
                warn!(category = %ticket.category, error = %err, "category load failed");
                let err = EngineError::from(err);
                self.status = PoolStatus::Failed(err.to_string());
                return LoadResult::Failed(err);
            }
        };

        match Pool::from_items(ticket.category.clone(), items) {
            Ok(pool) if pool.is_empty() => {
                info!(category = %ticket.category, "category has no content");
                self.status = PoolStatus::Empty;
                LoadResult::Empty
            }
            Ok(pool) => {
                let len = pool.len();
                info!(category = %ticket.category, items = len, "category ready");
                self.status = PoolStatus::Ready(pool);
                LoadResult::Ready(len)
            }
            Err(err) => {
                warn!(category = %ticket.category, error = %err, "provider returned an invalid pool");
                self.status = PoolStatus::Failed(err.to_string());
                LoadResult::Failed(err)
            }
        }
    }

    /// Snapshot of the active pool.
    ///
    /// - `PoolNotReady` while nothing is selected or a fetch is in flight
    /// - `EmptyPool` when the category has no content
    /// - `LoadFailed` when the provider failed
    pub fn active_pool(&self) -> Result<&Pool, EngineError> {
        match &self.status {
            PoolStatus::Ready(pool) => Ok(pool),
            PoolStatus::Unloaded | PoolStatus::Loading => Err(EngineError::PoolNotReady),
            PoolStatus::Empty => Err(EngineError::EmptyPool),
            PoolStatus::Failed(reason) => Err(EngineError::LoadFailed(reason.clone())),
        }
    }
}
