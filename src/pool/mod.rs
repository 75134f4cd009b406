//! Pools and the category store.
//!
//! A [`Pool`] is the drawable item set of one category. The
//! [`CategoryStore`] tracks which category is active and guards against
//! overlapping loads writing a stale pool.

mod content;
mod store;

pub use content::Pool;
pub use store::{CategoryStore, LoadResult, LoadTicket, PoolStatus};
