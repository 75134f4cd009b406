//! Random draw without immediate repeats.
//!
//! Whenever a pool has more than one item, the drawn item never has the id
//! of the previous draw. Among the remaining items the draw is uniform:
//!
//! - previous id present in the pool: each other item has `1 / (n - 1)`
//! - otherwise: each item has `1 / n`
//!
//! The excluded slot is skipped by index shifting, so every draw costs
//! exactly one call to the random source and no retries.
//!
//! ```
//! use party_engine::core::{Category, Item, ItemId, ScriptedRng};
//! use party_engine::pool::Pool;
//! use party_engine::selector::Selector;
//!
//! let cat = Category::new("english");
//! let pool = Pool::from_items(
//!     cat.clone(),
//!     (0..3u32).map(|i| Item::new(i, format!("Song {i}"), cat.clone())),
//! )
//! .unwrap();
//!
//! // Index 1 is excluded, so a scripted 1 lands on the item after it.
//! let mut rng = ScriptedRng::new(vec![1]);
//! let item = Selector::draw(&pool, Some(&ItemId::from(1u32)), &mut rng).unwrap();
//! assert_eq!(item.id, ItemId::from(2u32));
//! ```

use tracing::trace;

use crate::core::{EngineError, Item, ItemId, RandomSource};
use crate::pool::Pool;

/// Draw policy over a [`Pool`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Selector;

impl Selector {
    /// Draw one item from `pool`, avoiding `previous` when possible.
    ///
    /// - Empty pool: `EmptyPool`
    /// - Single item: that item, even if it is `previous`
    /// - Otherwise: uniform over items whose id differs from `previous`
    pub fn draw<'p>(
        pool: &'p Pool,
        previous: Option<&ItemId>,
        rng: &mut dyn RandomSource,
    ) -> Result<&'p Item, EngineError> {
        let index = Self::draw_index(pool, previous, rng)?;
        pool.get(index).ok_or(EngineError::EmptyPool)
    }

    /// Same as [`Selector::draw`] but returns the pool position.
    pub fn draw_index(
        pool: &Pool,
        previous: Option<&ItemId>,
        rng: &mut dyn RandomSource,
    ) -> Result<usize, EngineError> {
        let n = pool.len();
        match n {
            0 => Err(EngineError::EmptyPool),
            1 => Ok(0),
            _ => {
                let excluded = previous.and_then(|id| pool.position(id));
                let index = match excluded {
                    Some(skip) => {
                        let k = rng.next_index(n - 1);
                        if k >= skip {
                            k + 1
                        } else {
                            k
                        }
                    }
                    None => rng.next_index(n),
                };
                trace!(pool = n, ?excluded, index, "drew item");
                Ok(index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, GameRng, ScriptedRng};

    fn pool(n: u32) -> Pool {
        let cat = Category::new("c");
        Pool::from_items(cat.clone(), (0..n).map(|i| Item::new(i, "x", cat.clone()))).unwrap()
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = GameRng::new(1);
        assert_eq!(
            Selector::draw(&pool(0), None, &mut rng).unwrap_err(),
            EngineError::EmptyPool
        );
    }

    #[test]
    fn test_single_item_ignores_previous() {
        let mut rng = ScriptedRng::new(vec![5]);
        let p = pool(1);
        let only = ItemId::from(0u32);

        assert_eq!(Selector::draw(&p, Some(&only), &mut rng).unwrap().id, only);
        // No randomness consumed for a forced draw.
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn test_index_shift_skips_excluded() {
        let p = pool(4);
        let previous = ItemId::from(2u32);

        // k in 0..3 maps to 0, 1, 3.
        let drawn: Vec<_> = (0..3)
            .map(|k| {
                let mut rng = ScriptedRng::new(vec![k]);
                Selector::draw_index(&p, Some(&previous), &mut rng).unwrap()
            })
            .collect();
        assert_eq!(drawn, vec![0, 1, 3]);
    }

    #[test]
    fn test_unknown_previous_draws_from_whole_pool() {
        let p = pool(3);
        let mut rng = ScriptedRng::new(vec![2]);
        let stranger = ItemId::new("not-here");

        assert_eq!(Selector::draw_index(&p, Some(&stranger), &mut rng).unwrap(), 2);
    }

    #[test]
    fn test_no_previous_uses_full_range() {
        let p = pool(3);
        let mut rng = ScriptedRng::new(vec![0, 1, 2]);

        let drawn: Vec<_> = (0..3)
            .map(|_| Selector::draw_index(&p, None, &mut rng).unwrap())
            .collect();
        assert_eq!(drawn, vec![0, 1, 2]);
    }

    #[test]
    fn test_two_items_alternate() {
        let p = pool(2);
        let mut rng = GameRng::new(99);
        let mut previous = None;

        for _ in 0..100 {
            let item = Selector::draw(&p, previous.as_ref(), &mut rng).unwrap();
            assert_ne!(Some(&item.id), previous.as_ref());
            previous = Some(item.id.clone());
        }
    }
}
