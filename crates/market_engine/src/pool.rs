//! Draw-without-replacement pools.
//!
//! This module provides [`DrawPool`], an index-based pool from which values
//! are drawn uniformly at random and removed. Removal is a swap-remove, so
//! every draw is O(1) and the pool never aliases the caller's data.
//!
//! # Example
//!
//! ```rust
//! use market_core::rng::MarketRng;
//! use market_engine::pool::DrawPool;
//!
//! let mut rng = MarketRng::from_seed(9);
//! let mut pool = DrawPool::new(vec![1, 2, 3]);
//!
//! let mut drawn = Vec::new();
//! while let Some(value) = pool.draw(&mut rng) {
//!     drawn.push(value);
//! }
//!
//! drawn.sort();
//! assert_eq!(drawn, vec![1, 2, 3]);
//! assert!(pool.is_empty());
//! ```

use market_core::rng::RandomSource;

/// Pool of values consumed by random draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawPool<T> {
    items: Vec<T>,
}

impl<T> DrawPool<T> {
    /// Creates a pool holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of values remaining.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true once every value has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes and returns a uniformly chosen remaining value.
    ///
    /// Returns `None` without drawing when the pool is empty.
    pub fn draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.next_index(self.items.len());
        Some(self.items.swap_remove(index))
    }
}

impl<T> From<Vec<T>> for DrawPool<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}
