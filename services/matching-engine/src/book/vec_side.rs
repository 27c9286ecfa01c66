//! Sorted-vector backed side index
//!
//! Levels are stored worst to best so the best level sits at the tail:
//! consuming the top of book is a `pop`, and new levels near the top shift
//! few elements. Lookups binary-search on rank.

use tracing::trace;
use types::numeric::Price;
use types::order::Side;

use super::price_level::PriceLevel;
use super::side_index::{priority, Levels, SideIndex};

/// One side of the book as a contiguous, rank-sorted vector
#[derive(Debug, Clone)]
pub struct VecSide {
    side: Side,
    /// Levels ordered worst first, best last
    levels: Vec<PriceLevel>,
    level_capacity: usize,
}

impl VecSide {
    fn search(&self, price: Price) -> Result<usize, usize> {
        let side = self.side;
        self.levels
            .binary_search_by(|level| priority(side, level.price(), price))
    }
}

impl SideIndex for VecSide {
    fn with_level_capacity(side: Side, level_capacity: usize) -> Self {
        Self {
            side,
            levels: Vec::new(),
            level_capacity,
        }
    }

    fn side(&self) -> Side {
        self.side
    }

    fn best_level(&self) -> Option<&PriceLevel> {
        self.levels.last()
    }

    fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        self.levels.last_mut()
    }

    fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.search(price).ok().map(|idx| &self.levels[idx])
    }

    fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        let idx = self.search(price).ok()?;
        Some(&mut self.levels[idx])
    }

    fn find_or_insert(&mut self, price: Price) -> &mut PriceLevel {
        let idx = match self.search(price) {
            Ok(idx) => idx,
            Err(idx) => {
                trace!(side = %self.side, %price, "Price level created");
                self.levels
                    .insert(idx, PriceLevel::with_capacity(price, self.level_capacity));
                idx
            }
        };
        &mut self.levels[idx]
    }

    fn remove_level(&mut self, price: Price) -> Option<PriceLevel> {
        let removed = match self.levels.last() {
            // Top of book: the common case after a sweep
            Some(best) if best.price() == price => self.levels.pop(),
            _ => {
                let idx = self.search(price).ok()?;
                Some(self.levels.remove(idx))
            }
        };
        debug_assert!(removed.as_ref().map_or(true, PriceLevel::is_empty));
        if removed.is_some() {
            trace!(side = %self.side, %price, "Price level removed");
        }
        removed
    }

    fn levels(&self) -> Levels<'_> {
        Box::new(self.levels.iter().rev())
    }

    fn level_count(&self) -> usize {
        self.levels.len()
    }
}
