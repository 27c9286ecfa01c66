//! Ordered-map backed side index
//!
//! Uses BTreeMap for deterministic iteration. Keys ascend, so the best bid
//! is the last entry and the best ask the first. Whole levels are inserted
//! and erased in O(log n).

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::trace;
use types::numeric::Price;
use types::order::Side;

use super::price_level::PriceLevel;
use super::side_index::{Levels, SideIndex};

/// One side of the book keyed by price in a balanced tree
#[derive(Debug, Clone)]
pub struct TreeSide {
    side: Side,
    /// Price levels sorted ascending by price
    levels: BTreeMap<Price, PriceLevel>,
    level_capacity: usize,
}

impl SideIndex for TreeSide {
    fn with_level_capacity(side: Side, level_capacity: usize) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            level_capacity,
        }
    }

    fn side(&self) -> Side {
        self.side
    }

    fn best_level(&self) -> Option<&PriceLevel> {
        match self.side {
            Side::Bid => self.levels.values().next_back(),
            Side::Ask => self.levels.values().next(),
        }
    }

    fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        match self.side {
            Side::Bid => self.levels.values_mut().next_back(),
            Side::Ask => self.levels.values_mut().next(),
        }
    }

    fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    fn find_or_insert(&mut self, price: Price) -> &mut PriceLevel {
        match self.levels.entry(price) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(side = %self.side, %price, "Price level created");
                entry.insert(PriceLevel::with_capacity(price, self.level_capacity))
            }
        }
    }

    fn remove_level(&mut self, price: Price) -> Option<PriceLevel> {
        let removed = self.levels.remove(&price);
        debug_assert!(removed.as_ref().map_or(true, PriceLevel::is_empty));
        if removed.is_some() {
            trace!(side = %self.side, %price, "Price level removed");
        }
        removed
    }

    fn levels(&self) -> Levels<'_> {
        match self.side {
            Side::Bid => Box::new(self.levels.values().rev()),
            Side::Ask => Box::new(self.levels.values()),
        }
    }

    fn level_count(&self) -> usize {
        self.levels.len()
    }
}
