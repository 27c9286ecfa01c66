//! Ordered collection of price levels for one side of the book
//!
//! Bids are ranked by descending price, asks by ascending price. Two
//! backings implement the same contract: [`TreeSide`](super::TreeSide)
//! (balanced ordered map) and [`VecSide`](super::VecSide) (sorted vector).
//! They must be observably identical; which one wins depends on level churn
//! versus scan density.

use std::cmp::Ordering;

use types::numeric::Price;
use types::order::Side;

use super::price_level::PriceLevel;

/// Default number of order slots reserved in a freshly created level
pub const DEFAULT_LEVEL_CAPACITY: usize = 8;

/// Levels of one side, best first
pub type Levels<'a> = Box<dyn Iterator<Item = &'a PriceLevel> + 'a>;

/// Price-level index for one side of the book
pub trait SideIndex {
    /// Create an empty side whose new levels reserve `level_capacity` slots
    fn with_level_capacity(side: Side, level_capacity: usize) -> Self
    where
        Self: Sized;

    /// Create an empty side with the default level capacity
    fn new(side: Side) -> Self
    where
        Self: Sized,
    {
        Self::with_level_capacity(side, DEFAULT_LEVEL_CAPACITY)
    }

    /// Which side of the book this is
    fn side(&self) -> Side;

    /// Level nearest the top of the book
    fn best_level(&self) -> Option<&PriceLevel>;

    fn best_level_mut(&mut self) -> Option<&mut PriceLevel>;

    /// Level at exactly `price`
    fn level(&self, price: Price) -> Option<&PriceLevel>;

    fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel>;

    /// Existing level at `price`, or a new empty one inserted in rank order
    fn find_or_insert(&mut self, price: Price) -> &mut PriceLevel;

    /// Erase the level at `price`
    ///
    /// Callers only remove levels they have just emptied.
    fn remove_level(&mut self, price: Price) -> Option<PriceLevel>;

    /// All levels, best to worst
    fn levels(&self) -> Levels<'_>;

    /// Number of price levels
    fn level_count(&self) -> usize;

    fn best_price(&self) -> Option<Price> {
        self.best_level().map(PriceLevel::price)
    }

    fn is_empty(&self) -> bool {
        self.level_count() == 0
    }
}

/// Rank two prices for `side`: `Greater` means `a` is the better price
pub fn priority(side: Side, a: Price, b: Price) -> Ordering {
    match side {
        Side::Bid => a.cmp(&b),
        Side::Ask => b.cmp(&a),
    }
}
