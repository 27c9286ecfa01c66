//! Point-in-time views of the book for market data and display

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Volume};

use crate::book::{PriceLevel, SideIndex};

/// Aggregate state of one price level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub price: Price,
    pub total_quantity: Volume,
    pub order_count: usize,
}

impl From<&PriceLevel> for LevelSnapshot {
    fn from(level: &PriceLevel) -> Self {
        Self {
            price: level.price(),
            total_quantity: level.total_quantity(),
            order_count: level.order_count(),
        }
    }
}

/// Order book snapshot, best levels first on both sides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<LevelSnapshot>,
    pub asks: Vec<LevelSnapshot>,
}

impl BookSnapshot {
    /// Capture the top `depth` levels of each side
    pub fn capture<S: SideIndex>(bids: &S, asks: &S, depth: usize) -> Self {
        Self {
            bids: bids.levels().take(depth).map(LevelSnapshot::from).collect(),
            asks: asks.levels().take(depth).map(LevelSnapshot::from).collect(),
        }
    }
}
