//! Order types
//!
//! Plain limit orders only. An order's `size` is its remaining unfilled
//! quantity and is decremented in place as fills are applied.

use crate::errors::OrderError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order
    Bid,
    /// Sell order
    Ask,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }

    /// Single-letter token used on the add interface
    pub fn token(&self) -> &'static str {
        match self {
            Side::Bid => "B",
            Side::Ask => "A",
        }
    }
}

impl FromStr for Side {
    type Err = OrderError;

    /// Decode a side token: `"B"` for bids, `"A"` for asks
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "B" => Ok(Side::Bid),
            "A" => Ok(Side::Ask),
            other => Err(OrderError::UnknownSide {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("BID"),
            Side::Ask => f.write_str("ASK"),
        }
    }
}

/// A limit order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Remaining unfilled quantity
    pub size: Quantity,
}

impl Order {
    pub fn new(order_id: OrderId, side: Side, price: Price, size: Quantity) -> Self {
        Self {
            order_id,
            side,
            price,
            size,
        }
    }

    /// Check if nothing remains to be filled
    pub fn is_filled(&self) -> bool {
        self.size.is_zero()
    }

    /// Apply a fill, reducing the remaining size
    ///
    /// Callers only ever fill up to the remaining size; the subtraction
    /// saturates so size can never wrap.
    pub fn apply_fill(&mut self, fill: Quantity) {
        debug_assert!(fill <= self.size, "fill exceeds remaining size");
        self.size = self.size.saturating_sub(fill);
    }
}
