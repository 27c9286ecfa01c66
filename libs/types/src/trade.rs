//! Fill records produced by matching

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use serde::{Deserialize, Serialize};

/// One side of an executed match
///
/// Every matching step yields two fills of equal size and price: one for the
/// incoming order and one for the resting order it consumed. Both carry the
/// incoming order's side and the resting level's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub size: Quantity,
}

impl Fill {
    pub fn new(order_id: OrderId, side: Side, price: Price, size: Quantity) -> Self {
        Self {
            order_id,
            side,
            price,
            size,
        }
    }

    /// Build the (incoming, resting) pair for one matching step
    pub fn pair(
        incoming: OrderId,
        resting: OrderId,
        side: Side,
        price: Price,
        size: Quantity,
    ) -> [Fill; 2] {
        [
            Fill::new(incoming, side, price, size),
            Fill::new(resting, side, price, size),
        ]
    }
}
