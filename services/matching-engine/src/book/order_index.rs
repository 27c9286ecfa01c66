//! Global order id index
//!
//! Maps every resting order id to where it rests. Entries are non-owning:
//! the order itself lives in its price level.

use std::collections::HashMap;

use types::ids::OrderId;
use types::numeric::Price;
use types::order::Side;

use super::price_level::SlotHandle;

/// Where a resting order lives: side, level key and slot within the level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLocation {
    pub side: Side,
    pub price: Price,
    pub slot: SlotHandle,
}

/// Order id → location of every resting order
#[derive(Debug, Clone, Default)]
pub struct OrderIndex {
    entries: HashMap<OrderId, OrderLocation>,
}

impl OrderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Record where an order rests, returning any previous entry
    pub fn insert(&mut self, order_id: OrderId, location: OrderLocation) -> Option<OrderLocation> {
        self.entries.insert(order_id, location)
    }

    pub fn remove(&mut self, order_id: &OrderId) -> Option<OrderLocation> {
        self.entries.remove(order_id)
    }

    pub fn get(&self, order_id: &OrderId) -> Option<&OrderLocation> {
        self.entries.get(order_id)
    }

    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.entries.contains_key(order_id)
    }

    /// Ids of all resting orders, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
