//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at a specific price point.
//! Orders are kept in arrival order to enforce time priority.
//!
//! Orders live in a slot arena threaded with a doubly linked list, so a
//! [`SlotHandle`] stays valid for as long as its order rests here and
//! cancelling from the middle of the queue is O(1).

use slab::Slab;
use types::ids::OrderId;
use types::numeric::{Price, Volume};
use types::order::Order;
use types::trade::Fill;

/// Position of a resting order inside its level
///
/// Only meaningful together with the level it was issued by. A handle is
/// released when its order leaves the level and may then be reissued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotHandle(usize);

#[derive(Debug, Clone)]
struct Slot {
    order: Order,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Result of matching an incoming order against one level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMatch {
    /// Fills in execution order, two per matching step
    pub fills: Vec<Fill>,
    /// Resting orders that were fully consumed and left the level
    pub consumed: Vec<OrderId>,
}

/// A price level containing resting orders at a single price
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    slots: Slab<Slot>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Total resting quantity at this level
    total_quantity: Volume,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: Price) -> Self {
        Self::with_capacity(price, 0)
    }

    /// Create a new empty price level with room for `capacity` orders
    pub fn with_capacity(price: Price, capacity: usize) -> Self {
        Self {
            price,
            slots: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            total_quantity: Volume::zero(),
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Append an order at the back of the queue (time priority)
    pub fn add(&mut self, order: Order) -> SlotHandle {
        debug_assert_eq!(order.price, self.price, "order rests at a foreign price");

        self.total_quantity += order.size;
        let key = self.slots.insert(Slot {
            order,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);

        SlotHandle(key)
    }

    /// Match an incoming order against this level, oldest order first
    ///
    /// Every fill is priced at this level's price. Stops when the incoming
    /// order is exhausted or the level runs out of orders.
    pub fn match_order(&mut self, incoming: &mut Order) -> LevelMatch {
        let mut result = LevelMatch::default();

        while !incoming.is_filled() {
            let Some(head) = self.head else {
                break;
            };

            let resting = &mut self.slots[head].order;
            let fill_size = resting.size.min(incoming.size);
            resting.apply_fill(fill_size);
            let resting_id = resting.order_id;
            let exhausted = resting.is_filled();

            incoming.apply_fill(fill_size);
            self.total_quantity = self.total_quantity.saturating_sub(fill_size);
            result.fills.extend(Fill::pair(
                incoming.order_id,
                resting_id,
                incoming.side,
                self.price,
                fill_size,
            ));

            if !exhausted {
                // Resting order outlived the incoming one
                break;
            }
            self.unlink(head);
            result.consumed.push(resting_id);
        }

        result
    }

    /// Remove a resting order by handle without disturbing the others
    ///
    /// Returns the removed order, or None if the handle is vacant
    pub fn cancel(&mut self, handle: SlotHandle) -> Option<Order> {
        if !self.slots.contains(handle.0) {
            return None;
        }
        Some(self.unlink(handle.0))
    }

    /// Look up a resting order by handle
    pub fn get(&self, handle: SlotHandle) -> Option<&Order> {
        self.slots.get(handle.0).map(|slot| &slot.order)
    }

    /// Oldest resting order
    pub fn front(&self) -> Option<&Order> {
        self.head.map(|key| &self.slots[key].order)
    }

    /// Resting orders, oldest first
    pub fn orders(&self) -> LevelOrders<'_> {
        LevelOrders {
            slots: &self.slots,
            cursor: self.head,
        }
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Get the total quantity at this price level
    pub fn total_quantity(&self) -> Volume {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.slots.len()
    }

    fn unlink(&mut self, key: usize) -> Order {
        let slot = self.slots.remove(key);
        match slot.prev {
            Some(prev) => self.slots[prev].next = slot.next,
            None => self.head = slot.next,
        }
        match slot.next {
            Some(next) => self.slots[next].prev = slot.prev,
            None => self.tail = slot.prev,
        }
        self.total_quantity = self.total_quantity.saturating_sub(slot.order.size);
        slot.order
    }
}

/// FIFO iterator over a level's resting orders
pub struct LevelOrders<'a> {
    slots: &'a Slab<Slot>,
    cursor: Option<usize>,
}

impl<'a> Iterator for LevelOrders<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        let slot = &slots[self.cursor?];
        self.cursor = slot.next;
        Some(&slot.order)
    }
}
