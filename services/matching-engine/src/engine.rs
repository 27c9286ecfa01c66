//! Matching engine core
//!
//! Main coordinator for the order book and matching logic. Every call is a
//! single atomic transition: duplicate and side checks run before anything
//! is touched, and the crossing loop always runs to completion before the
//! remainder rests.

use rust_decimal::Decimal;
use tracing::{debug, warn};
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity, Volume};
use types::order::{Order, Side};
use types::trade::Fill;

use crate::book::side_index::Levels;
use crate::book::{OrderIndex, OrderLocation, SideIndex, TreeSide, VecSide};
use crate::config::{EngineConfig, Validation};
use crate::matching::{can_match, sweep};
use crate::snapshot::BookSnapshot;

/// Single-instrument limit order book with price-time priority matching
///
/// Generic over the price-level backing of each side. Both backings produce
/// identical fills and books.
#[derive(Debug, Clone)]
pub struct MatchingEngine<S: SideIndex = TreeSide> {
    config: EngineConfig,
    bids: S,
    asks: S,
    /// Resting order id → location
    index: OrderIndex,
}

/// Engine with ordered-map sides
pub type TreeMatchingEngine = MatchingEngine<TreeSide>;

/// Engine with sorted-vector sides
pub type VecMatchingEngine = MatchingEngine<VecSide>;

impl<S: SideIndex> MatchingEngine<S> {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        debug!(
            validation = ?config.validation,
            order_capacity = config.order_capacity,
            level_capacity = config.level_capacity,
            "MatchingEngine initialized"
        );

        Self {
            bids: S::with_level_capacity(Side::Bid, config.level_capacity),
            asks: S::with_level_capacity(Side::Ask, config.level_capacity),
            index: OrderIndex::with_capacity(config.order_capacity),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Add a limit order, decoding its side from a `"B"`/`"A"` token
    ///
    /// Matches against the opposite side first and rests any remainder.
    /// Returns fills in execution order, two per matching step
    /// (incoming order first, then the resting order).
    pub fn add(
        &mut self,
        order_id: impl Into<OrderId>,
        side: &str,
        price: Price,
        size: impl Into<Quantity>,
    ) -> Result<Vec<Fill>, OrderError> {
        let order_id = order_id.into();
        self.ensure_unique(order_id)?;
        let side = side.parse::<Side>().map_err(|err| {
            debug!(%order_id, error = %err, "Order rejected");
            err
        })?;

        self.submit(Order::new(order_id, side, price, size.into()))
    }

    /// Add a limit order with an already decoded side
    pub fn add_order(
        &mut self,
        order_id: impl Into<OrderId>,
        side: Side,
        price: Price,
        size: impl Into<Quantity>,
    ) -> Result<Vec<Fill>, OrderError> {
        let order_id = order_id.into();
        self.ensure_unique(order_id)?;

        self.submit(Order::new(order_id, side, price, size.into()))
    }

    /// Cancel a resting order
    ///
    /// Returns true if an order was removed, false if the id is not resting.
    pub fn cancel(&mut self, order_id: impl Into<OrderId>) -> bool {
        let order_id = order_id.into();
        let Some(location) = self.index.remove(&order_id) else {
            debug!(%order_id, "Cancel for unknown order");
            return false;
        };

        let book = self.side_mut(location.side);
        let Some(level) = book.level_mut(location.price) else {
            warn!(%order_id, price = %location.price, "Indexed order has no price level");
            return false;
        };
        let Some(order) = level.cancel(location.slot) else {
            warn!(%order_id, price = %location.price, "Indexed order has no slot");
            return false;
        };
        debug_assert_eq!(order.order_id, order_id);
        if level.is_empty() {
            book.remove_level(location.price);
        }

        debug!(
            %order_id,
            side = %location.side,
            price = %location.price,
            size = %order.size,
            "Order canceled"
        );
        true
    }

    /// Bid levels, best (highest) first
    pub fn bids(&self) -> Levels<'_> {
        self.bids.levels()
    }

    /// Ask levels, best (lowest) first
    pub fn asks(&self) -> Levels<'_> {
        self.asks.levels()
    }

    /// Best bid price and the total size resting there
    pub fn best_bid(&self) -> Option<(Price, Volume)> {
        self.bids
            .best_level()
            .map(|level| (level.price(), level.total_quantity()))
    }

    /// Best ask price and the total size resting there
    pub fn best_ask(&self) -> Option<(Price, Volume)> {
        self.asks
            .best_level()
            .map(|level| (level.price(), level.total_quantity()))
    }

    /// Best ask minus best bid, when both sides are present
    pub fn spread(&self) -> Option<Decimal> {
        let bid = self.bids.best_price()?;
        let ask = self.asks.best_price()?;
        Some(ask.as_decimal() - bid.as_decimal())
    }

    /// True if the best bid meets or exceeds the best ask
    ///
    /// Never true between calls; exposed for diagnostics.
    pub fn is_crossed(&self) -> bool {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(bid), Some(ask)) => can_match(bid, ask),
            _ => false,
        }
    }

    /// Look up a resting order by id
    pub fn order(&self, order_id: impl Into<OrderId>) -> Option<&Order> {
        let location = self.index.get(&order_id.into())?;
        self.side(location.side)
            .level(location.price)?
            .get(location.slot)
    }

    /// Number of resting orders
    pub fn order_count(&self) -> usize {
        self.index.len()
    }

    /// Number of price levels on one side
    pub fn level_count(&self, side: Side) -> usize {
        self.side(side).level_count()
    }

    pub fn order_index(&self) -> &OrderIndex {
        &self.index
    }

    /// Top `depth` levels of each side
    pub fn snapshot(&self, depth: usize) -> BookSnapshot {
        BookSnapshot::capture(&self.bids, &self.asks, depth)
    }

    fn ensure_unique(&self, order_id: OrderId) -> Result<(), OrderError> {
        if self.index.contains(&order_id) {
            let err = OrderError::DuplicateOrderId { order_id };
            debug!(%order_id, error = %err, "Order rejected");
            return Err(err);
        }
        Ok(())
    }

    fn validate(&self, order: &Order) -> Result<(), OrderError> {
        if self.config.validation == Validation::Permissive {
            return Ok(());
        }

        let result = if order.size.is_zero() {
            Err(OrderError::InvalidQuantity(format!(
                "order {} has zero size",
                order.order_id
            )))
        } else if !order.price.is_positive() {
            Err(OrderError::InvalidPrice(format!(
                "order {} has non-positive price {}",
                order.order_id, order.price
            )))
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            debug!(order_id = %order.order_id, error = %err, "Order rejected");
        }
        result
    }

    /// Match, then rest whatever is left
    fn submit(&mut self, mut order: Order) -> Result<Vec<Fill>, OrderError> {
        self.validate(&order)?;

        let fills = match order.side {
            Side::Bid => sweep(&mut self.asks, &mut self.index, &mut order),
            Side::Ask => sweep(&mut self.bids, &mut self.index, &mut order),
        };

        debug!(
            order_id = %order.order_id,
            side = %order.side,
            price = %order.price,
            fills = fills.len(),
            remaining = %order.size,
            "Order processed"
        );

        if !order.is_filled() {
            self.rest(order);
        }

        Ok(fills)
    }

    fn rest(&mut self, order: Order) {
        let order_id = order.order_id;
        let side = order.side;
        let price = order.price;

        let slot = self.side_mut(side).find_or_insert(price).add(order);
        let previous = self.index.insert(order_id, OrderLocation { side, price, slot });
        debug_assert!(previous.is_none(), "order {order_id} indexed twice");
    }

    fn side(&self, side: Side) -> &S {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut S {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }
}

impl<S: SideIndex> Default for MatchingEngine<S> {
    fn default() -> Self {
        Self::new()
    }
}
