//! Sweep an incoming order through the opposite side of the book
//!
//! Walks levels best first while the incoming order still has size and its
//! limit crosses the level price. Consumed resting orders leave the order
//! index in the same step, and emptied levels are dropped before moving on.

use tracing::trace;
use types::order::Order;
use types::trade::Fill;

use crate::book::{OrderIndex, SideIndex};

use super::crossing;

/// Match `incoming` against `opposite`, returning fills in execution order
///
/// On return either `incoming` is filled, `opposite` is empty, or the best
/// opposite price no longer crosses `incoming.price`.
pub fn sweep<S: SideIndex>(opposite: &mut S, index: &mut OrderIndex, incoming: &mut Order) -> Vec<Fill> {
    let mut fills = Vec::new();

    while !incoming.is_filled() {
        let Some(level) = opposite.best_level_mut() else {
            break;
        };
        let level_price = level.price();
        if !crossing::incoming_can_match(incoming.side, incoming.price, level_price) {
            break;
        }

        let step = level.match_order(incoming);
        let emptied = level.is_empty();

        for order_id in &step.consumed {
            index.remove(order_id);
        }
        trace!(
            order_id = %incoming.order_id,
            price = %level_price,
            fills = step.fills.len(),
            consumed = step.consumed.len(),
            remaining = %incoming.size,
            "Matched against level"
        );
        fills.extend(step.fills);

        if emptied {
            opposite.remove_level(level_price);
        }
    }

    fills
}
