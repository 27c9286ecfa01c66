//! Order book infrastructure module
//!
//! Contains price levels, the two side-index backings, and the order id
//! index.

pub mod price_level;
pub mod side_index;
pub mod tree_side;
pub mod vec_side;
pub mod order_index;

pub use price_level::{LevelMatch, PriceLevel, SlotHandle};
pub use side_index::{SideIndex, DEFAULT_LEVEL_CAPACITY};
pub use tree_side::TreeSide;
pub use vec_side::VecSide;
pub use order_index::{OrderIndex, OrderLocation};
