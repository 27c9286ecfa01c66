//! Types library for the limit order book
//!
//! Value types shared by the matching engine and anything that consumes its
//! output.
//!
//! # Modules
//! - `ids`: Order identifiers
//! - `numeric`: Decimal prices and whole-unit quantities
//! - `order`: Sides and limit orders
//! - `trade`: Fill records
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
    pub use crate::errors::*;
}
