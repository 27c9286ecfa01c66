//! Matching logic module
//!
//! Implements the price-time priority crossing loop

pub mod crossing;
pub mod sweep;

pub use crossing::can_match;
pub use sweep::sweep;
