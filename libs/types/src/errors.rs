//! Error types for order entry
//!
//! Error taxonomy using thiserror. Every variant is detected before the book
//! is mutated.

use thiserror::Error;

use crate::ids::OrderId;

/// Order entry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Duplicate order id: {order_id}")]
    DuplicateOrderId { order_id: OrderId },

    #[error("Unknown side: {token}")]
    UnknownSide { token: String },

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
