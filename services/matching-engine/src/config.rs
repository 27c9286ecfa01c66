//! Matching engine configuration

use crate::book::DEFAULT_LEVEL_CAPACITY;

/// How strictly incoming orders are checked before matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Accept any size and price; a zero-size order is a no-op
    #[default]
    Permissive,
    /// Reject zero sizes and non-positive prices
    Strict,
}

/// Matching engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Order validation policy
    pub validation: Validation,
    /// Resting orders the order index is sized for up front
    pub order_capacity: usize,
    /// Order slots reserved by each new price level
    pub level_capacity: usize,
}

impl EngineConfig {
    /// Default sizing with strict validation
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validation: Validation::Permissive,
            order_capacity: 1024,
            level_capacity: DEFAULT_LEVEL_CAPACITY,
        }
    }
}
