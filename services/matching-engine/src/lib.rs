//! Matching Engine
//!
//! Single-instrument limit order book matching incoming orders against
//! resting ones with price-time priority.
//!
//! **Key Invariants:**
//! - Best price first, then earliest arrival within a price
//! - Fills execute at the resting order's price
//! - The book is never left crossed after an add
//! - Every resting order has non-zero size and exactly one index entry
//! - Empty price levels never outlive the call that emptied them
//!
//! Each side of the book is a [`SideIndex`](book::SideIndex); two backings
//! are provided, an ordered map ([`TreeMatchingEngine`]) and a sorted vector
//! ([`VecMatchingEngine`]).
//!
//! The engine is a single-threaded state machine. Callers sharing one
//! instance across threads must serialize access to the whole engine.

pub mod book;
pub mod matching;
pub mod engine;
pub mod config;
pub mod snapshot;

pub use config::{EngineConfig, Validation};
pub use engine::{MatchingEngine, TreeMatchingEngine, VecMatchingEngine};
pub use snapshot::{BookSnapshot, LevelSnapshot};
