//! Limit order book core
//!
//! Single-instrument order book with price-time priority matching.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced: better price wins, earlier
//!   arrival wins at equal price
//! - An order rests in the directory iff it rests in exactly one level
//!   queue on its side
//! - No empty price levels, no crossed book at rest
//! - Quantity is conserved: both legs of every trade carry one quantity
//!
//! The core is synchronous and single-threaded; callers wanting concurrent
//! access serialize operations externally.

pub mod book;
pub mod directory;
pub mod engine;
pub mod matching;

pub use engine::{OrderBook, OrderBookSnapshot};
