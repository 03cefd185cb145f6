//! Error types for the order book core
//!
//! Only invariant violations are errors; they indicate a bug in the core
//! and callers should treat them as unrecoverable. Routine client-facing
//! outcomes (duplicate id on add, a FillAndKill order with no counterparty,
//! unknown id on cancel or modify) are silent no-ops, never errors.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    #[error("book error: {0}")]
    Book(#[from] BookError),
}

/// Order-level invariant violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("order {id} cannot be filled for {requested} with only {remaining} remaining")]
    Overfill {
        id: OrderId,
        requested: Quantity,
        remaining: Quantity,
    },
}

/// Book-structure invariant violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("no price level at {price}")]
    MissingLevel { price: Price },

    #[error("empty price level at {price}")]
    EmptyLevel { price: Price },

    #[error("level total at {price} does not match its orders")]
    TotalMismatch { price: Price },

    #[error("directory entry for order {id} does not match the book")]
    DirectoryDesync { id: OrderId },

    #[error("arena holds {arena} orders but directory holds {directory}")]
    ArenaDesync { arena: usize, directory: usize },

    #[error("book is crossed at rest: bid {bid} >= ask {ask}")]
    CrossedBook { bid: Price, ask: Price },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overfill_display() {
        let err = OrderError::Overfill {
            id: OrderId::new(3),
            requested: Quantity::new(10),
            remaining: Quantity::new(4),
        };
        assert_eq!(
            err.to_string(),
            "order 3 cannot be filled for 10 with only 4 remaining"
        );
    }

    #[test]
    fn test_engine_error_from_order_error() {
        let err = OrderError::Overfill {
            id: OrderId::new(1),
            requested: Quantity::new(2),
            remaining: Quantity::new(1),
        };
        let engine_err: EngineError = err.into();
        assert!(matches!(engine_err, EngineError::Order(_)));
    }

    #[test]
    fn test_engine_error_from_book_error() {
        let err = BookError::MissingLevel {
            price: Price::new(100),
        };
        let engine_err: EngineError = err.into();
        assert_eq!(engine_err.to_string(), "book error: no price level at 100");
    }
}
