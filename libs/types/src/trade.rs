//! Trade types
//!
//! A trade pairs one bid leg with one ask leg. Each leg records its own
//! order's limit price; consumers wanting a single execution price read the
//! resting leg. Both legs always carry the same quantity.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// One leg of an executed trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInfo {
    pub order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl TradeInfo {
    pub fn new(order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            price,
            quantity,
        }
    }
}

/// A matched execution between one buy and one sell order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub bid: TradeInfo,
    pub ask: TradeInfo,
}

impl Trade {
    /// Pair the two legs of an execution
    ///
    /// # Panics
    /// Panics if the legs disagree on quantity.
    pub fn new(bid: TradeInfo, ask: TradeInfo) -> Self {
        assert!(
            bid.quantity == ask.quantity,
            "Trade legs must carry the same quantity"
        );
        Self { bid, ask }
    }

    /// Executed quantity, identical on both legs
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }
}

/// Trades emitted by a single operation, in execution order
pub type Trades = Vec<Trade>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_legs_keep_their_own_prices() {
        let trade = Trade::new(
            TradeInfo::new(OrderId::new(2), Price::new(101), Quantity::new(5)),
            TradeInfo::new(OrderId::new(1), Price::new(100), Quantity::new(5)),
        );

        assert_eq!(trade.bid.price, Price::new(101));
        assert_eq!(trade.ask.price, Price::new(100));
        assert_eq!(trade.quantity(), Quantity::new(5));
    }

    #[test]
    #[should_panic(expected = "Trade legs must carry the same quantity")]
    fn test_mismatched_leg_quantities_panic() {
        let _ = Trade::new(
            TradeInfo::new(OrderId::new(2), Price::new(100), Quantity::new(5)),
            TradeInfo::new(OrderId::new(1), Price::new(100), Quantity::new(4)),
        );
    }

    #[test]
    fn test_trade_serialization() {
        let trade = Trade::new(
            TradeInfo::new(OrderId::new(2), Price::new(-1), Quantity::new(3)),
            TradeInfo::new(OrderId::new(1), Price::new(-2), Quantity::new(3)),
        );

        let json = serde_json::to_string(&trade).unwrap();
        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trade);
    }
}
