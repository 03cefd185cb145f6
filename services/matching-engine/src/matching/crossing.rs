//! Crossing detection logic
//!
//! Determines when a bid and ask can match based on price compatibility.

use types::numeric::Price;
use types::order::Side;

/// Check if a bid and ask can match at given prices
///
/// A buy matches a sell when the bid price is at or above the ask price.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming order crosses a resting price on the opposite side
pub fn incoming_can_match(incoming_side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match incoming_side {
        Side::Buy => incoming_price >= resting_price,
        Side::Sell => incoming_price <= resting_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_match_crossing() {
        assert!(can_match(Price::new(101), Price::new(100)));
    }

    #[test]
    fn test_can_match_exact() {
        assert!(can_match(Price::new(100), Price::new(100)));
    }

    #[test]
    fn test_can_match_no_cross() {
        assert!(!can_match(Price::new(99), Price::new(100)));
    }

    #[test]
    fn test_incoming_buy_crosses_at_or_above_ask() {
        assert!(incoming_can_match(Side::Buy, Price::new(100), Price::new(100)));
        assert!(incoming_can_match(Side::Buy, Price::new(101), Price::new(100)));
        assert!(!incoming_can_match(Side::Buy, Price::new(99), Price::new(100)));
    }

    #[test]
    fn test_incoming_sell_crosses_at_or_below_bid() {
        assert!(incoming_can_match(Side::Sell, Price::new(100), Price::new(100)));
        assert!(incoming_can_match(Side::Sell, Price::new(99), Price::new(100)));
        assert!(!incoming_can_match(Side::Sell, Price::new(101), Price::new(100)));
    }

    #[test]
    fn test_negative_prices_cross() {
        assert!(can_match(Price::new(-1), Price::new(-2)));
        assert!(!can_match(Price::new(-3), Price::new(-2)));
    }
}
