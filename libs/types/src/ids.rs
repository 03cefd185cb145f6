//! Unique identifier types for book entities
//!
//! Order ids are opaque tokens supplied by the caller. The book never
//! generates ids; uniqueness among resting orders is enforced at admission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
///
/// Caller-supplied `u64` token. No two resting orders share an id; an add
/// carrying an id that is already resting is rejected at admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wrap a raw id token
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw token
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_value_round_trip() {
        let id = OrderId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(OrderId::from(42), id);
    }

    #[test]
    fn test_order_id_display() {
        assert_eq!(OrderId::new(7).to_string(), "7");
    }

    #[test]
    fn test_order_id_serde_transparent() {
        let id = OrderId::new(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");

        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
