//! Integer tick types for prices and quantities
//!
//! Prices are signed 32-bit ticks; the sign is load-bearing because spread
//! instruments trade at negative prices. Quantities are unsigned 64-bit
//! lots. Arithmetic is exact, with invariant-violating operations asserted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Price in signed integer ticks
///
/// Negative values are valid (calendar spreads and similar products).
/// Ordering follows the numeric tick value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i32);

impl Price {
    /// Create a price from a raw tick count
    pub fn new(ticks: i32) -> Self {
        Self(ticks)
    }

    /// Get the raw tick count
    pub fn ticks(&self) -> i32 {
        self.0
    }
}

impl From<i32> for Price {
    fn from(ticks: i32) -> Self {
        Self(ticks)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity in unsigned lots
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Create a quantity from a raw lot count
    pub fn new(lots: u64) -> Self {
        Self(lots)
    }

    /// Zero quantity (fully filled orders, empty levels)
    pub fn zero() -> Self {
        Self(0)
    }

    /// Check whether the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Get the raw lot count
    pub fn lots(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Quantity {
    fn from(lots: u64) -> Self {
        Self(lots)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.0 >= rhs.0, "Quantity subtraction would underflow");
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        assert!(self.0 >= rhs.0, "Quantity subtraction would underflow");
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_ordering() {
        assert!(Price::new(100) < Price::new(101));
        assert!(Price::new(-5) < Price::new(0));
    }

    #[test]
    fn test_price_negative_ticks_allowed() {
        let spread = Price::new(-3);
        assert_eq!(spread.ticks(), -3);
        assert_eq!(spread.to_string(), "-3");
    }

    #[test]
    fn test_quantity_arithmetic() {
        let mut qty = Quantity::new(10);
        qty += Quantity::new(5);
        assert_eq!(qty, Quantity::new(15));

        qty -= Quantity::new(15);
        assert!(qty.is_zero());
        assert_eq!(qty, Quantity::zero());
    }

    #[test]
    #[should_panic(expected = "Quantity subtraction would underflow")]
    fn test_quantity_underflow_panics() {
        let _ = Quantity::new(1) - Quantity::new(2);
    }

    #[test]
    fn test_quantity_min_picks_smaller() {
        let a = Quantity::new(3);
        let b = Quantity::new(7);
        assert_eq!(a.min(b), a);
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::new(-42);
        assert_eq!(serde_json::to_string(&price).unwrap(), "-42");

        let qty: Quantity = serde_json::from_str("9").unwrap();
        assert_eq!(qty, Quantity::new(9));
    }
}
