//! Matching logic module
//!
//! Price-compatibility predicates for the price-time priority matcher.

pub mod crossing;

pub use crossing::can_match;
