//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! BTreeMap iteration is ascending, so best-bid accessors read from the
//! back of the map.

use std::collections::BTreeMap;

use super::arena::{OrderArena, OrderHandle};
use super::price_level::PriceLevel;
use types::errors::BookError;
use types::numeric::{Price, Quantity};

/// Bid (buy) side order book
///
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Default)]
pub struct BidBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Append the order at its price level, creating the level if absent
    pub fn insert(&mut self, arena: &mut OrderArena, handle: OrderHandle) {
        let price = arena.order(handle).price;
        self.levels
            .entry(price)
            .or_default()
            .push_back(arena, handle);
    }

    /// Unlink the order from its level, dropping the level if it empties
    pub fn remove(&mut self, arena: &mut OrderArena, handle: OrderHandle) -> Result<(), BookError> {
        let price = arena.order(handle).price;
        let level = self
            .levels
            .get_mut(&price)
            .ok_or(BookError::MissingLevel { price })?;
        level.unlink(arena, handle);
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Ok(())
    }

    /// Highest resting buy price
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Best level: the highest price and its queue
    pub fn best_level(&self) -> Option<(Price, &PriceLevel)> {
        self.levels
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level))
    }

    pub fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Drop a level the matcher has emptied
    pub(crate) fn remove_level(&mut self, price: Price) {
        self.levels.remove(&price);
    }

    /// Aggregated depth, highest price first
    pub fn depth_snapshot(&self) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .rev()
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Iterate levels in book order (highest price first)
    pub(crate) fn levels(&self) -> impl Iterator<Item = (&Price, &PriceLevel)> {
        self.levels.iter().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
