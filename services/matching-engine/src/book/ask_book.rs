//! Ask (sell-side) order book
//!
//! Maintains sell orders sorted by price ascending (best ask first), the
//! mirror image of the bid book.

use std::collections::BTreeMap;

use super::arena::{OrderArena, OrderHandle};
use super::price_level::PriceLevel;
use types::errors::BookError;
use types::numeric::{Price, Quantity};

/// Ask (sell) side order book
///
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Default)]
pub struct AskBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
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

    /// Lowest resting sell price
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Best level: the lowest price and its queue
    pub fn best_level(&self) -> Option<(Price, &PriceLevel)> {
        self.levels
            .iter()
            .next()
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

    /// Aggregated depth, lowest price first
    pub fn depth_snapshot(&self) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Iterate levels in book order (lowest price first)
    pub(crate) fn levels(&self) -> impl Iterator<Item = (&Price, &PriceLevel)> {
        self.levels.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::order::{Order, OrderType, Side};

    fn insert_order(
        book: &mut AskBook,
        arena: &mut OrderArena,
        id: u64,
        price: i32,
        qty: u64,
    ) -> OrderHandle {
        let order = Order::new(
            OrderType::GoodTilCancel,
            OrderId::new(id),
            Side::Sell,
            Price::new(price),
            Quantity::new(qty),
        );
        let handle = arena.insert(order);
        book.insert(arena, handle);
        handle
    }

    #[test]
    fn test_best_ask_is_lowest_price() {
        let mut arena = OrderArena::new();
        let mut book = AskBook::new();

        insert_order(&mut book, &mut arena, 1, 101, 10);
        insert_order(&mut book, &mut arena, 2, 99, 5);
        insert_order(&mut book, &mut arena, 3, 103, 7);

        assert_eq!(book.best_price(), Some(Price::new(99)));
        let (price, level) = book.best_level().unwrap();
        assert_eq!(price, Price::new(99));
        assert_eq!(level.total_quantity(), Quantity::new(5));
    }

    #[test]
    fn test_remove_drops_empty_level() {
        let mut arena = OrderArena::new();
        let mut book = AskBook::new();

        let handle = insert_order(&mut book, &mut arena, 1, 101, 10);

        book.remove(&mut arena, handle).unwrap();
        assert!(book.is_empty());
        assert_eq!(book.best_price(), None);
    }

    #[test]
    fn test_depth_snapshot_sorted_low_to_high() {
        let mut arena = OrderArena::new();
        let mut book = AskBook::new();

        insert_order(&mut book, &mut arena, 1, 101, 10);
        insert_order(&mut book, &mut arena, 2, 99, 5);
        insert_order(&mut book, &mut arena, 3, 99, 4);

        let depth = book.depth_snapshot();
        assert_eq!(
            depth,
            vec![
                (Price::new(99), Quantity::new(9)),
                (Price::new(101), Quantity::new(10)),
            ]
        );
    }
}
