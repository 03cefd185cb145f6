//! Order book core
//!
//! Main coordinator for the book indices, the order directory, and the
//! price-time priority matching loop.

use tracing::debug;

use types::errors::{BookError, EngineError};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderModify, OrderType, Side};
use types::trade::{Trade, TradeInfo, Trades};

use crate::book::{AskBook, BidBook, OrderArena, PriceLevel};
use crate::directory::OrderDirectory;
use crate::matching::crossing;

/// Single-instrument limit order book
///
/// Accepts GoodTilCancel and FillAndKill orders, matches crossing orders
/// under price-time priority, and keeps the directory and both book sides
/// consistent across every operation.
///
/// Not safe for concurrent mutation; callers wanting shared access funnel
/// all operations for one instrument through a single writer.
#[derive(Debug)]
pub struct OrderBook {
    arena: OrderArena,
    bids: BidBook,
    asks: AskBook,
    directory: OrderDirectory,
}

/// Aggregated book depth: one `(price, total quantity)` pair per level,
/// best price first on both sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBookSnapshot {
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            arena: OrderArena::new(),
            bids: BidBook::new(),
            asks: AskBook::new(),
            directory: OrderDirectory::new(),
        }
    }

    /// Submit an order
    ///
    /// The order is admitted, matched against the opposite side, and any
    /// resulting trades are returned in execution order. A duplicate id or
    /// a FillAndKill order with no immediate counterparty is dropped
    /// silently and returns no trades.
    ///
    /// An error indicates a broken book invariant, never a routine
    /// client-facing outcome.
    pub fn add_order(&mut self, order: Order) -> Result<Trades, EngineError> {
        if self.directory.contains(&order.id) {
            debug!(order_id = %order.id, "duplicate order id, rejected");
            return Ok(Trades::new());
        }
        if order.order_type == OrderType::FillAndKill
            && !self.can_match(order.side, order.price)
        {
            debug!(order_id = %order.id, "fill-and-kill without counterparty, dropped");
            return Ok(Trades::new());
        }

        let id = order.id;
        let side = order.side;
        let handle = self.arena.insert(order);
        match side {
            Side::Buy => self.bids.insert(&mut self.arena, handle),
            Side::Sell => self.asks.insert(&mut self.arena, handle),
        }
        self.directory.insert(id, handle);

        let trades = self.match_orders()?;
        if !trades.is_empty() {
            debug!(order_id = %id, trades = trades.len(), "order matched");
        }
        Ok(trades)
    }

    /// Cancel a resting order
    ///
    /// Unknown ids are a silent no-op; cancel is idempotent.
    pub fn cancel_order(&mut self, id: OrderId) -> Result<(), EngineError> {
        let Some(handle) = self.directory.remove(&id) else {
            return Ok(());
        };
        match self.arena.order(handle).side {
            Side::Buy => self.bids.remove(&mut self.arena, handle)?,
            Side::Sell => self.asks.remove(&mut self.arena, handle)?,
        }
        self.arena.remove(handle);
        debug!(order_id = %id, "order canceled");
        Ok(())
    }

    /// Replace a resting order's side, price, or quantity
    ///
    /// Cancel-and-replace: the replacement keeps the original's order type
    /// and joins the tail of its level, losing time priority. An unknown id
    /// returns no trades.
    pub fn modify_order(&mut self, modify: OrderModify) -> Result<Trades, EngineError> {
        let Some(handle) = self.directory.get(&modify.id) else {
            return Ok(Trades::new());
        };
        let order_type = self.arena.order(handle).order_type;
        self.cancel_order(modify.id)?;
        self.add_order(modify.to_order(order_type))
    }

    /// Number of resting orders
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Highest resting buy level as `(price, total quantity)`
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids
            .best_level()
            .map(|(price, level)| (price, level.total_quantity()))
    }

    /// Lowest resting sell level as `(price, total quantity)`
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks
            .best_level()
            .map(|(price, level)| (price, level.total_quantity()))
    }

    /// Read-only view of one resting order
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.directory.get(&id).map(|handle| self.arena.order(handle))
    }

    /// Aggregated depth snapshot of both sides, best price first
    pub fn snapshot(&self) -> OrderBookSnapshot {
        OrderBookSnapshot {
            bids: self.bids.depth_snapshot(),
            asks: self.asks.depth_snapshot(),
        }
    }

    fn can_match(&self, side: Side, price: Price) -> bool {
        let resting = match side {
            Side::Buy => self.asks.best_price(),
            Side::Sell => self.bids.best_price(),
        };
        match resting {
            Some(best) => crossing::incoming_can_match(side, price, best),
            None => false,
        }
    }

    /// Match crossing orders until the book uncrosses, then drop any
    /// FillAndKill residue
    fn match_orders(&mut self) -> Result<Trades, EngineError> {
        let mut trades = Trades::new();
        while let (Some(bid_price), Some(ask_price)) =
            (self.bids.best_price(), self.asks.best_price())
        {
            if !crossing::can_match(bid_price, ask_price) {
                break;
            }
            self.match_best_levels(bid_price, ask_price, &mut trades)?;
        }
        self.drop_unfilled_fill_and_kill()?;
        Ok(trades)
    }

    /// Fill between the two best levels until one of them empties
    ///
    /// Fills pair the heads of both queues, so earlier arrivals at each
    /// price trade first. Each trade leg records its own order's limit
    /// price.
    fn match_best_levels(
        &mut self,
        bid_price: Price,
        ask_price: Price,
        trades: &mut Trades,
    ) -> Result<(), EngineError> {
        let Self {
            arena,
            bids,
            asks,
            directory,
        } = self;

        loop {
            let bid_level = bids
                .level_mut(bid_price)
                .ok_or(BookError::MissingLevel { price: bid_price })?;
            let ask_level = asks
                .level_mut(ask_price)
                .ok_or(BookError::MissingLevel { price: ask_price })?;
            let bid_handle = bid_level
                .front()
                .ok_or(BookError::EmptyLevel { price: bid_price })?;
            let ask_handle = ask_level
                .front()
                .ok_or(BookError::EmptyLevel { price: ask_price })?;

            let quantity = arena
                .order(bid_handle)
                .remaining_quantity
                .min(arena.order(ask_handle).remaining_quantity);

            arena.order_mut(bid_handle).fill(quantity)?;
            arena.order_mut(ask_handle).fill(quantity)?;
            bid_level.reduce_total(quantity);
            ask_level.reduce_total(quantity);

            let bid = arena.order(bid_handle);
            let ask = arena.order(ask_handle);
            trades.push(Trade::new(
                TradeInfo::new(bid.id, bid.price, quantity),
                TradeInfo::new(ask.id, ask.price, quantity),
            ));

            let bid_filled = arena.order(bid_handle).is_filled();
            let ask_filled = arena.order(ask_handle).is_filled();
            if bid_filled {
                bid_level.unlink(arena, bid_handle);
                let filled = arena.remove(bid_handle);
                if directory.remove(&filled.id).is_none() {
                    return Err(BookError::DirectoryDesync { id: filled.id }.into());
                }
            }
            if ask_filled {
                ask_level.unlink(arena, ask_handle);
                let filled = arena.remove(ask_handle);
                if directory.remove(&filled.id).is_none() {
                    return Err(BookError::DirectoryDesync { id: filled.id }.into());
                }
            }

            let bid_emptied = bid_level.is_empty();
            let ask_emptied = ask_level.is_empty();
            if bid_emptied {
                bids.remove_level(bid_price);
            }
            if ask_emptied {
                asks.remove_level(ask_price);
            }
            if bid_emptied || ask_emptied {
                return Ok(());
            }
        }
    }

    /// Cancel a FillAndKill residue left at the top of the book
    ///
    /// Only the order admitted by the current call can still be resting as
    /// FillAndKill, and matching drained its level down to it, so the heads
    /// of the two best levels cover every candidate.
    fn drop_unfilled_fill_and_kill(&mut self) -> Result<(), EngineError> {
        let candidates = [
            self.bids.best_level().and_then(|(_, level)| level.front()),
            self.asks.best_level().and_then(|(_, level)| level.front()),
        ];
        for handle in candidates.into_iter().flatten() {
            let order = self.arena.order(handle);
            if order.order_type == OrderType::FillAndKill {
                let id = order.id;
                self.cancel_order(id)?;
            }
        }
        Ok(())
    }

    /// Audit every cross-structure invariant
    ///
    /// A correct book never fails this; tests run it after each operation.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        if self.arena.len() != self.directory.len() {
            return Err(BookError::ArenaDesync {
                arena: self.arena.len(),
                directory: self.directory.len(),
            }
            .into());
        }

        for (id, handle) in self.directory.iter() {
            if !self.arena.contains(*handle) {
                return Err(BookError::DirectoryDesync { id: *id }.into());
            }
            let order = self.arena.order(*handle);
            if order.id != *id || order.remaining_quantity.is_zero() {
                return Err(BookError::DirectoryDesync { id: *id }.into());
            }
            let level = match order.side {
                Side::Buy => self.bids.level(order.price),
                Side::Sell => self.asks.level(order.price),
            }
            .ok_or(BookError::MissingLevel { price: order.price })?;
            if !level.iter(&self.arena).any(|member| member == *handle) {
                return Err(BookError::DirectoryDesync { id: *id }.into());
            }
        }

        for (price, level) in self.bids.levels() {
            self.check_level(Side::Buy, *price, level)?;
        }
        for (price, level) in self.asks.levels() {
            self.check_level(Side::Sell, *price, level)?;
        }

        if let (Some(bid), Some(ask)) = (self.bids.best_price(), self.asks.best_price()) {
            if bid >= ask {
                return Err(BookError::CrossedBook { bid, ask }.into());
            }
        }

        Ok(())
    }

    fn check_level(&self, side: Side, price: Price, level: &PriceLevel) -> Result<(), EngineError> {
        if level.is_empty() {
            return Err(BookError::EmptyLevel { price }.into());
        }
        let mut total = Quantity::zero();
        for handle in level.iter(&self.arena) {
            let order = self.arena.order(handle);
            if order.side != side || order.price != price || !self.directory.contains(&order.id) {
                return Err(BookError::DirectoryDesync { id: order.id }.into());
            }
            total += order.remaining_quantity;
        }
        if total != level.total_quantity() {
            return Err(BookError::TotalMismatch { price }.into());
        }
        Ok(())
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
