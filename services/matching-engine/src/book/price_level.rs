//! Price level with FIFO queue
//!
//! A price level holds all orders resting at one price, in insertion order.
//! That order is the time priority: the matcher always takes the head.
//!
//! The queue is an intrusive doubly-linked list threaded through arena
//! slots, so unlinking any member is O(1) given its handle and the handles
//! held by the directory stay valid while neighbors come and go.

use super::arena::{OrderArena, OrderHandle};
use types::numeric::Quantity;

/// FIFO queue of resting orders at a single price
#[derive(Debug, Default)]
pub struct PriceLevel {
    head: Option<OrderHandle>,
    tail: Option<OrderHandle>,
    total_quantity: Quantity,
    order_count: usize,
}

impl PriceLevel {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            total_quantity: Quantity::zero(),
            order_count: 0,
        }
    }

    /// Append an order at the tail (latest time priority)
    pub fn push_back(&mut self, arena: &mut OrderArena, handle: OrderHandle) {
        let prev_tail = self.tail;
        if let Some(tail) = prev_tail {
            arena.node_mut(tail).next = Some(handle);
        } else {
            self.head = Some(handle);
        }
        let node = arena.node_mut(handle);
        node.prev = prev_tail;
        node.next = None;
        self.tail = Some(handle);

        self.order_count += 1;
        self.total_quantity += arena.order(handle).remaining_quantity;
    }

    /// Unlink an order wherever it sits in the queue
    ///
    /// The level total drops by the order's current remaining quantity.
    pub fn unlink(&mut self, arena: &mut OrderArena, handle: OrderHandle) {
        let (prev, next, remaining) = {
            let node = arena.node(handle);
            (node.prev, node.next, node.order.remaining_quantity)
        };

        match prev {
            Some(prev) => arena.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => arena.node_mut(next).prev = prev,
            None => self.tail = prev,
        }

        let node = arena.node_mut(handle);
        node.prev = None;
        node.next = None;

        self.order_count -= 1;
        self.total_quantity -= remaining;
    }

    /// Head of the queue: the order with the earliest time priority
    pub fn front(&self) -> Option<OrderHandle> {
        self.head
    }

    /// Account for an in-place partial fill of a member order
    pub fn reduce_total(&mut self, quantity: Quantity) {
        self.total_quantity -= quantity;
    }

    /// Aggregate remaining quantity across the queue
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    pub fn order_count(&self) -> usize {
        self.order_count
    }

    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Iterate handles head to tail
    pub fn iter<'a>(&self, arena: &'a OrderArena) -> LevelIter<'a> {
        LevelIter {
            arena,
            cursor: self.head,
        }
    }
}

/// FIFO iterator over a level's handles
pub struct LevelIter<'a> {
    arena: &'a OrderArena,
    cursor: Option<OrderHandle>,
}

impl Iterator for LevelIter<'_> {
    type Item = OrderHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        self.cursor = self.arena.node(handle).next;
        Some(handle)
    }
}
