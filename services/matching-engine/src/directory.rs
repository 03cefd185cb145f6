//! Order directory
//!
//! Unordered id-to-handle map with expected O(1) insert, lookup, and erase.
//! The stored handle doubles as the order's position in its level queue, so
//! a cancel reaches the exact node without scanning the level.

use std::collections::HashMap;

use crate::book::OrderHandle;
use types::ids::OrderId;

/// Lookup table from order id to arena handle
#[derive(Debug, Default)]
pub struct OrderDirectory {
    entries: HashMap<OrderId, OrderHandle>,
}

impl OrderDirectory {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a resting order
    ///
    /// Returns false and leaves the directory unchanged if the id is
    /// already registered.
    pub fn insert(&mut self, id: OrderId, handle: OrderHandle) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, handle);
        true
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &OrderId) -> Option<OrderHandle> {
        self.entries.get(id).copied()
    }

    pub fn remove(&mut self, id: &OrderId) -> Option<OrderHandle> {
        self.entries.remove(id)
    }

    /// Number of resting orders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&OrderId, &OrderHandle)> {
        self.entries.iter()
    }
}
