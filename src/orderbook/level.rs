//! A single price level: the FIFO queue of resting orders at one price plus
//! its incrementally maintained open quantity.

use super::arena::{OrderArena, OrderHandle};
use super::order::Order;

/// All resting orders at one exact price on one side, oldest arrival first.
///
/// The queue is an intrusive doubly-linked chain through the order arena, so
/// membership changes anywhere in the queue are O(1). `aggregate_quantity` is
/// adjusted on every mutation rather than recomputed; an empty level must be
/// removed from its side immediately.
#[derive(Debug)]
pub(crate) struct PriceLevel {
    price: u64,
    head: Option<OrderHandle>,
    tail: Option<OrderHandle>,
    order_count: usize,
    aggregate_quantity: u64,
}

impl PriceLevel {
    pub fn new(price: u64) -> Self {
        Self {
            price,
            head: None,
            tail: None,
            order_count: 0,
            aggregate_quantity: 0,
        }
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn order_count(&self) -> usize {
        self.order_count
    }

    /// Sum of the members' remaining quantities.
    pub fn total_quantity(&self) -> u64 {
        self.aggregate_quantity
    }

    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Handle of the oldest resting order, the next to fill.
    pub fn front(&self) -> Option<OrderHandle> {
        self.head
    }

    /// Append an order at the tail of the FIFO queue.
    pub fn push_back(&mut self, handle: OrderHandle, arena: &mut OrderArena) {
        arena.set_prev(handle, self.tail);
        arena.set_next(handle, None);
        match self.tail {
            Some(tail) => arena.set_next(tail, Some(handle)),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.order_count += 1;
        self.aggregate_quantity += arena[handle].remaining_quantity;
    }

    /// Detach an order from anywhere in the queue. The order's current
    /// remaining quantity leaves the aggregate with it.
    pub fn unlink(&mut self, handle: OrderHandle, arena: &mut OrderArena) {
        let (prev, next) = arena.links(handle);
        match prev {
            Some(prev) => arena.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => arena.set_prev(next, prev),
            None => self.tail = prev,
        }
        arena.set_prev(handle, None);
        arena.set_next(handle, None);
        self.order_count -= 1;
        self.aggregate_quantity -= arena[handle].remaining_quantity;
    }

    /// Shrink the aggregate after a member's remaining quantity was reduced
    /// in place (a fill or an in-place quantity decrease).
    pub fn reduce(&mut self, delta: u64) {
        self.aggregate_quantity -= delta;
    }

    /// Walk the queue oldest-first.
    pub fn orders<'a>(&self, arena: &'a OrderArena) -> LevelOrders<'a> {
        LevelOrders {
            arena,
            next: self.head,
        }
    }
}

/// Iterator over the orders of one level in FIFO order.
pub(crate) struct LevelOrders<'a> {
    arena: &'a OrderArena,
    next: Option<OrderHandle>,
}

impl<'a> Iterator for LevelOrders<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        self.next = self.arena.next(handle);
        Some(&self.arena[handle])
    }
}
