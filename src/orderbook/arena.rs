//! Slab arena of order records with intrusive FIFO links.
//!
//! Price levels chain their members through `prev`/`next` handles stored next
//! to each order, so removing an order from the middle of a level on cancel
//! or fill is O(1) without any aliased pointers between the order index and
//! the level's membership list.

use super::order::Order;
use std::ops::{Index, IndexMut};

/// Stable handle to an order slot. Valid until the order is removed; a handle
/// is never reissued while its order is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OrderHandle(u32);

#[derive(Debug)]
struct Slot {
    order: Order,
    prev: Option<OrderHandle>,
    next: Option<OrderHandle>,
}

/// Owns every order record in one book. Freed slots are recycled through a
/// free list so long-running books do not grow without bound.
#[derive(Debug, Default)]
pub(crate) struct OrderArena {
    slots: Vec<Option<Slot>>,
    free: Vec<u32>,
    len: usize,
}

impl OrderArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live orders in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store an order and return its handle. Links start detached.
    pub fn insert(&mut self, order: Order) -> OrderHandle {
        let slot = Slot {
            order,
            prev: None,
            next: None,
        };
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index as usize] = Some(slot);
                OrderHandle(index)
            }
            None => {
                self.slots.push(Some(slot));
                OrderHandle((self.slots.len() - 1) as u32)
            }
        }
    }

    /// Release a slot and return the order it held. The handle must already
    /// be unlinked from its level.
    pub fn remove(&mut self, handle: OrderHandle) -> Order {
        let slot = self.slots[handle.0 as usize]
            .take()
            .expect("stale order handle");
        self.free.push(handle.0);
        self.len -= 1;
        slot.order
    }

    pub fn links(&self, handle: OrderHandle) -> (Option<OrderHandle>, Option<OrderHandle>) {
        let slot = self.slot(handle);
        (slot.prev, slot.next)
    }

    pub fn next(&self, handle: OrderHandle) -> Option<OrderHandle> {
        self.slot(handle).next
    }

    pub fn set_prev(&mut self, handle: OrderHandle, prev: Option<OrderHandle>) {
        self.slot_mut(handle).prev = prev;
    }

    pub fn set_next(&mut self, handle: OrderHandle, next: Option<OrderHandle>) {
        self.slot_mut(handle).next = next;
    }

    fn slot(&self, handle: OrderHandle) -> &Slot {
        self.slots[handle.0 as usize]
            .as_ref()
            .expect("stale order handle")
    }

    fn slot_mut(&mut self, handle: OrderHandle) -> &mut Slot {
        self.slots[handle.0 as usize]
            .as_mut()
            .expect("stale order handle")
    }
}

impl Index<OrderHandle> for OrderArena {
    type Output = Order;

    fn index(&self, handle: OrderHandle) -> &Order {
        &self.slot(handle).order
    }
}

impl IndexMut<OrderHandle> for OrderArena {
    fn index_mut(&mut self, handle: OrderHandle) -> &mut Order {
        &mut self.slot_mut(handle).order
    }
}
