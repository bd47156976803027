//! Events and result types emitted by the book: trades, level deltas, the
//! replay log, and the outcomes of add/cancel/modify.
//!
//! Everything here is an owned copy. Downstream consumers never hold live
//! handles into the book, so later mutation cannot corrupt a view that was
//! already handed out.

use super::order::{Order, OrderId, Side};
use serde::{Deserialize, Serialize};

/// One fill between an incoming order and a resting order.
///
/// The execution price is always the resting order's price; an aggressor
/// whose limit is better than the resting price gets price improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Execution price (the resting order's price)
    pub price: u64,

    /// Quantity exchanged in this fill
    pub quantity: u64,

    /// Id of the buy-side order
    pub buy_order_id: OrderId,

    /// Id of the sell-side order
    pub sell_order_id: OrderId,

    /// Book sequence number of this trade, strictly increasing
    pub sequence: u64,
}

/// Incremental change to one price level, sufficient for a downstream feed
/// to reconstruct depth without re-querying the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookDelta {
    /// A level came into existence with the given open quantity
    LevelAdded {
        /// Side the level lives on
        side: Side,
        /// Level price
        price: u64,
        /// Open quantity at the level
        quantity: u64,
    },
    /// A level's last order departed and the level was dropped
    LevelRemoved {
        /// Side the level lived on
        side: Side,
        /// Level price
        price: u64,
    },
    /// A level's open quantity changed
    LevelQuantityChanged {
        /// Side the level lives on
        side: Side,
        /// Level price
        price: u64,
        /// New open quantity at the level
        quantity: u64,
    },
}

/// A state-mutating operation in replayable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Admit a new order
    Submit {
        /// Order id chosen by the caller
        order_id: OrderId,
        /// Buy or Sell
        side: Side,
        /// Limit price in ticks
        price: u64,
        /// Order quantity
        quantity: u64,
    },
    /// Cancel a resting order
    Cancel {
        /// Id of the order to cancel
        order_id: OrderId,
    },
    /// Modify a resting order's price and/or quantity
    Modify {
        /// Id of the order to modify
        order_id: OrderId,
        /// Replacement price
        new_price: u64,
        /// Replacement quantity
        new_quantity: u64,
    },
}

/// One entry of the book's operation log. Replaying the entries of a book in
/// sequence order against an empty book reconstructs its state exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Book sequence number assigned to this operation
    pub sequence: u64,

    /// The operation itself
    pub op: Operation,
}

/// Where and how an unfilled remainder came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestingOrder {
    /// Id of the resting order
    pub order_id: OrderId,

    /// Side it rests on
    pub side: Side,

    /// Price level it rests at
    pub price: u64,

    /// Open quantity that rested
    pub quantity: u64,

    /// Sequence number governing its FIFO priority
    pub sequence: u64,

    /// Position in the level's queue at insertion time (0 = front)
    pub queue_position: usize,
}

/// Outcome of admitting one order: the fills it produced and, if quantity
/// remained, where the remainder now rests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResult {
    /// Id of the admitted order
    pub order_id: OrderId,

    /// Fills produced, in execution order
    pub fills: Vec<Trade>,

    /// Resting orders that were fully filled and removed by this admission
    pub filled_order_ids: Vec<OrderId>,

    /// Quantity left after matching; zero means fully filled, nothing rests
    pub remaining_quantity: u64,

    /// Present when a remainder rested in the book
    pub resting: Option<RestingOrder>,

    /// Level deltas caused by this operation, in order
    pub deltas: Vec<BookDelta>,

    /// Replay log entry for this operation
    pub log: LogEntry,
}

impl AddResult {
    /// True when the incoming order was fully filled.
    pub fn is_complete(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Total quantity executed across all fills.
    pub fn executed_quantity(&self) -> u64 {
        self.fills.iter().map(|fill| fill.quantity).sum()
    }
}

/// Outcome of cancelling a resting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResult {
    /// The order as it stood when removed from the book
    pub order: Order,

    /// Level deltas caused by the removal
    pub deltas: Vec<BookDelta>,

    /// Replay log entry for this operation
    pub log: LogEntry,
}

/// Outcome of modifying a resting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifyResult {
    /// Pure quantity decrease at an unchanged price: the order kept its
    /// position in the queue.
    Reduced {
        /// Id of the modified order
        order_id: OrderId,

        /// Price the order still rests at
        price: u64,

        /// Its new remaining quantity
        new_quantity: u64,

        /// Level deltas caused by the decrease
        deltas: Vec<BookDelta>,

        /// Replay log entry for this operation
        log: LogEntry,
    },

    /// Price change or quantity increase: the order forfeited its priority,
    /// was withdrawn, and was re-admitted through the matching engine with a
    /// fresh sequence number. The inner result's log entry records the
    /// modify, not a submit.
    Requeued(AddResult),
}
