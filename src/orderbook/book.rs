//! Core OrderBook implementation: owned state and the read-only surface.

use super::arena::{OrderArena, OrderHandle};
use super::error::OrderBookError;
use super::order::{Order, OrderId, Side};
use super::side::BookSide;
use super::snapshot::{LevelSnapshot, OrderBookSnapshot};
use crate::utils::current_time_millis;
use std::collections::HashMap;
use tracing::trace;

/// Location of a live order: the side and price of its level plus the arena
/// handle of its record. Exactly one entry exists per live order.
#[derive(Debug, Clone, Copy)]
pub(super) struct OrderLocation {
    pub side: Side,
    pub price: u64,
    pub handle: OrderHandle,
}

/// The OrderBook owns both sides and the order index for one instrument and
/// is the single entry point for admitting, cancelling, and modifying orders.
///
/// All mutating operations take `&mut self`: one instrument's order stream is
/// applied by a single writer in arrival order, which is what makes
/// price-time priority meaningful. Different instruments' books are
/// independent and may be driven concurrently (see
/// [`OrderBooks`](super::books::OrderBooks)). Reads hand out copies, never
/// live references into the book.
#[derive(Debug)]
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side price levels (buy orders), best price first when iterated
    pub(super) bids: BookSide,

    /// Ask side price levels (sell orders), best price first when iterated
    pub(super) asks: BookSide,

    /// Arena holding every resting order record
    pub(super) arena: OrderArena,

    /// Map from order id to its current location, for O(1) cancel/modify
    pub(super) order_locations: HashMap<OrderId, OrderLocation>,

    /// Book sequence number; numbers both admissions and trades
    pub(super) sequence: u64,

    /// The last price at which a trade occurred
    pub(super) last_trade_price: Option<u64>,

    /// Set after a crossed-book violation; mutation is refused while set
    pub(super) halted: bool,
}

impl OrderBook {
    /// Create a new, empty order book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            arena: OrderArena::new(),
            order_locations: HashMap::new(),
            sequence: 0,
            last_trade_price: None,
            halted: false,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the best bid price, if any. O(1).
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.best_price()
    }

    /// Get the best ask price, if any. O(1).
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.best_price()
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Get the last trade price, if any
    pub fn last_trade_price(&self) -> Option<u64> {
        self.last_trade_price
    }

    /// Whether the book refused further mutation after an invariant
    /// violation.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Number of live orders resting in the book.
    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    /// Highest sequence number assigned so far.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Look up a live order by id, returning a copy of its record.
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        let location = self.order_locations.get(&order_id)?;
        Some(self.arena[location.handle])
    }

    /// Get copies of all orders at a specific price level, FIFO order.
    pub fn orders_at_price(&self, side: Side, price: u64) -> Vec<Order> {
        trace!(
            "Order book {}: Getting orders at price {} for side {}",
            self.symbol, price, side
        );
        match self.book_side(side).level(price) {
            Some(level) => level.orders(&self.arena).copied().collect(),
            None => Vec::new(),
        }
    }

    /// Get copies of all orders in the book, bids then asks, best level
    /// first, FIFO within a level.
    pub fn all_orders(&self) -> Vec<Order> {
        let mut result = Vec::with_capacity(self.order_count());
        for side in [&self.bids, &self.asks] {
            for level in side.iter_best_first() {
                result.extend(level.orders(&self.arena).copied());
            }
        }
        result
    }

    /// Snapshot of the aggregate quantity at each of the best `n_levels`
    /// price levels on one side, best first. The returned vector is owned by
    /// the caller and unaffected by later book mutation.
    pub fn depth(&self, side: Side, n_levels: usize) -> Vec<(u64, u64)> {
        self.book_side(side)
            .iter_best_first()
            .take(n_levels)
            .map(|level| (level.price(), level.total_quantity()))
            .collect()
    }

    /// Total open quantity on one side across all levels.
    pub fn total_quantity(&self, side: Side) -> u64 {
        self.book_side(side).total_quantity()
    }

    /// Create a serializable snapshot of the book down to `depth` levels per
    /// side.
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let snapshot_side = |side: &BookSide| -> Vec<LevelSnapshot> {
            side.iter_best_first()
                .take(depth)
                .map(|level| LevelSnapshot {
                    price: level.price(),
                    quantity: level.total_quantity(),
                    order_count: level.order_count(),
                })
                .collect()
        };

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids: snapshot_side(&self.bids),
            asks: snapshot_side(&self.asks),
        }
    }

    pub(super) fn book_side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Refuse mutation while halted.
    pub(super) fn ensure_active(&self) -> Result<(), OrderBookError> {
        if self.halted {
            Err(OrderBookError::Halted)
        } else {
            Ok(())
        }
    }

    /// Verify the no-crossed-state invariant after a mutating operation. A
    /// violation halts the book: its state can no longer be trusted.
    pub(super) fn verify_uncrossed(&mut self) -> Result<(), OrderBookError> {
        if let (Some(best_bid), Some(best_ask)) = (self.bids.best_price(), self.asks.best_price())
            && best_bid >= best_ask
        {
            self.halted = true;
            return Err(OrderBookError::CrossedBook { best_bid, best_ask });
        }
        Ok(())
    }
}
