//! # Price-Time-Priority Limit Order Book
//!
//! A limit order book and matching engine for one instrument, written in Rust. Orders rest in
//! strict FIFO queues per price level, incoming orders cross against the opposite side while
//! price-crossable, and every state-mutating operation is expressible as a replayable log entry.
//!
//! ## Key Features
//!
//! - **Price-time priority**: within a price level, the earliest-arrived order always fills
//!   first; across levels, the best price always fills first. Equal-priced orders never reorder
//!   relative to each other except when a modification forfeits priority.
//!
//! - **Execution at the resting price**: a fill always executes at the resting order's price,
//!   never the incoming order's, so an aggressive limit order receives price improvement.
//!
//! - **Integer ticks throughout**: prices and quantities are `u64` tick counts. Price levels are
//!   keys into an ordered structure, and floating-point comparison drift would corrupt level
//!   identity, so no floating point ever enters a comparison.
//!
//! - **O(1) order removal**: order records live in a slab arena and each price level chains its
//!   members through intrusive links, so a cancel or fill anywhere in a queue is O(1). Whole-level
//!   insertion and removal are O(log L) in the number of levels; best bid/ask lookup is O(1).
//!
//! - **Event and replay surface**: each operation returns the trades it produced plus the level
//!   deltas (`LevelAdded`, `LevelRemoved`, `LevelQuantityChanged`) a downstream feed needs to
//!   mirror depth, and a [`LogEntry`] from which [`OrderBook::replay`] reconstructs book state
//!   deterministically.
//!
//! - **Single writer per instrument**: mutating operations take `&mut self`; one instrument's
//!   stream is applied in arrival order, which is what makes time priority well defined. The
//!   [`OrderBooks`] registry drives independent instruments concurrently.
//!
//! ## Modify Semantics
//!
//! A modification that only decreases quantity at an unchanged price updates the order in place
//! and preserves its queue position. Any price change or quantity increase is treated as
//! cancel-then-reinsert: the order forfeits time priority, receives a fresh sequence number, and
//! may immediately match. This mirrors standard price-time-priority venues, where anything that
//! could jump the queue loses its place in it.
//!
//! ## Failure Model
//!
//! Caller-input errors (`InvalidPrice`, `InvalidQuantity`, `DuplicateOrderId`, `OrderNotFound`)
//! are ordinary result values and never mutate the book. A crossed-book condition, which should
//! be unreachable, is a defect signal: the book halts and refuses further mutation until rebuilt
//! externally, e.g. by replay.
//!
//! ## Example
//!
//! ```
//! use matchbook::{OrderBook, OrderId, Side};
//!
//! let mut book = OrderBook::new("BTC/USD");
//!
//! book.add_order(OrderId::from_u64(1), Side::Sell, 101, 5).unwrap();
//! let result = book.add_order(OrderId::from_u64(2), Side::Buy, 101, 8).unwrap();
//!
//! assert_eq!(result.executed_quantity(), 5);
//! assert_eq!(result.fills[0].price, 101);
//! assert_eq!(book.best_bid(), Some(101));
//! assert_eq!(book.best_ask(), None);
//! ```

pub mod orderbook;

mod utils;

pub use orderbook::{
    AddResult, BookDelta, CancelResult, LevelSnapshot, LogEntry, ModifyResult, Operation, Order,
    OrderBook, OrderBookError, OrderBookSnapshot, OrderBooks, OrderId, RestingOrder, Side, Trade,
};
pub use utils::current_time_millis;
