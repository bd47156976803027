//! OrderBook implementation: price levels, order index, and matching.

pub mod book;

mod arena;
mod books;
mod error;
mod events;
mod level;
mod modifications;
mod operations;
mod order;
mod side;
mod snapshot;

pub mod matching;


pub use book::OrderBook;
pub use books::OrderBooks;
pub use error::OrderBookError;
pub use events::{
    AddResult, BookDelta, CancelResult, LogEntry, ModifyResult, Operation, RestingOrder, Trade,
};
pub use order::{Order, OrderId, Side};
pub use snapshot::{LevelSnapshot, OrderBookSnapshot};
