//! Order admission and deterministic replay.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::events::{AddResult, LogEntry, Operation};
use super::order::{Order, OrderId, Side};
use crate::utils::current_time_millis;
use tracing::trace;

impl OrderBook {
    /// Admit a new limit order.
    ///
    /// Rejects non-positive price or quantity and duplicate ids of live
    /// orders before any state changes. Otherwise the order runs through the
    /// matching engine: the returned result carries the fills produced and,
    /// if quantity remained, where the remainder now rests.
    pub fn add_order(
        &mut self,
        order_id: OrderId,
        side: Side,
        price: u64,
        quantity: u64,
    ) -> Result<AddResult, OrderBookError> {
        self.ensure_active()?;
        if price == 0 {
            return Err(OrderBookError::InvalidPrice(price));
        }
        if quantity == 0 {
            return Err(OrderBookError::InvalidQuantity(quantity));
        }
        if self.order_locations.contains_key(&order_id) {
            return Err(OrderBookError::DuplicateOrderId(order_id));
        }

        trace!(
            "Order book {}: Adding order {} {} {} @ {}",
            self.symbol, order_id, side, quantity, price
        );

        self.sequence += 1;
        let order = Order {
            id: order_id,
            side,
            price,
            original_quantity: quantity,
            remaining_quantity: quantity,
            sequence: self.sequence,
            timestamp: current_time_millis(),
        };
        let admission_sequence = order.sequence;

        let execution = self.execute(order);
        self.verify_uncrossed()?;

        Ok(AddResult {
            order_id,
            fills: execution.fills,
            filled_order_ids: execution.filled_order_ids,
            remaining_quantity: execution.remaining_quantity,
            resting: execution.resting,
            deltas: execution.deltas,
            log: LogEntry {
                sequence: admission_sequence,
                op: Operation::Submit {
                    order_id,
                    side,
                    price,
                    quantity,
                },
            },
        })
    }

    /// Reconstruct a book by replaying a log of operations in sequence
    /// order. Replaying the log entries emitted by a book's results against
    /// an empty book yields the same resting state, fills, and sequence
    /// numbers.
    pub fn replay<I>(symbol: &str, operations: I) -> Result<OrderBook, OrderBookError>
    where
        I: IntoIterator<Item = Operation>,
    {
        let mut book = OrderBook::new(symbol);
        for op in operations {
            match op {
                Operation::Submit {
                    order_id,
                    side,
                    price,
                    quantity,
                } => {
                    book.add_order(order_id, side, price, quantity)?;
                }
                Operation::Cancel { order_id } => {
                    book.cancel_order(order_id)?;
                }
                Operation::Modify {
                    order_id,
                    new_price,
                    new_quantity,
                } => {
                    book.modify_order(order_id, new_price, new_quantity)?;
                }
            }
        }
        Ok(book)
    }
}
