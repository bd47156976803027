//! Cancelling and modifying resting orders.

use super::book::{OrderBook, OrderLocation};
use super::error::OrderBookError;
use super::events::{AddResult, BookDelta, CancelResult, LogEntry, ModifyResult, Operation};
use super::order::{Order, OrderId, Side};
use crate::utils::current_time_millis;
use tracing::trace;

impl OrderBook {
    /// Cancel a resting order by id.
    ///
    /// O(1) via the order index. Fails with `OrderNotFound` if the id has no
    /// live order (never existed, already cancelled, or already fully
    /// filled); nothing mutates on failure. Cancelling the same id again
    /// always fails the same way.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Result<CancelResult, OrderBookError> {
        self.ensure_active()?;
        let Some(location) = self.order_locations.get(&order_id).copied() else {
            return Err(OrderBookError::OrderNotFound(order_id));
        };

        let mut deltas = Vec::with_capacity(1);
        let order = self.remove_resting(order_id, location, &mut deltas);
        trace!(
            "Order book {}: Cancelled order {} ({} @ {} remaining)",
            self.symbol, order_id, order.remaining_quantity, order.price
        );

        self.sequence += 1;
        Ok(CancelResult {
            order,
            deltas,
            log: LogEntry {
                sequence: self.sequence,
                op: Operation::Cancel { order_id },
            },
        })
    }

    /// Modify a resting order's price and/or quantity.
    ///
    /// A pure quantity decrease at an unchanged price updates the order in
    /// place and keeps its queue position: shrinking an order is harmless to
    /// the orders behind it. Anything else (price change, or a quantity
    /// increase) could jump the queue, so the order is withdrawn and
    /// re-admitted through the matching engine with a fresh sequence number,
    /// potentially triggering new fills.
    pub fn modify_order(
        &mut self,
        order_id: OrderId,
        new_price: u64,
        new_quantity: u64,
    ) -> Result<ModifyResult, OrderBookError> {
        self.ensure_active()?;
        if new_price == 0 {
            return Err(OrderBookError::InvalidPrice(new_price));
        }
        if new_quantity == 0 {
            return Err(OrderBookError::InvalidQuantity(new_quantity));
        }
        let Some(location) = self.order_locations.get(&order_id).copied() else {
            return Err(OrderBookError::OrderNotFound(order_id));
        };
        let current = self.arena[location.handle];

        let op = Operation::Modify {
            order_id,
            new_price,
            new_quantity,
        };

        if new_price == current.price && new_quantity <= current.remaining_quantity {
            // In-place decrease, priority preserved.
            let delta = current.remaining_quantity - new_quantity;
            let mut deltas = Vec::with_capacity(1);
            if delta > 0 {
                let (book_side, arena) = match location.side {
                    Side::Buy => (&mut self.bids, &mut self.arena),
                    Side::Sell => (&mut self.asks, &mut self.arena),
                };
                arena[location.handle].remaining_quantity = new_quantity;
                let level = book_side
                    .level_mut(location.price)
                    .expect("order index points at a live level");
                level.reduce(delta);
                deltas.push(BookDelta::LevelQuantityChanged {
                    side: location.side,
                    price: location.price,
                    quantity: level.total_quantity(),
                });
            }
            trace!(
                "Order book {}: Reduced order {} to {} @ {}",
                self.symbol, order_id, new_quantity, new_price
            );

            self.sequence += 1;
            Ok(ModifyResult::Reduced {
                order_id,
                price: new_price,
                new_quantity,
                deltas,
                log: LogEntry {
                    sequence: self.sequence,
                    op,
                },
            })
        } else {
            // Priority forfeited: withdraw, then re-admit as new.
            let mut deltas = Vec::new();
            self.remove_resting(order_id, location, &mut deltas);
            trace!(
                "Order book {}: Requeueing order {} as {} @ {}",
                self.symbol, order_id, new_quantity, new_price
            );

            self.sequence += 1;
            let replacement = Order {
                id: order_id,
                side: current.side,
                price: new_price,
                original_quantity: new_quantity,
                remaining_quantity: new_quantity,
                sequence: self.sequence,
                timestamp: current_time_millis(),
            };
            let log_sequence = replacement.sequence;

            let execution = self.execute(replacement);
            self.verify_uncrossed()?;

            deltas.extend(execution.deltas);
            Ok(ModifyResult::Requeued(AddResult {
                order_id,
                fills: execution.fills,
                filled_order_ids: execution.filled_order_ids,
                remaining_quantity: execution.remaining_quantity,
                resting: execution.resting,
                deltas,
                log: LogEntry {
                    sequence: log_sequence,
                    op,
                },
            }))
        }
    }

    /// Withdraw a resting order from its level, the arena, and the index.
    /// Shared by cancel and the requeue path of modify.
    fn remove_resting(
        &mut self,
        order_id: OrderId,
        location: OrderLocation,
        deltas: &mut Vec<BookDelta>,
    ) -> Order {
        let (book_side, arena) = match location.side {
            Side::Buy => (&mut self.bids, &mut self.arena),
            Side::Sell => (&mut self.asks, &mut self.arena),
        };
        let level = book_side
            .level_mut(location.price)
            .expect("order index points at a live level");
        level.unlink(location.handle, arena);
        let level_empty = level.is_empty();
        let level_quantity = level.total_quantity();
        let order = arena.remove(location.handle);

        if level_empty {
            book_side.remove_level(location.price);
            deltas.push(BookDelta::LevelRemoved {
                side: location.side,
                price: location.price,
            });
        } else {
            deltas.push(BookDelta::LevelQuantityChanged {
                side: location.side,
                price: location.price,
                quantity: level_quantity,
            });
        }
        self.order_locations.remove(&order_id);
        order
    }
}
