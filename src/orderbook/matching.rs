//! The core matching loop: crosses an incoming order against the opposite
//! side while price-crossable, then rests any remainder.

use super::book::{OrderBook, OrderLocation};
use super::events::{BookDelta, RestingOrder, Trade};
use super::order::{Order, OrderId, Side};
use tracing::trace;

/// Internal outcome of running one order through the engine. The public
/// operations wrap this into an `AddResult` or `ModifyResult` together with
/// the replay log entry.
#[derive(Debug)]
pub(super) struct Execution {
    pub fills: Vec<Trade>,
    pub filled_order_ids: Vec<OrderId>,
    pub remaining_quantity: u64,
    pub resting: Option<RestingOrder>,
    pub deltas: Vec<BookDelta>,
}

impl OrderBook {
    /// Match `incoming` against the opposite side, oldest order at the best
    /// crossable level first, then rest any unfilled remainder on its own
    /// side.
    ///
    /// The engine itself never rejects: validation happened in the facade,
    /// and the loop terminates because quantities are bounded and strictly
    /// decrease. Every invocation ends fully filled or fully rested.
    pub(super) fn execute(&mut self, mut incoming: Order) -> Execution {
        let mut fills = Vec::new();
        let mut filled_order_ids = Vec::new();
        let mut deltas = Vec::new();

        while incoming.remaining_quantity > 0 {
            let opposite = match incoming.side {
                Side::Buy => &self.asks,
                Side::Sell => &self.bids,
            };
            if !opposite.is_crossable(incoming.price) {
                break;
            }
            let Some(best_price) = opposite.best_price() else {
                break;
            };

            // Oldest resting order at the best opposite level.
            let resting_handle = {
                let (book_side, arena) = match incoming.side {
                    Side::Buy => (&mut self.asks, &mut self.arena),
                    Side::Sell => (&mut self.bids, &mut self.arena),
                };
                let Some(level) = book_side.level_mut(best_price) else {
                    // The tracked best price always names a live level.
                    debug_assert!(false, "best price without a level");
                    break;
                };
                let Some(front) = level.front() else {
                    // Empty levels are removed eagerly and never retained.
                    debug_assert!(false, "empty level retained in book side");
                    break;
                };
                let resting = &arena[front];
                debug_assert_eq!(resting.price, best_price);
                front
            };

            let fill_quantity = incoming
                .remaining_quantity
                .min(self.arena[resting_handle].remaining_quantity);

            self.sequence += 1;
            let trade_sequence = self.sequence;

            // Decrement both records; the level aggregate follows the
            // resting order.
            incoming.remaining_quantity -= fill_quantity;
            let resting = &mut self.arena[resting_handle];
            resting.remaining_quantity -= fill_quantity;
            let resting_id = resting.id;
            let resting_filled = resting.remaining_quantity == 0;

            let (buy_order_id, sell_order_id) = match incoming.side {
                Side::Buy => (incoming.id, resting_id),
                Side::Sell => (resting_id, incoming.id),
            };
            // The execution price is the resting order's price, never the
            // incoming order's.
            fills.push(Trade {
                price: best_price,
                quantity: fill_quantity,
                buy_order_id,
                sell_order_id,
                sequence: trade_sequence,
            });
            self.last_trade_price = Some(best_price);
            trace!(
                "Order book {}: fill {} @ {} (buy {}, sell {})",
                self.symbol, fill_quantity, best_price, buy_order_id, sell_order_id
            );

            let resting_side = incoming.side.opposite();
            let (book_side, arena) = match incoming.side {
                Side::Buy => (&mut self.asks, &mut self.arena),
                Side::Sell => (&mut self.bids, &mut self.arena),
            };
            let level = book_side
                .level_mut(best_price)
                .expect("level present while filling against it");
            level.reduce(fill_quantity);

            if resting_filled {
                level.unlink(resting_handle, arena);
                let level_empty = level.is_empty();
                let level_quantity = level.total_quantity();
                arena.remove(resting_handle);
                if level_empty {
                    book_side.remove_level(best_price);
                    deltas.push(BookDelta::LevelRemoved {
                        side: resting_side,
                        price: best_price,
                    });
                } else {
                    deltas.push(BookDelta::LevelQuantityChanged {
                        side: resting_side,
                        price: best_price,
                        quantity: level_quantity,
                    });
                }
                self.order_locations.remove(&resting_id);
                filled_order_ids.push(resting_id);
            } else {
                deltas.push(BookDelta::LevelQuantityChanged {
                    side: resting_side,
                    price: best_price,
                    quantity: level.total_quantity(),
                });
            }
        }

        let resting = if incoming.remaining_quantity > 0 {
            Some(self.rest_order(incoming, &mut deltas))
        } else {
            None
        };

        Execution {
            fills,
            filled_order_ids,
            remaining_quantity: incoming.remaining_quantity,
            resting,
            deltas,
        }
    }

    /// Insert an unfilled remainder at the tail of its price level, creating
    /// the level if this is the first order at that price.
    fn rest_order(&mut self, order: Order, deltas: &mut Vec<BookDelta>) -> RestingOrder {
        let (book_side, arena) = match order.side {
            Side::Buy => (&mut self.bids, &mut self.arena),
            Side::Sell => (&mut self.asks, &mut self.arena),
        };
        let handle = arena.insert(order);
        let (level, created) = book_side.get_or_insert_level(order.price);
        level.push_back(handle, arena);
        let level_quantity = level.total_quantity();
        let queue_position = level.order_count() - 1;

        deltas.push(if created {
            BookDelta::LevelAdded {
                side: order.side,
                price: order.price,
                quantity: level_quantity,
            }
        } else {
            BookDelta::LevelQuantityChanged {
                side: order.side,
                price: order.price,
                quantity: level_quantity,
            }
        });

        self.order_locations.insert(
            order.id,
            OrderLocation {
                side: order.side,
                price: order.price,
                handle,
            },
        );
        trace!(
            "Order book {}: order {} rests {} @ {} (queue position {})",
            self.symbol, order.id, order.remaining_quantity, order.price, queue_position
        );

        RestingOrder {
            order_id: order.id,
            side: order.side,
            price: order.price,
            quantity: order.remaining_quantity,
            sequence: order.sequence,
            queue_position,
        }
    }
}
