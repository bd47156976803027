//! End-to-end scenarios through the public API.

use matchbook::{ModifyResult, OrderBook, OrderBookError, OrderId, Side};

fn id(n: u64) -> OrderId {
    OrderId::from_u64(n)
}

#[test]
fn scenario_admit_into_empty_book() {
    let mut book = OrderBook::new("TEST");
    let result = book.add_order(id(1), Side::Buy, 100, 10).unwrap();

    assert!(result.fills.is_empty());
    assert_eq!(book.best_bid(), Some(100));
    assert_eq!(book.depth(Side::Buy, 1), vec![(100, 10)]);
}

#[test]
fn scenario_partial_fill_respects_fifo() {
    let mut book = OrderBook::new("TEST");
    book.add_order(id(1), Side::Sell, 101, 5).unwrap();
    book.add_order(id(2), Side::Sell, 101, 5).unwrap();

    let result = book.add_order(id(3), Side::Buy, 101, 8).unwrap();

    assert_eq!(result.fills.len(), 2);
    assert_eq!(
        (result.fills[0].sell_order_id, result.fills[0].quantity),
        (id(1), 5)
    );
    assert_eq!(
        (result.fills[1].sell_order_id, result.fills[1].quantity),
        (id(2), 3)
    );
    assert!(result.resting.is_none());

    // The first seller is gone, the second keeps 2.
    assert_eq!(book.get_order(id(1)), None);
    assert_eq!(book.get_order(id(2)).unwrap().remaining_quantity, 2);
}

#[test]
fn scenario_price_change_forfeits_priority() {
    let mut book = OrderBook::new("TEST");
    book.add_order(id(1), Side::Buy, 100, 10).unwrap(); // order A
    book.add_order(id(2), Side::Buy, 100, 10).unwrap(); // order B

    book.modify_order(id(1), 99, 10).unwrap();

    // A was withdrawn and re-admitted at 99 with a fresh sequence; B now has
    // the better price and fills first.
    let sequence_a = book.get_order(id(1)).unwrap().sequence;
    let sequence_b = book.get_order(id(2)).unwrap().sequence;
    assert!(sequence_a > sequence_b);

    let result = book.add_order(id(3), Side::Sell, 99, 12).unwrap();
    assert_eq!(result.fills[0].buy_order_id, id(2));
    assert_eq!(result.fills[0].price, 100);
    assert_eq!(result.fills[1].buy_order_id, id(1));
    assert_eq!(result.fills[1].price, 99);
}

#[test]
fn scenario_quantity_decrease_preserves_position() {
    let mut book = OrderBook::new("TEST");
    book.add_order(id(1), Side::Buy, 100, 10).unwrap();

    let result = book.modify_order(id(1), 100, 6).unwrap();
    assert!(matches!(result, ModifyResult::Reduced { .. }));

    let order = book.get_order(id(1)).unwrap();
    assert_eq!(order.remaining_quantity, 6);
    assert_eq!(book.depth(Side::Buy, 1), vec![(100, 6)]);

    // Position unchanged: still at the front of its level.
    assert_eq!(book.orders_at_price(Side::Buy, 100)[0].id, id(1));
}

#[test]
fn scenario_double_cancel() {
    let mut book = OrderBook::new("TEST");
    book.add_order(id(1), Side::Sell, 100, 10).unwrap();

    let first = book.cancel_order(id(1));
    assert!(first.is_ok());
    assert_eq!(book.best_ask(), None);
    assert!(book.depth(Side::Sell, 1).is_empty());

    let second = book.cancel_order(id(1));
    assert_eq!(second.unwrap_err(), OrderBookError::OrderNotFound(id(1)));
}

#[test]
fn scenario_snapshot_feeds_market_data() {
    let mut book = OrderBook::new("BTC/USD");
    book.add_order(id(1), Side::Buy, 9_900, 10).unwrap();
    book.add_order(id(2), Side::Buy, 9_890, 20).unwrap();
    book.add_order(id(3), Side::Sell, 10_000, 15).unwrap();

    let snapshot = book.create_snapshot(5);
    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: matchbook::OrderBookSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.symbol, "BTC/USD");
    assert_eq!(parsed.best_bid(), Some((9_900, 10)));
    assert_eq!(parsed.best_ask(), Some((10_000, 15)));
    assert_eq!(parsed.spread(), Some(100));
}

#[test]
fn scenario_replay_reconstructs_a_session() {
    let mut book = OrderBook::new("TEST");
    let mut ops = Vec::new();

    ops.push(book.add_order(id(1), Side::Buy, 100, 10).unwrap().log.op);
    ops.push(book.add_order(id(2), Side::Sell, 102, 8).unwrap().log.op);
    ops.push(book.add_order(id(3), Side::Buy, 102, 5).unwrap().log.op);
    let modify = book.modify_order(id(1), 101, 10).unwrap();
    let ModifyResult::Requeued(requeue) = modify else {
        panic!("expected requeue");
    };
    ops.push(requeue.log.op);
    ops.push(book.cancel_order(id(2)).unwrap().log.op);

    let replayed = OrderBook::replay("TEST", ops).unwrap();
    assert_eq!(replayed.best_bid(), book.best_bid());
    assert_eq!(replayed.best_ask(), book.best_ask());
    assert_eq!(replayed.depth(Side::Buy, 10), book.depth(Side::Buy, 10));
    assert_eq!(replayed.depth(Side::Sell, 10), book.depth(Side::Sell, 10));
    assert_eq!(replayed.sequence(), book.sequence());
}
