//! Integration tests for concurrent use of the per-instrument registry.

use matchbook::{OrderBooks, OrderId, Side};
use std::sync::Arc;
use std::thread;

#[test]
fn independent_instruments_progress_concurrently() {
    let books = Arc::new(OrderBooks::new());
    let symbols = ["BTC/USD", "ETH/USD", "SOL/USD"];

    let handles: Vec<_> = symbols
        .into_iter()
        .enumerate()
        .map(|(worker, symbol)| {
            let books = Arc::clone(&books);
            thread::spawn(move || {
                let book = books.get_or_create(symbol);
                for n in 0..500u64 {
                    let mut book = book.lock().unwrap();
                    let order_id = OrderId::from_u64((worker as u64) << 32 | n);
                    let side = if n % 2 == 0 { Side::Buy } else { Side::Sell };
                    let price = if side == Side::Buy { 100 } else { 101 };
                    book.add_order(order_id, side, price, 1).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(books.len(), symbols.len());
    for symbol in symbols {
        let book = books.get(symbol).unwrap();
        let book = book.lock().unwrap();
        // Each instrument saw its own serialized stream.
        assert_eq!(book.sequence(), 500);
        assert_eq!(book.total_quantity(Side::Buy), 250);
        assert_eq!(book.total_quantity(Side::Sell), 250);
    }
}

#[test]
fn single_instrument_writers_serialize_behind_the_mutex() {
    let books = Arc::new(OrderBooks::new());

    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let books = Arc::clone(&books);
            thread::spawn(move || {
                let book = books.get_or_create("BTC/USD");
                for n in 0..250u64 {
                    let order_id = OrderId::from_u64(worker << 32 | n);
                    book.lock()
                        .unwrap()
                        .add_order(order_id, Side::Buy, 100, 1)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let book = books.get("BTC/USD").unwrap();
    let book = book.lock().unwrap();
    assert_eq!(book.order_count(), 1_000);
    assert_eq!(book.depth(Side::Buy, 1), vec![(100, 1_000)]);
}
