use criterion::Criterion;
use matchbook::{OrderBook, OrderId, Side};
use std::hint::black_box;

/// Register benchmarks for adding resting orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // Orders spread across distinct price levels
    group.bench_function("add_orders_new_levels", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(book.add_order(
                    OrderId::from_u64(i),
                    Side::Buy,
                    1_000 + i,
                    10,
                ));
            }
        })
    });

    // Orders stacked onto one level, exercising the FIFO queue
    group.bench_function("add_orders_single_level", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(book.add_order(OrderId::from_u64(i), Side::Buy, 1_000, 10));
            }
        })
    });

    group.finish();
}
