use criterion::Criterion;
use matchbook::{OrderBook, OrderId, Side};
use std::hint::black_box;

/// Register benchmarks for crossing incoming orders against resting liquidity
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");

    // One aggressive order sweeping many small resting orders at one level
    group.bench_function("sweep_single_level", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = book.add_order(OrderId::from_u64(i), Side::Sell, 1_000, 5);
            }
            let _ = black_box(book.add_order(
                OrderId::from_u64(1_000),
                Side::Buy,
                1_000,
                500,
            ));
        })
    });

    // One aggressive order walking several price levels
    group.bench_function("sweep_across_levels", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..50u64 {
                let _ = book.add_order(OrderId::from_u64(i), Side::Sell, 1_000 + i, 10);
            }
            let _ = black_box(book.add_order(
                OrderId::from_u64(1_000),
                Side::Buy,
                1_049,
                500,
            ));
        })
    });

    group.finish();
}
