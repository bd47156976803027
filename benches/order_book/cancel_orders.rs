use criterion::Criterion;
use matchbook::{OrderBook, OrderId, Side};
use std::hint::black_box;

/// Register benchmarks for cancelling and modifying resting orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Cancel and Modify");

    // Cancels hitting the middle of one deep FIFO queue
    group.bench_function("cancel_mid_queue", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = book.add_order(OrderId::from_u64(i), Side::Buy, 1_000, 10);
            }
            for i in (10..90u64).step_by(3) {
                let _ = black_box(book.cancel_order(OrderId::from_u64(i)));
            }
        })
    });

    // In-place quantity decreases, which keep queue position
    group.bench_function("modify_decrease_in_place", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = book.add_order(OrderId::from_u64(i), Side::Buy, 1_000, 10);
            }
            for i in 0..100u64 {
                let _ = black_box(book.modify_order(OrderId::from_u64(i), 1_000, 5));
            }
        })
    });

    group.finish();
}
