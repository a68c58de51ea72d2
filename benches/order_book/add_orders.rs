use criterion::Criterion;
use matchbook::{OrderBook, OrderType, Side};
use std::hint::black_box;

/// Register all benchmarks for adding orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // Benchmark adding limit orders spread across price levels
    group.bench_function("add_limit_orders_spread", |b| {
        b.iter(|| {
            let book = OrderBook::new();
            for i in 0..100u64 {
                let _ = black_box(book.add_limit_order(
                    i + 1,
                    1000 + i as i32,
                    10,
                    Side::Buy,
                    OrderType::GoodTillCancel,
                ));
            }
        })
    });

    // Benchmark deep queues at a single price level
    group.bench_function("add_limit_orders_one_level", |b| {
        b.iter(|| {
            let book = OrderBook::new();
            for i in 0..100u64 {
                let _ = black_box(book.add_limit_order(
                    i + 1,
                    1000,
                    10,
                    Side::Buy,
                    OrderType::GoodTillCancel,
                ));
            }
        })
    });

    // Benchmark the add/cancel round trip
    group.bench_function("add_then_cancel_orders", |b| {
        b.iter(|| {
            let book = OrderBook::new();
            for i in 0..100u64 {
                let id = i + 1;
                let _ = black_box(book.add_limit_order(
                    id,
                    1000 + (i % 10) as i32,
                    10,
                    Side::Sell,
                    OrderType::GoodTillCancel,
                ));
                book.cancel_order(id);
            }
        })
    });

    group.finish();
}
