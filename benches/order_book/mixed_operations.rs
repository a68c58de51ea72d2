use criterion::Criterion;
use matchbook::{OrderBook, OrderModify, OrderType, Side};
use std::hint::black_box;

/// Register benchmarks for mixed operation workloads
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    // Alternating adds, modifies and cancels over a two-sided book
    group.bench_function("mixed_add_modify_cancel", |b| {
        b.iter(|| {
            let book = OrderBook::new();
            for i in 0..50u64 {
                let bid = i * 2 + 1;
                let ask = i * 2 + 2;
                book.add_limit_order(
                    bid,
                    990 - (i % 5) as i32,
                    10,
                    Side::Buy,
                    OrderType::GoodTillCancel,
                );
                book.add_limit_order(
                    ask,
                    1010 + (i % 5) as i32,
                    10,
                    Side::Sell,
                    OrderType::GoodTillCancel,
                );
                if i % 3 == 0 {
                    let _ = black_box(book.modify_order(OrderModify::new(
                        bid,
                        Side::Buy,
                        991 - (i % 5) as i32,
                        12,
                    )));
                }
                if i % 5 == 0 {
                    book.cancel_order(ask);
                }
            }
            black_box(book.snapshot())
        })
    });

    // Snapshot cost over a populated book
    group.bench_function("snapshot_populated_book", |b| {
        let book = OrderBook::new();
        for i in 0..200u64 {
            let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
            let price = if i % 2 == 0 {
                900 + (i % 50) as i32
            } else {
                1100 + (i % 50) as i32
            };
            book.add_limit_order(i + 1, price, 10, side, OrderType::GoodTillCancel);
        }
        b.iter(|| black_box(book.snapshot()))
    });

    group.finish();
}
