//! End-to-end coverage of order admission through the public API.

use matchbook::{Order, OrderBook, OrderBookError, OrderType, Side};

#[test]
fn test_basic_add_and_cancel() {
    let book = OrderBook::new();

    let trades = book.add_order(Order::new(OrderType::GoodTillCancel, 1, Side::Buy, 100, 10));
    assert!(trades.is_empty());
    assert_eq!(book.order_count(), 1);

    book.cancel_order(1);
    assert_eq!(book.order_count(), 0);
}

#[test]
fn test_try_add_order_reports_each_reject_reason() {
    let book = OrderBook::new();

    book.add_limit_order(1, 100, 5, Side::Sell, OrderType::GoodTillCancel);

    assert_eq!(
        book.try_add_order(Order::new(OrderType::GoodTillCancel, 1, Side::Sell, 101, 5)),
        Err(OrderBookError::DuplicateOrderId(1))
    );
    assert_eq!(
        book.try_add_order(Order::new(OrderType::Market, 2, Side::Sell, 0, 5)),
        Err(OrderBookError::EmptyOppositeSide { side: Side::Sell })
    );
    assert_eq!(
        book.try_add_order(Order::new(OrderType::FillAndKill, 3, Side::Buy, 99, 5)),
        Err(OrderBookError::NotCrossable {
            side: Side::Buy,
            price: 99
        })
    );
    assert_eq!(
        book.try_add_order(Order::new(OrderType::FillOrKill, 4, Side::Buy, 100, 6)),
        Err(OrderBookError::CannotFullyFill {
            side: Side::Buy,
            price: 100,
            requested: 6
        })
    );

    // none of the rejects touched the book
    assert_eq!(book.order_count(), 1);
}

#[test]
fn test_reject_reasons_render_for_logging() {
    let reject = OrderBookError::CannotFullyFill {
        side: Side::Buy,
        price: 101,
        requested: 10,
    };
    assert_eq!(
        reject.to_string(),
        "fill-or-kill Buy order for 10 at 101 cannot be fully filled"
    );

    assert_eq!(
        OrderBookError::DuplicateOrderId(7).to_string(),
        "order id 7 is already registered"
    );
}

#[test]
fn test_limit_order_helper_matches_explicit_construction() {
    let book = OrderBook::new();

    book.add_limit_order(1, 100, 10, Side::Buy, OrderType::GoodTillCancel);
    let order = book.get_order(1).expect("order should rest");

    assert_eq!(order.id(), 1);
    assert_eq!(order.price(), 100);
    assert_eq!(order.initial_quantity(), 10);
    assert_eq!(order.side(), Side::Buy);
    assert_eq!(order.order_type(), OrderType::GoodTillCancel);
}

#[test]
fn test_market_order_sweeps_every_level() {
    let book = OrderBook::new();

    for (id, price) in [(1u64, 100), (2, 101), (3, 102)] {
        book.add_limit_order(id, price, 5, Side::Sell, OrderType::GoodTillCancel);
    }

    let trades = book.submit_market_order(4, 15, Side::Buy);

    assert_eq!(trades.len(), 3);
    assert_eq!(book.order_count(), 0);
    let total: u32 = trades.iter().map(|trade| trade.quantity()).sum();
    assert_eq!(total, 15);
}

#[test]
fn test_market_order_with_partial_liquidity_rests_as_limit() {
    let book = OrderBook::new();

    book.add_limit_order(1, 100, 5, Side::Sell, OrderType::GoodTillCancel);

    let trades = book.submit_market_order(2, 8, Side::Buy);

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].quantity(), 5);

    // the remainder rests as GoodTillCancel at the rewritten price
    let rest = book.get_order(2).expect("market remainder should rest");
    assert_eq!(rest.order_type(), OrderType::GoodTillCancel);
    assert_eq!(rest.price(), 100);
    assert_eq!(rest.remaining_quantity(), 3);
}
