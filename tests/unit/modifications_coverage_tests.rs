//! End-to-end coverage of order modification through the public API.

use matchbook::{OrderBook, OrderModify, OrderType, Side};

#[test]
fn test_modify_reprices_without_trading() {
    let book = OrderBook::new();
    book.add_limit_order(1, 100, 10, Side::Buy, OrderType::GoodTillCancel);

    let trades = book.modify_order(OrderModify::new(1, Side::Buy, 95, 12));

    assert!(trades.is_empty());
    let order = book.get_order(1).expect("order should rest at its new price");
    assert_eq!(order.price(), 95);
    assert_eq!(order.initial_quantity(), 12);
}

#[test]
fn test_modify_into_the_spread_trades_immediately() {
    let book = OrderBook::new();
    book.add_limit_order(1, 95, 10, Side::Buy, OrderType::GoodTillCancel);
    book.add_limit_order(2, 100, 10, Side::Sell, OrderType::GoodTillCancel);

    let trades = book.modify_order(OrderModify::new(1, Side::Buy, 100, 10));

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].quantity(), 10);
    assert!(book.is_empty());
}

#[test]
fn test_modify_unknown_id_leaves_the_book_alone() {
    let book = OrderBook::new();
    book.add_limit_order(1, 100, 10, Side::Buy, OrderType::GoodTillCancel);

    let trades = book.modify_order(OrderModify::new(2, Side::Buy, 100, 10));

    assert!(trades.is_empty());
    assert_eq!(book.order_count(), 1);
}

#[test]
fn test_modify_forfeits_queue_priority() {
    let book = OrderBook::new();
    book.add_limit_order(1, 100, 5, Side::Buy, OrderType::GoodTillCancel);
    book.add_limit_order(2, 100, 5, Side::Buy, OrderType::GoodTillCancel);

    book.modify_order(OrderModify::new(1, Side::Buy, 100, 5));

    let trades = book.add_limit_order(3, 100, 5, Side::Sell, OrderType::GoodTillCancel);
    assert_eq!(trades[0].bid_leg().order_id, 2);
}

#[test]
fn test_modify_twice_applies_the_last_update() {
    let book = OrderBook::new();
    book.add_limit_order(1, 100, 10, Side::Buy, OrderType::GoodTillCancel);

    book.modify_order(OrderModify::new(1, Side::Buy, 99, 8));
    book.modify_order(OrderModify::new(1, Side::Sell, 104, 6));

    let order = book.get_order(1).expect("order should still rest");
    assert_eq!(order.side(), Side::Sell);
    assert_eq!(order.price(), 104);
    assert_eq!(order.initial_quantity(), 6);
    assert_eq!(book.order_count(), 1);
}
