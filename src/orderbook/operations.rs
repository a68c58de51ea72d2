//! Convenience constructors over [`OrderBook::add_order`].

use super::book::OrderBook;
use super::order::{Order, OrderId, OrderType, Price, Quantity, Side, Trades};
use tracing::trace;

impl OrderBook {
    /// Build and submit a limit order of the given type.
    pub fn add_limit_order(
        &self,
        id: OrderId,
        price: Price,
        quantity: Quantity,
        side: Side,
        order_type: OrderType,
    ) -> Trades {
        trace!(
            "adding limit order {} {} {} {} {}",
            id,
            price,
            quantity,
            side,
            order_type
        );
        self.add_order(Order::new(order_type, id, side, price, quantity))
    }

    /// Build and submit a market order.
    ///
    /// The price carried by the order is a placeholder; admission rewrites
    /// it against the deepest opposite level.
    pub fn submit_market_order(&self, id: OrderId, quantity: Quantity, side: Side) -> Trades {
        trace!("submitting market order {} {} {}", id, quantity, side);
        self.add_order(Order::new(OrderType::Market, id, side, 0, quantity))
    }
}
