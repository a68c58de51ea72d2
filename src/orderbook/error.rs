//! Order book error types.

use super::order::{OrderId, Price, Quantity, Side};
use thiserror::Error;

/// Reasons an order is refused admission to the book.
///
/// The primary mutation API reports these as an empty trade list (the hot
/// path stays branch-light); [`OrderBook::try_add_order`] surfaces the typed
/// reason, and rejects are logged either way.
///
/// [`OrderBook::try_add_order`]: super::book::OrderBook::try_add_order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderBookError {
    /// An order with this id is already resting in the book.
    #[error("order id {0} is already registered")]
    DuplicateOrderId(OrderId),

    /// A market order arrived with nothing on the opposite side.
    #[error("market {side} order has no opposite liquidity")]
    EmptyOppositeSide {
        /// Side of the rejected order
        side: Side,
    },

    /// A fill-and-kill order cannot cross the current best opposite price.
    #[error("fill-and-kill {side} order at {price} cannot cross")]
    NotCrossable {
        /// Side of the rejected order
        side: Side,
        /// Limit price of the rejected order
        price: Price,
    },

    /// A fill-or-kill order cannot be fully filled at or better than its
    /// limit price.
    #[error("fill-or-kill {side} order for {requested} at {price} cannot be fully filled")]
    CannotFullyFill {
        /// Side of the rejected order
        side: Side,
        /// Limit price of the rejected order
        price: Price,
        /// Quantity the order asked for
        requested: Quantity,
    },
}
