//! Value model: identifiers, sides, order types, orders and trades.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price in integer ticks. Signed so spreads and deltas stay in-domain.
pub type Price = i32;

/// Quantity in integer units.
pub type Quantity = u32;

/// Caller-assigned order identifier, unique over the lifetime of a book.
pub type OrderId = u64;

/// Which side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side this order matches against.
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

/// Execution semantics attached to an order at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Rests until explicitly cancelled.
    GoodTillCancel,
    /// Rests until explicitly cancelled or the session close prune.
    GoodForDay,
    /// Executes against available opposite liquidity; rewritten to
    /// GoodTillCancel at the deepest opposite price before insertion.
    Market,
    /// Immediate-or-cancel: executes what it can, remainder is cancelled.
    FillAndKill,
    /// Executes in full immediately or not at all.
    FillOrKill,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::GoodTillCancel => write!(f, "GTC"),
            OrderType::GoodForDay => write!(f, "GFD"),
            OrderType::Market => write!(f, "MKT"),
            OrderType::FillAndKill => write!(f, "FAK"),
            OrderType::FillOrKill => write!(f, "FOK"),
        }
    }
}

/// A single order. Created by the caller, inserted by admission, filled by
/// the matcher, removed on full fill, cancellation or the day prune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    order_type: OrderType,
    side: Side,
    price: Price,
    initial_quantity: Quantity,
    remaining_quantity: Quantity,
}

impl Order {
    /// Create a new order with its full quantity remaining.
    ///
    /// The price is ignored for `Market` orders until admission rewrites it.
    /// A zero initial quantity is a caller bug and aborts.
    pub fn new(
        order_type: OrderType,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        assert!(quantity > 0, "order quantity must be positive");
        Self {
            id,
            order_type,
            side,
            price,
            initial_quantity: quantity,
            remaining_quantity: quantity,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn initial_quantity(&self) -> Quantity {
        self.initial_quantity
    }

    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining_quantity
    }

    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity - self.remaining_quantity
    }

    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Consume `quantity` units of the remaining quantity.
    ///
    /// Overfilling an order breaks the book invariants and aborts.
    pub(crate) fn fill(&mut self, quantity: Quantity) {
        assert!(
            quantity <= self.remaining_quantity,
            "fill of {} exceeds remaining quantity {} on order {}",
            quantity,
            self.remaining_quantity,
            self.id
        );
        self.remaining_quantity -= quantity;
    }

    /// Rewrite a market order into a resting GoodTillCancel at `price`.
    pub(crate) fn to_good_till_cancel(&mut self, price: Price) {
        debug_assert_eq!(
            self.order_type,
            OrderType::Market,
            "only market orders are rewritten"
        );
        self.order_type = OrderType::GoodTillCancel;
        self.price = price;
    }
}

/// One side of an execution: the contributing order, the price it rested at
/// and the quantity taken from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLeg {
    pub order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

/// A single execution, pairing the bid-side and ask-side legs.
///
/// Each leg records its resting order's own limit price; when an aggressor
/// crosses the spread the two prices differ and both are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    bid: TradeLeg,
    ask: TradeLeg,
}

impl Trade {
    pub fn new(bid: TradeLeg, ask: TradeLeg) -> Self {
        debug_assert!(
            bid.quantity == ask.quantity && bid.quantity > 0,
            "trade legs must carry the same positive quantity"
        );
        Self { bid, ask }
    }

    pub fn bid_leg(&self) -> &TradeLeg {
        &self.bid
    }

    pub fn ask_leg(&self) -> &TradeLeg {
        &self.ask
    }

    /// Executed quantity; both legs carry the same value.
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }
}

/// Trades emitted by one match cycle, in execution order.
pub type Trades = Vec<Trade>;

/// Replacement attributes for an existing order.
///
/// A modification is a cancel of the original followed by a fresh submission
/// that reuses the original id and order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderModify {
    order_id: OrderId,
    side: Side,
    price: Price,
    quantity: Quantity,
}

impl OrderModify {
    pub fn new(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Build the replacement order, carrying over the original's type.
    pub(crate) fn to_order(self, order_type: OrderType) -> Order {
        Order::new(
            order_type,
            self.order_id,
            self.side,
            self.price,
            self.quantity,
        )
    }
}
