//! Public mutation API: order admission, cancellation and modification.

use super::book::{BookState, OrderBook};
use super::error::OrderBookError;
use super::order::{Order, OrderId, OrderModify, OrderType, Side, Trades};
use tracing::{debug, trace};

impl OrderBook {
    /// Submit an order and return the trades it produced.
    ///
    /// Admission rejects (duplicate id, market order against an empty book,
    /// an uncrossable fill-and-kill, an unfillable fill-or-kill) leave the
    /// book untouched and return an empty trade list; use
    /// [`try_add_order`](Self::try_add_order) for the typed reason.
    pub fn add_order(&self, order: Order) -> Trades {
        match self.try_add_order(order) {
            Ok(trades) => trades,
            Err(reason) => {
                debug!(order_id = order.id(), %reason, "order rejected");
                Trades::new()
            }
        }
    }

    /// Submit an order, reporting admission rejects as errors.
    pub fn try_add_order(&self, order: Order) -> Result<Trades, OrderBookError> {
        trace!(
            order_id = order.id(),
            order_type = %order.order_type(),
            side = %order.side(),
            price = order.price(),
            quantity = order.initial_quantity(),
            "adding order"
        );
        self.shared.state.lock().admit(order)
    }

    /// Cancel a resting order. Unknown ids are silent no-ops.
    pub fn cancel_order(&self, order_id: OrderId) {
        self.shared.state.lock().cancel_internal(order_id);
    }

    /// Cancel a batch of orders under a single lock acquisition.
    pub fn cancel_orders(&self, order_ids: &[OrderId]) {
        let mut state = self.shared.state.lock();
        for &order_id in order_ids {
            state.cancel_internal(order_id);
        }
    }

    /// Replace a resting order's side, price and quantity, keeping its id
    /// and original order type.
    ///
    /// Equivalent to a cancel followed by a fresh submission, so the order
    /// always re-enters its level's queue at the tail. Unknown ids return an
    /// empty trade list.
    pub fn modify_order(&self, update: OrderModify) -> Trades {
        let order_type = {
            let state = self.shared.state.lock();
            match state.orders.get(&update.order_id()) {
                Some(&handle) => state.arena[handle].order.order_type(),
                None => {
                    debug!(order_id = update.order_id(), "modify of unknown order");
                    return Trades::new();
                }
            }
        };

        self.cancel_order(update.order_id());
        self.add_order(update.to_order(order_type))
    }
}

impl BookState {
    /// Gate, insert and match one order. Pre-checks run in a fixed sequence
    /// so a duplicate id is never masked by a later gate.
    fn admit(&mut self, mut order: Order) -> Result<Trades, OrderBookError> {
        if self.orders.contains_key(&order.id()) {
            return Err(OrderBookError::DuplicateOrderId(order.id()));
        }

        // Market orders borrow the GoodTillCancel machinery: rewrite to the
        // deepest opposite price so the sweep can reach every level.
        if order.order_type() == OrderType::Market {
            let worst_opposite = match order.side() {
                Side::Buy => self.asks.keys().next_back().copied(),
                Side::Sell => self.bids.keys().next().copied(),
            };
            match worst_opposite {
                Some(price) => order.to_good_till_cancel(price),
                None => {
                    return Err(OrderBookError::EmptyOppositeSide { side: order.side() });
                }
            }
        }

        if order.order_type() == OrderType::FillAndKill
            && !self.can_match(order.side(), order.price())
        {
            return Err(OrderBookError::NotCrossable {
                side: order.side(),
                price: order.price(),
            });
        }

        if order.order_type() == OrderType::FillOrKill
            && !self.can_fully_fill(order.side(), order.price(), order.initial_quantity())
        {
            return Err(OrderBookError::CannotFullyFill {
                side: order.side(),
                price: order.price(),
                requested: order.initial_quantity(),
            });
        }

        self.insert(order);
        Ok(self.match_orders())
    }
}
