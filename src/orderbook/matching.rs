//! The crossing loop: drains executable crosses and emits trades.

use super::book::BookState;
use super::order::{OrderId, OrderType, Side, Trade, TradeLeg, Trades};
use tracing::trace;

impl BookState {
    /// Match the top of book while the best bid crosses the best ask.
    ///
    /// Heads of the two best queues trade at the minimum of their remaining
    /// quantities; fully filled heads are popped and unregistered; a price
    /// level is removed once its queue drains. After the loop, a
    /// fill-and-kill remainder left at either top is cancelled.
    pub(super) fn match_orders(&mut self) -> Trades {
        let mut trades = Trades::with_capacity(self.orders.len());

        loop {
            let (Some(&bid_price), Some(&ask_price)) =
                (self.bids.keys().next_back(), self.asks.keys().next())
            else {
                break;
            };
            if bid_price < ask_price {
                break;
            }

            loop {
                let (Some(bid_handle), Some(ask_handle)) = (
                    self.bids.get(&bid_price).and_then(|level| level.head),
                    self.asks.get(&ask_price).and_then(|level| level.head),
                ) else {
                    break;
                };

                let quantity = {
                    let bid = &self.arena[bid_handle].order;
                    let ask = &self.arena[ask_handle].order;
                    bid.remaining_quantity().min(ask.remaining_quantity())
                };

                self.arena[bid_handle].order.fill(quantity);
                self.arena[ask_handle].order.fill(quantity);

                let (bid_id, bid_limit, bid_filled) = {
                    let order = &self.arena[bid_handle].order;
                    (order.id(), order.price(), order.is_filled())
                };
                let (ask_id, ask_limit, ask_filled) = {
                    let order = &self.arena[ask_handle].order;
                    (order.id(), order.price(), order.is_filled())
                };

                trades.push(Trade::new(
                    TradeLeg {
                        order_id: bid_id,
                        price: bid_limit,
                        quantity,
                    },
                    TradeLeg {
                        order_id: ask_id,
                        price: ask_limit,
                        quantity,
                    },
                ));
                trace!(
                    bid = bid_id,
                    ask = ask_id,
                    bid_price = bid_limit,
                    ask_price = ask_limit,
                    quantity,
                    "orders matched"
                );

                self.on_order_matched(bid_limit, quantity, bid_filled);
                self.on_order_matched(ask_limit, quantity, ask_filled);

                if bid_filled {
                    self.remove_filled(Side::Buy, bid_handle, bid_id);
                }
                if ask_filled {
                    self.remove_filled(Side::Sell, ask_handle, ask_id);
                }
            }

            if self
                .bids
                .get(&bid_price)
                .is_some_and(|level| level.is_empty())
            {
                self.bids.remove(&bid_price);
            }
            if self
                .asks
                .get(&ask_price)
                .is_some_and(|level| level.is_empty())
            {
                self.asks.remove(&ask_price);
            }
        }

        // A fill-and-kill remainder rests at the top it partially filled
        // from; it must not survive its own match cycle.
        if let Some(order_id) = self.resting_fill_and_kill(Side::Buy) {
            self.cancel_internal(order_id);
        }
        if let Some(order_id) = self.resting_fill_and_kill(Side::Sell) {
            self.cancel_internal(order_id);
        }

        trades
    }

    fn resting_fill_and_kill(&self, side: Side) -> Option<OrderId> {
        let head = self.best_head(side)?;
        let order = &self.arena[head].order;
        (order.order_type() == OrderType::FillAndKill).then_some(order.id())
    }
}
