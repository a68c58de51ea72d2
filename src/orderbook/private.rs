use super::book::BookState;
use super::level::{LevelAction, OrderHandle, OrderNode};
use super::order::{Order, OrderId, Price, Quantity, Side};
use tracing::trace;

impl BookState {
    /// True iff `price` crosses the best price on the opposite side.
    pub(super) fn can_match(&self, side: Side, price: Price) -> bool {
        match side {
            Side::Buy => self
                .asks
                .keys()
                .next()
                .is_some_and(|&best_ask| price >= best_ask),
            Side::Sell => self
                .bids
                .keys()
                .next_back()
                .is_some_and(|&best_bid| price <= best_bid),
        }
    }

    /// True iff `quantity` can be fully filled against the opposite side at
    /// or better than `price`.
    ///
    /// Walks the opposite ladder's prices best-first and reads availability
    /// from the level index; while the book is uncrossed at rest the two
    /// sides never share a price, so each entry is purely opposite-side
    /// liquidity.
    pub(super) fn can_fully_fill(&self, side: Side, price: Price, quantity: Quantity) -> bool {
        if !self.can_match(side, price) {
            return false;
        }

        let mut needed = quantity;
        match side {
            Side::Buy => {
                for &level_price in self.asks.keys() {
                    if level_price > price {
                        break;
                    }
                    let available = self.level_quantity(level_price);
                    if needed <= available {
                        return true;
                    }
                    needed -= available;
                }
            }
            Side::Sell => {
                for &level_price in self.bids.keys().rev() {
                    if level_price < price {
                        break;
                    }
                    let available = self.level_quantity(level_price);
                    if needed <= available {
                        return true;
                    }
                    needed -= available;
                }
            }
        }

        false
    }

    fn level_quantity(&self, price: Price) -> Quantity {
        self.levels.get(&price).map_or(0, |data| data.quantity)
    }

    /// Append `order` to the tail of its price level, create the level if
    /// absent, register the id and update the level index.
    pub(super) fn insert(&mut self, order: Order) -> OrderHandle {
        let (id, side, price, initial) = (
            order.id(),
            order.side(),
            order.price(),
            order.initial_quantity(),
        );

        let handle = self.arena.insert(OrderNode::new(order));
        match side {
            Side::Buy => self
                .bids
                .entry(price)
                .or_default()
                .push_back(&mut self.arena, handle),
            Side::Sell => self
                .asks
                .entry(price)
                .or_default()
                .push_back(&mut self.arena, handle),
        }
        self.orders.insert(id, handle);
        self.on_order_added(price, initial);

        trace!(order_id = id, %side, price, quantity = initial, "order resting");
        handle
    }

    /// Remove a resting order by id. Unknown ids are silent no-ops.
    pub(super) fn cancel_internal(&mut self, order_id: OrderId) {
        let Some(handle) = self.orders.remove(&order_id) else {
            return;
        };

        let (price, side, remaining) = {
            let order = &self.arena[handle].order;
            (order.price(), order.side(), order.remaining_quantity())
        };

        match side {
            Side::Buy => {
                if let Some(level) = self.bids.get_mut(&price) {
                    level.unlink(&mut self.arena, handle);
                    if level.is_empty() {
                        self.bids.remove(&price);
                    }
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.get_mut(&price) {
                    level.unlink(&mut self.arena, handle);
                    if level.is_empty() {
                        self.asks.remove(&price);
                    }
                }
            }
        }

        self.arena.remove(handle);
        self.on_order_cancelled(price, remaining);

        trace!(order_id, %side, price, remaining, "order cancelled");
    }

    /// Unlink and free a head order the matcher just filled. The (possibly
    /// now empty) level entry stays; the match loop removes drained levels.
    pub(super) fn remove_filled(&mut self, side: Side, handle: OrderHandle, order_id: OrderId) {
        let price = self.arena[handle].order.price();
        match side {
            Side::Buy => {
                if let Some(level) = self.bids.get_mut(&price) {
                    level.unlink(&mut self.arena, handle);
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.get_mut(&price) {
                    level.unlink(&mut self.arena, handle);
                }
            }
        }
        self.orders.remove(&order_id);
        self.arena.remove(handle);
    }

    /// Handle of the order at the front of the best level on `side`.
    pub(super) fn best_head(&self, side: Side) -> Option<OrderHandle> {
        let level = match side {
            Side::Buy => self.bids.values().next_back(),
            Side::Sell => self.asks.values().next(),
        }?;
        level.head
    }

    fn on_order_added(&mut self, price: Price, initial_quantity: Quantity) {
        self.update_level_data(price, initial_quantity, LevelAction::Add);
    }

    fn on_order_cancelled(&mut self, price: Price, remaining_quantity: Quantity) {
        self.update_level_data(price, remaining_quantity, LevelAction::Remove);
    }

    pub(super) fn on_order_matched(
        &mut self,
        price: Price,
        quantity: Quantity,
        fully_filled: bool,
    ) {
        let action = if fully_filled {
            LevelAction::Remove
        } else {
            LevelAction::Match
        };
        self.update_level_data(price, quantity, action);
    }

    fn update_level_data(&mut self, price: Price, quantity: Quantity, action: LevelAction) {
        let data = self.levels.entry(price).or_default();

        match action {
            LevelAction::Add => {
                data.count += 1;
                data.quantity += quantity;
            }
            LevelAction::Remove => {
                data.count -= 1;
                data.quantity -= quantity;
            }
            LevelAction::Match => {
                data.quantity -= quantity;
            }
        }

        if data.count == 0 {
            self.levels.remove(&price);
        }
    }
}
