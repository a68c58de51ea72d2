//! Core order book: shared state, lifecycle and read accessors.

use super::level::{Level, LevelData, OrderHandle, OrderNode};
use super::order::{Order, OrderId, Price};
use super::pruner;
use super::snapshot::{LevelInfo, OrderBookSnapshot};
use crate::utils::current_time_millis;
use parking_lot::{Condvar, Mutex};
use slab::Slab;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::trace;

/// Mutable book state. Everything here is guarded by the single book lock;
/// the pieces share invariants and are only ever modified together.
#[derive(Default)]
pub(super) struct BookState {
    /// Arena of resting orders. The queues and the registry both refer to
    /// orders through its handles, so every view sees the same instance.
    pub(super) arena: Slab<OrderNode>,
    /// Bid ladder; iterate in reverse for best-first (highest price).
    pub(super) bids: BTreeMap<Price, Level>,
    /// Ask ladder; natural order is best-first (lowest price).
    pub(super) asks: BTreeMap<Price, Level>,
    /// Registry: order id to arena handle, for O(1) cancellation.
    pub(super) orders: HashMap<OrderId, OrderHandle>,
    /// Per-price aggregates consulted by fill-or-kill feasibility.
    pub(super) levels: HashMap<Price, LevelData>,
}

/// State shared between foreground callers and the pruner thread.
pub(super) struct Shared {
    pub(super) state: Mutex<BookState>,
    pub(super) shutdown: AtomicBool,
    pub(super) shutdown_signal: Condvar,
}

/// A single-symbol limit order book with continuous price-time priority
/// matching.
///
/// All public operations serialize on one exclusive lock; a background
/// worker cancels GoodForDay orders at each session close. Dropping the book
/// signals and joins that worker.
pub struct OrderBook {
    pub(super) shared: Arc<Shared>,
    pruner: Option<JoinHandle<()>>,
}

impl OrderBook {
    /// Create an empty book and start its day-order pruner.
    pub fn new() -> Self {
        let shared = Arc::new(Shared {
            state: Mutex::new(BookState::default()),
            shutdown: AtomicBool::new(false),
            shutdown_signal: Condvar::new(),
        });

        let worker = {
            let shared = Arc::clone(&shared);
            thread::Builder::new()
                .name("gfd-pruner".into())
                .spawn(move || pruner::run(&shared))
                .expect("failed to spawn the day-order pruner thread")
        };

        Self {
            shared,
            pruner: Some(worker),
        }
    }

    /// Highest resting buy price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.shared.state.lock().bids.keys().next_back().copied()
    }

    /// Lowest resting sell price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.shared.state.lock().asks.keys().next().copied()
    }

    /// Best ask minus best bid. `None` unless both sides are populated.
    pub fn spread(&self) -> Option<Price> {
        let state = self.shared.state.lock();
        match (state.bids.keys().next_back(), state.asks.keys().next()) {
            (Some(&bid), Some(&ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Midpoint of the best bid and best ask.
    pub fn mid_price(&self) -> Option<f64> {
        let state = self.shared.state.lock();
        match (state.bids.keys().next_back(), state.asks.keys().next()) {
            (Some(&bid), Some(&ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Number of resting orders across both sides.
    pub fn order_count(&self) -> usize {
        self.shared.state.lock().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().orders.is_empty()
    }

    /// Copy of a resting order's current state, if it is in the book.
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        let state = self.shared.state.lock();
        state
            .orders
            .get(&order_id)
            .map(|&handle| state.arena[handle].order)
    }

    /// Aggregate both ladders into per-level `(price, quantity)` lists,
    /// bids in descending and asks in ascending price order.
    pub fn snapshot(&self) -> OrderBookSnapshot {
        let state = self.shared.state.lock();

        let bids = state
            .bids
            .iter()
            .rev()
            .map(|(&price, level)| LevelInfo {
                price,
                quantity: level.total_quantity(&state.arena),
            })
            .collect();

        let asks = state
            .asks
            .iter()
            .map(|(&price, level)| LevelInfo {
                price,
                quantity: level.total_quantity(&state.arena),
            })
            .collect();

        trace!("created order book snapshot");

        OrderBookSnapshot {
            timestamp: current_time_millis(),
            bids,
            asks,
        }
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OrderBook {
    fn drop(&mut self) {
        {
            // Flip the flag under the book lock: the worker either observes
            // it before it waits, or it is already parked on the condvar and
            // the notification below reaches it. Signalling without the lock
            // could slip between the worker's flag check and its wait.
            let _state = self.shared.state.lock();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.shutdown_signal.notify_all();

        if let Some(worker) = self.pruner.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
impl BookState {
    /// Panic unless the full set of book invariants holds.
    pub(super) fn assert_invariants(&self) {
        use super::order::Side;

        let mut total_queued = 0usize;
        let mut expected_levels: HashMap<Price, LevelData> = HashMap::new();
        let mut seen: HashMap<OrderId, usize> = HashMap::new();

        for (side, ladder) in [(Side::Buy, &self.bids), (Side::Sell, &self.asks)] {
            for (&price, level) in ladder {
                assert!(
                    !level.is_empty(),
                    "empty {side} level at {price} left in the ladder"
                );
                for handle in level.iter_fifo(&self.arena) {
                    let order = &self.arena[handle].order;
                    assert_eq!(order.price(), price, "order queued at a foreign level");
                    assert_eq!(order.side(), side, "order queued on the wrong side");
                    assert!(
                        order.remaining_quantity() > 0,
                        "fully filled order {} left resting",
                        order.id()
                    );
                    assert_eq!(
                        self.orders.get(&order.id()),
                        Some(&handle),
                        "registry disagrees with the queue about order {}",
                        order.id()
                    );
                    *seen.entry(order.id()).or_default() += 1;
                    total_queued += 1;

                    let data = expected_levels.entry(price).or_default();
                    data.count += 1;
                    data.quantity += order.remaining_quantity();
                }
            }
        }

        for (id, occurrences) in &seen {
            assert_eq!(*occurrences, 1, "order {id} appears {occurrences} times");
        }
        assert_eq!(
            self.orders.len(),
            total_queued,
            "registry size does not match the total queue length"
        );
        assert_eq!(
            self.levels, expected_levels,
            "level index out of sync with the ladders"
        );

        if let (Some(&bid), Some(&ask)) = (self.bids.keys().next_back(), self.asks.keys().next()) {
            assert!(bid < ask, "book crossed at rest: {bid} >= {ask}");
        }
    }
}
