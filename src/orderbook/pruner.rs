//! Background pruning of good-for-day orders at session close.

use super::book::{BookState, Shared};
use super::order::{OrderId, OrderType};
use crate::utils::time::until_next_session_close;
use chrono::Local;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing::info;

/// Guard band past the close so the wake never races the boundary.
const CLOSE_GUARD: Duration = Duration::from_millis(100);

/// Worker loop: wait out each session on the book lock's condvar, then
/// cancel every resting day order.
///
/// Exits when the shutdown flag is set or the condvar is signalled; the
/// wait and the flag check happen under the book lock, so a shutdown
/// raised by [`OrderBook`](super::book::OrderBook) teardown cannot slip
/// between them.
pub(super) fn run(shared: &Shared) {
    loop {
        let timeout = until_next_session_close(Local::now()) + CLOSE_GUARD;

        {
            let mut state = shared.state.lock();
            if shared.shutdown.load(Ordering::Acquire) {
                return;
            }
            let wait = shared.shutdown_signal.wait_for(&mut state, timeout);
            if shared.shutdown.load(Ordering::Acquire) || !wait.timed_out() {
                return;
            }
        }

        prune_pass(shared);
    }
}

/// One prune: collect the day orders under the lock, release it, then
/// cancel the batch under a single reacquisition. Two phases keep each
/// critical section short when the day-order set is small.
pub(super) fn prune_pass(shared: &Shared) {
    let day_orders: Vec<OrderId> = {
        let state = shared.state.lock();
        state.day_order_ids()
    };

    if day_orders.is_empty() {
        return;
    }

    info!(
        count = day_orders.len(),
        "cancelling good-for-day orders at session close"
    );

    let mut state = shared.state.lock();
    for &order_id in &day_orders {
        state.cancel_internal(order_id);
    }
}

impl BookState {
    fn day_order_ids(&self) -> Vec<OrderId> {
        self.orders
            .values()
            .filter_map(|&handle| {
                let order = &self.arena[handle].order;
                (order.order_type() == OrderType::GoodForDay).then_some(order.id())
            })
            .collect()
    }
}
