//! # Single-Symbol Limit Order Book & Matching Engine
//!
//! A limit order book with continuous matching, written for correctness
//! first: one exclusive lock serializes every operation over the book state,
//! and the matcher drains crosses as part of each submission.
//!
//! ## Key Features
//!
//! - **Price-time priority**: two price-sorted ladders with strict FIFO
//!   queues at each level. Earlier orders at a price always fill first.
//!
//! - **Order types**: GoodTillCancel, GoodForDay, Market (rewritten to a
//!   resting limit at the deepest opposite price), FillAndKill
//!   (immediate-or-cancel) and FillOrKill.
//!
//! - **O(1) cancellation**: a registry maps order ids to stable arena
//!   handles, so cancels never scan a queue.
//!
//! - **Fill-or-kill feasibility in bounded time**: a per-price aggregate
//!   index answers "can this fill completely?" before the order touches the
//!   book, independent of queue depth.
//!
//! - **Session-close pruning**: a background worker cancels all GoodForDay
//!   orders at 16:00 local time and shuts down cleanly with the book.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: every public operation is atomic with respect to all
//!    others; no caller ever observes a crossed book or a half-applied
//!    update.
//! 2. **Predictability**: matching, cancellation and feasibility checks are
//!    bounded operations with no hidden allocation cliffs.
//! 3. **Faithful trade records**: each trade preserves the resting price of
//!    both contributing orders, even when they differ across the spread.
//!
//! ## Status
//!
//! This crate is a matching core only: no wire protocol, persistence, risk
//! checks or market-data fan-out. Consumers drive it with orders and consume
//! trades and snapshots.

mod orderbook;

mod utils;

pub use orderbook::{
    LevelInfo, Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId, OrderModify,
    OrderType, Price, Quantity, Side, Trade, TradeLeg, Trades,
};
pub use utils::current_time_millis;
