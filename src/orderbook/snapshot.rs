//! Order book snapshot for market data consumers.

use super::order::{Price, Quantity};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One aggregated price level: the price and the sum of remaining
/// quantities resting at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub price: Price,
    pub quantity: Quantity,
}

/// A point-in-time aggregate view of both sides of the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// When the snapshot was taken (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid levels, best (highest) price first
    pub bids: Vec<LevelInfo>,

    /// Ask levels, best (lowest) price first
    pub asks: Vec<LevelInfo>,
}

impl OrderBookSnapshot {
    /// Best bid price and aggregate quantity.
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        let best = self.bids.first().map(|level| (level.price, level.quantity));
        trace!("best_bid: {:?}", best);
        best
    }

    /// Best ask price and aggregate quantity.
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        let best = self.asks.first().map(|level| (level.price, level.quantity));
        trace!("best_ask: {:?}", best);
        best
    }

    /// Midpoint of the best bid and best ask.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Best ask minus best bid.
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask - bid),
            _ => None,
        }
    }

    /// Total resting quantity across all bid levels.
    pub fn total_bid_volume(&self) -> u64 {
        self.bids.iter().map(|level| u64::from(level.quantity)).sum()
    }

    /// Total resting quantity across all ask levels.
    pub fn total_ask_volume(&self) -> u64 {
        self.asks.iter().map(|level| u64::from(level.quantity)).sum()
    }
}
