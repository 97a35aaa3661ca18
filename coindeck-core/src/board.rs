//! Dashboard state container.
//!
//! The [`Board`] owns what the screen shows: the latest quotes, their
//! sparkline series, and the refresh bookkeeping. There is exactly one way
//! to change market data on it, [`Board::apply`], which swaps in a whole
//! snapshot or, on a failed refresh, leaves the previous one standing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::feed::FeedError;
use crate::quote::{CoinQuote, MarketSnapshot, PriceSeries};

/// Refresh bookkeeping shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshState {
    /// Completion time of the last refresh that produced data. `None`
    /// until the first snapshot lands.
    pub last_updated: Option<DateTime<Utc>>,
    /// True only while the first fetch is outstanding. Later refreshes
    /// run silently behind the existing data.
    pub loading: bool,
}

/// Market state as the UI sees it.
///
/// Fields are private so every mutation funnels through [`Board::apply`];
/// a snapshot never half-lands.
#[derive(Debug, Clone)]
pub struct Board {
    quotes: Vec<CoinQuote>,
    series: BTreeMap<String, PriceSeries>,
    refresh: RefreshState,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board in its initial loading state.
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            series: BTreeMap::new(),
            refresh: RefreshState {
                last_updated: None,
                loading: true,
            },
        }
    }

    /// Fold a refresh outcome into the board.
    ///
    /// On success the new snapshot replaces quotes and series wholesale.
    /// On failure the error is logged and the previous data stays on
    /// screen. Either way the initial loading flag clears: it marks the
    /// first *attempt*, not the first success.
    pub fn apply(&mut self, outcome: Result<MarketSnapshot, FeedError>) {
        match outcome {
            Ok(snapshot) => {
                log::debug!(
                    "applied snapshot: {} quotes, {} series",
                    snapshot.quotes.len(),
                    snapshot.series.len()
                );
                self.quotes = snapshot.quotes;
                self.series = snapshot.series;
                self.refresh.last_updated = Some(snapshot.fetched_at);
            }
            Err(err) => {
                log::warn!("refresh failed, keeping previous snapshot: {err}");
            }
        }
        self.refresh.loading = false;
    }

    pub fn quotes(&self) -> &[CoinQuote] {
        &self.quotes
    }

    /// Sparkline series for a coin, if the last snapshot carried one.
    pub fn series_for(&self, coin_id: &str) -> Option<&PriceSeries> {
        self.series.get(coin_id)
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.refresh.last_updated
    }

    pub fn is_loading(&self) -> bool {
        self.refresh.loading
    }

    /// True before any snapshot has landed.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
