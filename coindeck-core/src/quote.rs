//! Quote and series types shared by the feed, the board, and the UIs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One coin's market row as of the latest refresh.
///
/// Numeric fields are quoted in the request currency. Fields the upstream
/// API omits (young listings without an ATH, for example) come through as
/// zero rather than poking `Option`s at every render site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinQuote {
    /// Stable API identifier, e.g. `"bitcoin"`.
    pub id: String,
    /// Lowercase ticker symbol as the API reports it, e.g. `"btc"`.
    pub symbol: String,
    /// Human-readable name, e.g. `"Bitcoin"`.
    pub name: String,
    /// Spot price in the request currency.
    pub price: f64,
    /// Percent change over the trailing 24 hours, e.g. `-2.35`.
    pub change_pct_24h: f64,
    /// Total market capitalization.
    pub market_cap: f64,
    /// Trading volume over the trailing 24 hours.
    pub volume_24h: f64,
    /// 24-hour high.
    pub high_24h: f64,
    /// 24-hour low.
    pub low_24h: f64,
    /// All-time high.
    pub ath: f64,
    /// All-time low.
    pub atl: f64,
}

impl CoinQuote {
    /// Uppercase ticker for display, e.g. `"BTC"`.
    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }
}

/// A coin's recent price history, oldest sample first.
///
/// The upstream sparkline covers seven days at roughly hourly resolution;
/// the series carries whatever the provider returned without resampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Which coin the samples belong to.
    pub coin_id: String,
    /// Price samples, chronological.
    pub samples: Vec<f64>,
}

impl PriceSeries {
    pub fn new(coin_id: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            coin_id: coin_id.into(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    /// Percent move from the first sample to the last, `None` when the
    /// series is too short or starts at zero.
    pub fn trend_pct(&self) -> Option<f64> {
        let first = *self.samples.first()?;
        let last = *self.samples.last()?;
        if self.samples.len() < 2 || first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

/// Everything one refresh produced, delivered as a unit.
///
/// Quotes keep the provider's ordering (market cap descending for the live
/// feed). Series are keyed by coin id; a coin may be present in `quotes`
/// but absent here when the upstream row carried no sparkline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub quotes: Vec<CoinQuote>,
    pub series: BTreeMap<String, PriceSeries>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    /// Quote for a given coin id, if present.
    pub fn quote(&self, coin_id: &str) -> Option<&CoinQuote> {
        self.quotes.iter().find(|q| q.id == coin_id)
    }
}
