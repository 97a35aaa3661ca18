//! Quote providers and feed error types.
//!
//! The QuoteProvider trait abstracts over market data sources (CoinGecko,
//! the offline sample feed) so the dashboard can swap implementations and
//! mock for tests.

use thiserror::Error;

use crate::quote::MarketSnapshot;

mod coingecko;
mod sample;

pub use coingecko::CoinGeckoProvider;
pub use sample::SampleProvider;

/// What went wrong during a refresh.
///
/// Failures are logged and the dashboard keeps showing its previous
/// snapshot, so these only need to carry enough detail for the log line.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with HTTP {status}")]
    Status { status: u16 },

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Trait for market quote sources.
///
/// A fetch is one round trip: it returns the current quotes for the
/// requested coin ids plus their recent price series, or an error the
/// caller is expected to log and shrug off.
pub trait QuoteProvider: Send + Sync {
    /// Short provider name, shown in log lines and table footers.
    fn name(&self) -> &str;

    /// Fetch a full snapshot for the given coin ids, priced in `currency`.
    fn fetch(&self, ids: &[String], currency: &str) -> Result<MarketSnapshot, FeedError>;
}
