//! CoinGecko market data provider.
//!
//! Fetches current quotes plus seven-day sparklines from the public
//! `/coins/markets` endpoint in a single request. The endpoint needs no
//! API key; the free tier rate-limits aggressively, which is why the
//! dashboard polls on a fixed interval instead of hammering it.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;

use super::{FeedError, QuoteProvider};
use crate::quote::{CoinQuote, MarketSnapshot, PriceSeries};

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// One row of the `/coins/markets` response.
///
/// Numeric fields are nullable upstream (delisted coins, missing ATH
/// data), so everything prices-shaped comes in as an `Option`.
#[derive(Debug, Deserialize)]
struct MarketRow {
    id: String,
    symbol: String,
    name: String,
    current_price: Option<f64>,
    market_cap: Option<f64>,
    total_volume: Option<f64>,
    high_24h: Option<f64>,
    low_24h: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    ath: Option<f64>,
    atl: Option<f64>,
    sparkline_in_7d: Option<SparklineRow>,
}

#[derive(Debug, Deserialize)]
struct SparklineRow {
    price: Vec<f64>,
}

/// CoinGecko `/coins/markets` provider.
pub struct CoinGeckoProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("coindeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Build the markets URL for a set of coin ids.
    ///
    /// Ordering is pinned to market cap descending and the sparkline flag
    /// is always on; the dashboard has no use for the unsorted variant.
    fn markets_url(&self, ids: &[String], currency: &str) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&ids={}\
             &order=market_cap_desc&sparkline=true\
             &price_change_percentage=24h",
            self.base_url,
            currency,
            ids.join(",")
        )
    }

    /// Assemble rows into a snapshot, preserving the response order.
    fn build_snapshot(rows: Vec<MarketRow>) -> MarketSnapshot {
        let mut quotes = Vec::with_capacity(rows.len());
        let mut series = BTreeMap::new();

        for row in rows {
            if let Some(spark) = row.sparkline_in_7d {
                if !spark.price.is_empty() {
                    series.insert(
                        row.id.clone(),
                        PriceSeries::new(row.id.clone(), spark.price),
                    );
                }
            }

            quotes.push(CoinQuote {
                id: row.id,
                symbol: row.symbol,
                name: row.name,
                price: row.current_price.unwrap_or(0.0),
                change_pct_24h: row.price_change_percentage_24h.unwrap_or(0.0),
                market_cap: row.market_cap.unwrap_or(0.0),
                volume_24h: row.total_volume.unwrap_or(0.0),
                high_24h: row.high_24h.unwrap_or(0.0),
                low_24h: row.low_24h.unwrap_or(0.0),
                ath: row.ath.unwrap_or(0.0),
                atl: row.atl.unwrap_or(0.0),
            });
        }

        MarketSnapshot {
            quotes,
            series,
            fetched_at: Utc::now(),
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "coingecko"
    }

    fn fetch(&self, ids: &[String], currency: &str) -> Result<MarketSnapshot, FeedError> {
        let url = self.markets_url(ids, currency);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let rows: Vec<MarketRow> = resp.json().map_err(|e| FeedError::Decode(e.to_string()))?;
        Ok(Self::build_snapshot(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from a real /coins/markets response.
    const MARKETS_FIXTURE: &str = r#"[
        {
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 64250.0,
            "market_cap": 1266000000000.0,
            "total_volume": 28400000000.0,
            "high_24h": 65100.0,
            "low_24h": 63400.0,
            "price_change_percentage_24h": -1.82,
            "ath": 73738.0,
            "atl": 67.81,
            "sparkline_in_7d": { "price": [63100.0, 63800.0, 64250.0] }
        },
        {
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "current_price": 3190.5,
            "market_cap": 383000000000.0,
            "total_volume": 14100000000.0,
            "high_24h": 3250.0,
            "low_24h": 3120.0,
            "price_change_percentage_24h": 2.14,
            "ath": 4878.26,
            "atl": 0.432979,
            "sparkline_in_7d": { "price": [3050.0, 3140.0, 3190.5] }
        },
        {
            "id": "solana",
            "symbol": "sol",
            "name": "Solana",
            "current_price": 148.9,
            "market_cap": 68900000000.0,
            "total_volume": 2600000000.0,
            "high_24h": 152.3,
            "low_24h": 146.1,
            "price_change_percentage_24h": 0.65,
            "ath": 259.96,
            "atl": 0.500801,
            "sparkline_in_7d": null
        },
        {
            "id": "dogecoin",
            "symbol": "doge",
            "name": "Dogecoin",
            "current_price": 0.1204,
            "market_cap": 17400000000.0,
            "total_volume": 820000000.0,
            "high_24h": null,
            "low_24h": null,
            "price_change_percentage_24h": null,
            "ath": 0.731578,
            "atl": 0.0000869,
            "sparkline_in_7d": { "price": [0.118, 0.121, 0.1204] }
        }
    ]"#;

    #[test]
    fn markets_url_pins_query_parameters() {
        let provider = CoinGeckoProvider::new();
        let ids = vec!["bitcoin".to_string(), "ethereum".to_string()];
        let url = provider.markets_url(&ids, "usd");
        assert_eq!(
            url,
            "https://api.coingecko.com/api/v3/coins/markets\
             ?vs_currency=usd&ids=bitcoin,ethereum\
             &order=market_cap_desc&sparkline=true\
             &price_change_percentage=24h"
        );
    }

    #[test]
    fn fixture_decodes_into_snapshot() {
        let rows: Vec<MarketRow> = serde_json::from_str(MARKETS_FIXTURE).unwrap();
        let snapshot = CoinGeckoProvider::build_snapshot(rows);

        assert_eq!(snapshot.quotes.len(), 4);
        assert_eq!(snapshot.quotes[0].id, "bitcoin");
        assert_eq!(snapshot.quotes[0].price, 64_250.0);
        assert_eq!(snapshot.quotes[1].ticker(), "ETH");
        assert_eq!(snapshot.quotes[3].id, "dogecoin");
    }

    #[test]
    fn missing_sparkline_omits_series() {
        let rows: Vec<MarketRow> = serde_json::from_str(MARKETS_FIXTURE).unwrap();
        let snapshot = CoinGeckoProvider::build_snapshot(rows);

        assert!(snapshot.series.contains_key("bitcoin"));
        assert!(snapshot.series.contains_key("dogecoin"));
        assert!(!snapshot.series.contains_key("solana"));
        assert_eq!(snapshot.series["bitcoin"].len(), 3);
    }

    #[test]
    fn null_numerics_become_zero() {
        let rows: Vec<MarketRow> = serde_json::from_str(MARKETS_FIXTURE).unwrap();
        let snapshot = CoinGeckoProvider::build_snapshot(rows);

        let doge = snapshot.quote("dogecoin").unwrap();
        assert_eq!(doge.high_24h, 0.0);
        assert_eq!(doge.low_24h, 0.0);
        assert_eq!(doge.change_pct_24h, 0.0);
        assert_eq!(doge.price, 0.1204);
    }
}
