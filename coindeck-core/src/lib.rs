//! coindeck core — market data feed, board state, and sparkline geometry.
//!
//! This crate contains everything the dashboard binaries share:
//! - Quote types ([`quote::CoinQuote`], [`quote::PriceSeries`]) delivered
//!   together as atomic [`quote::MarketSnapshot`]s
//! - [`board::Board`] — the view-owned state container with a single
//!   replace-wholesale refresh operation
//! - [`feed`] — the `QuoteProvider` trait plus the CoinGecko HTTP provider
//!   and a deterministic sample provider for demo mode and tests
//! - [`spark`] — pure series → polyline normalization for sparkline drawing
//! - [`watchlist::Watchlist`] — the tracked coin set, TOML-configurable
//! - [`format`] — shared price/percent formatting for the TUI and CLI

pub mod board;
pub mod feed;
pub mod format;
pub mod quote;
pub mod spark;
pub mod watchlist;
