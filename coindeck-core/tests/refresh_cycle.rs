//! End-to-end refresh behavior: provider fetch folded into the board.
//!
//! Covers the policy that a failed refresh never disturbs data already on
//! screen, while a successful one replaces it wholesale.

use coindeck_core::board::Board;
use coindeck_core::feed::{FeedError, QuoteProvider, SampleProvider};
use coindeck_core::quote::MarketSnapshot;
use coindeck_core::watchlist::Watchlist;

/// Provider that fails every fetch, for exercising the error path.
struct BrokenProvider;

impl QuoteProvider for BrokenProvider {
    fn name(&self) -> &str {
        "broken"
    }

    fn fetch(&self, _ids: &[String], _currency: &str) -> Result<MarketSnapshot, FeedError> {
        Err(FeedError::Status { status: 429 })
    }
}

fn refresh(board: &mut Board, provider: &dyn QuoteProvider, ids: &[String]) {
    board.apply(provider.fetch(ids, "usd"));
}

#[test]
fn successful_refresh_populates_the_board() {
    let ids = Watchlist::default().ids;
    let provider = SampleProvider::new(7);
    let mut board = Board::new();

    assert!(board.is_loading());
    refresh(&mut board, &provider, &ids);

    assert!(!board.is_loading());
    assert_eq!(board.quotes().len(), 4);
    assert!(board.last_updated().is_some());
    for id in &ids {
        assert!(board.series_for(id).is_some(), "missing series for {id}");
    }
}

#[test]
fn repeated_refresh_replaces_wholesale() {
    let ids = Watchlist::default().ids;
    let mut board = Board::new();

    refresh(&mut board, &SampleProvider::new(7), &ids);
    let first_btc = board.quotes()[0].price;
    let first_stamp = board.last_updated();

    refresh(&mut board, &SampleProvider::new(41), &ids);
    let second_btc = board.quotes()[0].price;

    assert_ne!(first_btc, second_btc);
    assert_eq!(board.quotes().len(), 4);
    assert!(board.last_updated() >= first_stamp);
}

#[test]
fn failed_refresh_leaves_stale_data_standing() {
    let ids = Watchlist::default().ids;
    let mut board = Board::new();

    refresh(&mut board, &SampleProvider::new(7), &ids);
    let quotes_before = board.quotes().to_vec();
    let stamp_before = board.last_updated();

    refresh(&mut board, &BrokenProvider, &ids);

    assert_eq!(board.quotes(), quotes_before.as_slice());
    assert_eq!(board.last_updated(), stamp_before);
    assert!(!board.is_loading());
}

#[test]
fn failed_first_refresh_ends_loading_without_data() {
    let ids = Watchlist::default().ids;
    let mut board = Board::new();

    refresh(&mut board, &BrokenProvider, &ids);

    assert!(board.is_empty());
    assert!(!board.is_loading());
    assert_eq!(board.last_updated(), None);
}

#[test]
fn provider_swap_behind_the_trait() {
    let ids = Watchlist::default().ids;
    let providers: Vec<Box<dyn QuoteProvider>> =
        vec![Box::new(SampleProvider::new(7)), Box::new(BrokenProvider)];

    let mut board = Board::new();
    for provider in &providers {
        refresh(&mut board, provider.as_ref(), &ids);
    }

    // Sample data survives the broken provider's turn.
    assert_eq!(board.quotes().len(), 4);
}
