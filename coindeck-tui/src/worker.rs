//! Background feed thread — all network traffic runs here.
//!
//! Communication with the main thread is via `mpsc` channels. The worker
//! handles one command at a time, so two refreshes can never be on the
//! wire together; the main thread additionally declines to queue a new
//! one while a response is outstanding.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use coindeck_core::feed::{FeedError, QuoteProvider};
use coindeck_core::quote::MarketSnapshot;

/// Commands sent from the UI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Refresh,
    Shutdown,
}

/// Responses sent from the worker back to the UI.
#[derive(Debug)]
pub enum WorkerResponse {
    RefreshDone {
        outcome: Result<MarketSnapshot, FeedError>,
    },
}

/// Spawn the background feed thread.
///
/// The worker owns the provider and the request parameters; commands carry
/// no payload.
pub fn spawn_worker(
    provider: Arc<dyn QuoteProvider>,
    ids: Vec<String>,
    currency: String,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("coindeck-feed".into())
        .spawn(move || {
            worker_loop(provider, ids, currency, rx, tx);
        })
        .expect("failed to spawn feed thread")
}

fn worker_loop(
    provider: Arc<dyn QuoteProvider>,
    ids: Vec<String>,
    currency: String,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Refresh) => {
                log::debug!("refreshing {} coins via {}", ids.len(), provider.name());
                let outcome = provider.fetch(&ids, &currency);
                if tx.send(WorkerResponse::RefreshDone { outcome }).is_err() {
                    // UI side is gone; the snapshot is dropped unread.
                    break;
                }
            }
        }
    }
}
