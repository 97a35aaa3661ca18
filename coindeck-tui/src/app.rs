//! Application state. Owned by the main thread; the worker never sees it.
//!
//! Owns the market board, card selection, and the refresh schedule. The
//! worker thread communicates via channels; at most one refresh is ever
//! outstanding, enforced here by `refresh_in_flight`.

use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use coindeck_core::board::Board;
use coindeck_core::quote::{CoinQuote, PriceSeries};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Overlay drawn on top of the card grid, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    // Market data
    pub board: Board,
    pub selected: usize,

    // Navigation
    pub overlay: Overlay,
    pub running: bool,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Refresh schedule
    pub refresh_in_flight: bool,
    pub last_refresh_request: Option<Instant>,
    pub refresh_interval: Duration,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub currency: String,
    pub provider_name: String,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        refresh_interval: Duration,
        currency: String,
        provider_name: String,
    ) -> Self {
        Self {
            board: Board::new(),
            selected: 0,
            overlay: Overlay::None,
            running: true,
            worker_tx,
            worker_rx,
            refresh_in_flight: false,
            last_refresh_request: None,
            refresh_interval,
            status_message: None,
            currency,
            provider_name,
        }
    }

    /// Request a refresh when the interval has elapsed. Called every event
    /// loop tick; the first tick always fires since nothing was requested
    /// yet.
    pub fn maybe_request_refresh(&mut self, now: Instant) {
        let due = self
            .last_refresh_request
            .map_or(true, |at| now.duration_since(at) >= self.refresh_interval);
        if due && !self.refresh_in_flight {
            self.send_refresh(now);
        }
    }

    /// Manual refresh (the `r` key). Declined while one is outstanding so
    /// snapshots keep arriving in request order.
    pub fn request_refresh(&mut self, now: Instant) {
        if self.refresh_in_flight {
            self.set_status("refresh already in progress");
            return;
        }
        self.send_refresh(now);
        self.set_status(format!("refreshing via {}", self.provider_name));
    }

    fn send_refresh(&mut self, now: Instant) {
        if self.worker_tx.send(WorkerCommand::Refresh).is_err() {
            log::warn!("feed worker is gone, cannot refresh");
            self.set_warning("feed stopped, data is frozen");
            return;
        }
        self.refresh_in_flight = true;
        self.last_refresh_request = Some(now);
    }

    /// Fold a worker response into the board.
    pub fn handle_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::RefreshDone { outcome } => {
                self.refresh_in_flight = false;
                self.board.apply(outcome);
                self.clamp_selection();
                self.status_message = None;
            }
        }
    }

    pub fn select_next(&mut self) {
        let len = self.board.quotes().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.board.quotes().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_index(&mut self, index: usize) {
        if index < self.board.quotes().len() {
            self.selected = index;
        }
    }

    /// Quote under the cursor, if the board has data.
    pub fn selected_quote(&self) -> Option<&CoinQuote> {
        self.board.quotes().get(self.selected)
    }

    /// Series for the quote under the cursor.
    pub fn selected_series(&self) -> Option<&PriceSeries> {
        self.selected_quote()
            .and_then(|q| self.board.series_for(&q.id))
    }

    /// A fresh snapshot can shrink the quote list under the cursor.
    fn clamp_selection(&mut self) {
        let len = self.board.quotes().len();
        if len > 0 && self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
