//! coindeck — terminal crypto market dashboard.
//!
//! Layout:
//! 1. Card grid — one card per watched coin: price, 24h change, sparkline
//! 2. Detail panel — full seven-day chart and stats for the selected coin
//! 3. Status bar — key hints, feed source, last update time
//!
//! Market data is fetched on a background thread and folded into the board
//! on the main thread; a failed refresh leaves the previous data on screen.

mod app;
mod input;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use coindeck_core::feed::{CoinGeckoProvider, QuoteProvider, SampleProvider};
use coindeck_core::watchlist::Watchlist;

use crate::app::AppState;
use crate::worker::WorkerCommand;

#[derive(Parser, Debug)]
#[command(name = "coindeck", version, about = "Terminal crypto market dashboard")]
struct Cli {
    /// Quote currency code, e.g. usd or eur.
    #[arg(long, default_value = "usd")]
    currency: String,

    /// Comma-separated coin ids, overriding any watchlist file.
    #[arg(long)]
    ids: Option<String>,

    /// Path to a watchlist TOML file.
    #[arg(long)]
    watchlist: Option<PathBuf>,

    /// Seconds between automatic refreshes.
    #[arg(long, default_value_t = 60)]
    interval: u64,

    /// Use the offline sample feed instead of the live API.
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    if cli.interval < 5 {
        bail!("refresh interval must be at least 5 seconds");
    }

    let watchlist = resolve_watchlist(&cli)?;
    let provider: Arc<dyn QuoteProvider> = if cli.demo {
        Arc::new(SampleProvider::default())
    } else {
        Arc::new(CoinGeckoProvider::new())
    };

    log::info!(
        "starting: {} coins via {}, refresh every {}s",
        watchlist.len(),
        provider.name(),
        cli.interval
    );

    // Leave raw mode before the panic message prints, or it lands on a
    // garbled screen.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    let worker_handle = worker::spawn_worker(
        provider.clone(),
        watchlist.ids.clone(),
        cli.currency.clone(),
        cmd_rx,
        resp_tx,
    );

    let mut app = AppState::new(
        cmd_tx.clone(),
        resp_rx,
        Duration::from_secs(cli.interval),
        cli.currency.clone(),
        provider.name().to_string(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Stop scheduling; a still-running fetch finishes on the worker and its
    // response is dropped unread.
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            app.handle_response(resp);
        }

        // 3. Kick off a refresh when the interval has elapsed
        app.maybe_request_refresh(Instant::now());

        // 4. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Pick the coin set: --ids beats an explicit --watchlist file, which beats
/// the default config location, which beats the built-in list.
fn resolve_watchlist(cli: &Cli) -> Result<Watchlist> {
    if let Some(ids) = &cli.ids {
        return Watchlist::from_csv_arg(ids).map_err(|e| anyhow::anyhow!(e));
    }

    if let Some(path) = &cli.watchlist {
        return Watchlist::from_file(path).map_err(|e| anyhow::anyhow!(e));
    }

    let default_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("coindeck")
        .join("watchlist.toml");

    if default_path.exists() {
        match Watchlist::from_file(&default_path) {
            Ok(list) => return Ok(list),
            Err(e) => log::warn!("ignoring {}: {e}", default_path.display()),
        }
    }

    Ok(Watchlist::default())
}

/// Route log output to a file: stderr would scribble over the raw-mode
/// terminal. Falls back to the default stderr target if the file cannot
/// be created.
fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(dir) = dirs::data_local_dir() {
        let dir = dir.join("coindeck");
        if std::fs::create_dir_all(&dir).is_ok() {
            if let Ok(file) = std::fs::File::create(dir.join("coindeck.log")) {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }
    }

    let _ = builder.try_init();
}
