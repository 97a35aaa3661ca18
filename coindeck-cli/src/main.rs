//! Coindeck CLI — one-shot market commands for scripts and quick checks.
//!
//! Commands:
//! - `quotes` — fetch the watchlist once and print a quote table (or JSON)
//! - `sparkline` — print a coin's seven-day history as a row of block glyphs

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};

use coindeck_core::feed::{CoinGeckoProvider, QuoteProvider, SampleProvider};
use coindeck_core::format;
use coindeck_core::quote::MarketSnapshot;
use coindeck_core::spark::path_points;
use coindeck_core::watchlist::Watchlist;

#[derive(Parser)]
#[command(
    name = "coindeck-cli",
    version,
    about = "Coindeck CLI — crypto quotes without the dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the watchlist once and print current quotes.
    Quotes {
        /// Quote currency, e.g. usd, eur.
        #[arg(long, default_value = "usd")]
        currency: String,

        /// Comma-separated coin ids, e.g. bitcoin,ethereum.
        #[arg(long)]
        ids: Option<String>,

        /// Path to a watchlist TOML file.
        #[arg(long)]
        watchlist: Option<PathBuf>,

        /// Use the deterministic sample feed instead of the network.
        #[arg(long, default_value_t = false)]
        demo: bool,

        /// Print the whole snapshot as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print a coin's seven-day price history as a block-glyph sparkline.
    Sparkline {
        /// Coin id, e.g. bitcoin.
        id: String,

        /// Maximum sparkline width in characters.
        #[arg(long, default_value_t = 60)]
        width: usize,

        /// Quote currency, e.g. usd, eur.
        #[arg(long, default_value = "usd")]
        currency: String,

        /// Use the deterministic sample feed instead of the network.
        #[arg(long, default_value_t = false)]
        demo: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Quotes {
            currency,
            ids,
            watchlist,
            demo,
            json,
        } => run_quotes(&currency, ids.as_deref(), watchlist.as_deref(), demo, json),
        Commands::Sparkline {
            id,
            width,
            currency,
            demo,
        } => run_sparkline(&id, width, &currency, demo),
    }
}

fn run_quotes(
    currency: &str,
    ids: Option<&str>,
    watchlist_path: Option<&Path>,
    demo: bool,
    json: bool,
) -> Result<()> {
    if ids.is_some() && watchlist_path.is_some() {
        bail!("--ids and --watchlist are mutually exclusive");
    }

    let watchlist = resolve_watchlist(ids, watchlist_path)?;
    let provider = build_provider(demo);
    let snapshot = provider.fetch(&watchlist.ids, currency)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if snapshot.quotes.is_empty() {
        bail!("no quotes returned for {:?}", watchlist.joined());
    }

    print_quote_table(&snapshot, currency, provider.name());
    Ok(())
}

fn run_sparkline(id: &str, width: usize, currency: &str, demo: bool) -> Result<()> {
    if width == 0 {
        bail!("--width must be at least 1");
    }

    let provider = build_provider(demo);
    let ids = vec![id.to_string()];
    let snapshot = provider.fetch(&ids, currency)?;

    let quote = snapshot
        .quote(id)
        .ok_or_else(|| anyhow!("no quote returned for {id:?}"))?;
    let series = snapshot
        .series
        .get(id)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("no seven-day series returned for {id:?}"))?;

    println!(
        "{} ({})  {}  {} 24h",
        quote.name,
        quote.ticker(),
        format::price(quote.price, currency),
        format::pct(quote.change_pct_24h),
    );
    println!("{}", block_row(&series.samples, width));

    let min = series
        .samples
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let max = series
        .samples
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let mut footer = format!(
        "low {}  high {}",
        format::price(min, currency),
        format::price(max, currency)
    );
    if let Some(trend) = series.trend_pct() {
        footer.push_str(&format!("  {} 7d", format::pct(trend)));
    }
    println!("{footer}");

    Ok(())
}

fn build_provider(demo: bool) -> Box<dyn QuoteProvider> {
    if demo {
        Box::new(SampleProvider::default())
    } else {
        Box::new(CoinGeckoProvider::new())
    }
}

fn resolve_watchlist(ids: Option<&str>, watchlist_path: Option<&Path>) -> Result<Watchlist> {
    if let Some(csv) = ids {
        return Watchlist::from_csv_arg(csv).map_err(|e| anyhow!(e));
    }
    if let Some(path) = watchlist_path {
        return Watchlist::from_file(path).map_err(|e| anyhow!(e));
    }
    Ok(Watchlist::default())
}

fn print_quote_table(snapshot: &MarketSnapshot, currency: &str, provider_name: &str) {
    println!(
        "{:<12} {:<7} {:>14} {:>8} {:>10} {:>10}",
        "Coin", "Ticker", "Price", "24h", "Mkt Cap", "Volume"
    );
    println!("{}", "-".repeat(66));
    for quote in &snapshot.quotes {
        println!(
            "{:<12} {:<7} {:>14} {:>8} {:>10} {:>10}",
            quote.name,
            quote.ticker(),
            format::price(quote.price, currency),
            format::pct(quote.change_pct_24h),
            format::compact(quote.market_cap, currency),
            format::compact(quote.volume_24h, currency),
        );
    }
    println!();
    println!(
        "Fetched {} via {}",
        snapshot
            .fetched_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S"),
        provider_name
    );
}

const BLOCKS: [char; 8] = [
    '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}',
];

/// Render a series as one terminal row, at most `width` glyphs wide.
///
/// Runs the same normalization as the TUI sparkline canvas, with the chart
/// height set to the glyph range so each rounded y lands on a glyph index.
fn block_row(samples: &[f64], width: usize) -> String {
    let values = downsample(samples, width);
    let top = (BLOCKS.len() - 1) as f64;
    path_points(&values, values.len() as f64, top)
        .iter()
        // y grows downward; flip it back before indexing into BLOCKS.
        .map(|p| BLOCKS[(top - p.y).round() as usize])
        .collect()
}

/// Reduce a series to at most `width` values by averaging fixed buckets,
/// keeping the overall shape of the full series.
fn downsample(samples: &[f64], width: usize) -> Vec<f64> {
    if samples.len() <= width {
        return samples.to_vec();
    }
    (0..width)
        .map(|i| {
            let start = i * samples.len() / width;
            let end = ((i + 1) * samples.len() / width).max(start + 1);
            let bucket = &samples[start..end];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect()
}
