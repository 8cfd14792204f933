//! siglab CLI — analyze a candle window and print the trading decision.
//!
//! Commands:
//! - `analyze` — load candles from CSV/JSON (or synthesize a window) and
//!   print the decision payload as JSON
//! - `indicators` — dump the tail of the computed indicator series

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use siglab_core::data::{read_candles_csv, read_candles_json, SyntheticSeries};
use siglab_core::indicators::IndicatorSet;
use siglab_core::{analyze, Candle, StrategyKind};

#[derive(Parser)]
#[command(name = "siglab", about = "siglab CLI — candle-window signal analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Candle file: CSV with a timestamp,open,high,low,close,volume header,
    /// or a .json array of candle objects.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Use a deterministic synthetic window instead of --input.
    #[arg(long, default_value_t = false)]
    synthetic: bool,

    /// Seed for the synthetic window.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of synthetic candles.
    #[arg(long, default_value_t = 100)]
    len: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a candle window and print the decision as JSON.
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Strategy name: fvg_liquidity, rsi_macd, bollinger_breakout.
        /// Unknown names fall back to fvg_liquidity.
        #[arg(long, default_value = "fvg_liquidity")]
        strategy: String,

        /// Pretty-print the JSON output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print the last few values of each indicator series.
    Indicators {
        #[command(flatten)]
        source: SourceArgs,

        /// How many trailing rows to print.
        #[arg(long, default_value_t = 5)]
        tail: usize,
    },
}

fn load_candles(source: &SourceArgs) -> Result<Vec<Candle>> {
    let candles = if source.synthetic {
        SyntheticSeries {
            len: source.len,
            seed: source.seed,
            ..Default::default()
        }
        .generate()
    } else {
        let Some(path) = &source.input else {
            bail!("either --input or --synthetic is required");
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => read_candles_json(path)?,
            _ => read_candles_csv(path)?,
        }
    };
    if candles.is_empty() {
        bail!("empty candle window");
    }
    Ok(candles)
}

/// RFC 3339 rendering of a candle open time; empty for out-of-range stamps.
fn format_open_time(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|dt| dt.to_rfc3339()).unwrap_or_default()
}

fn run_analyze(source: &SourceArgs, strategy: &str, pretty: bool) -> Result<()> {
    let candles = load_candles(source)?;
    let kind = StrategyKind::from_name(strategy);
    let decision = analyze(&candles, kind);

    let last = &candles[candles.len() - 1];
    let time = format_open_time(last.datetime());

    // Same payload shape the transport layer serves to clients.
    let payload = serde_json::json!({
        "strategy": kind.name(),
        "time": time,
        "price": last.close,
        "signal": decision.signal,
        "confidence": decision.confidence,
        "stop_loss": decision.stop_loss,
        "take_profit": decision.take_profit,
    });

    if pretty {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{payload}");
    }
    Ok(())
}

fn run_indicators(source: &SourceArgs, tail: usize) -> Result<()> {
    let candles = load_candles(source)?;
    let set = IndicatorSet::compute(&candles);
    let n = set.len();
    let start = n.saturating_sub(tail);

    println!(
        "{:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "close", "rsi", "macd", "signal", "hist", "bb_low", "bb_mid", "bb_up"
    );
    for i in start..n {
        println!(
            "{:>12.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            candles[i].close,
            set.rsi[i],
            set.macd[i],
            set.macd_signal[i],
            set.macd_histogram[i],
            set.bb_lower[i],
            set.bb_middle[i],
            set.bb_upper[i],
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Analyze {
            source,
            strategy,
            pretty,
        } => run_analyze(source, strategy, *pretty),
        Commands::Indicators { source, tail } => run_indicators(source, *tail),
    }
}
