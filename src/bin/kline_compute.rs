//! Compute the full indicator set for one stock dataset.
//!
//! Usage:
//!     kline_compute <stock.json> [benchmark.json]
//!
//! Reads `{ "name": ..., "data": [ { time, open, high, low, close,
//! volume } ] }` documents, computes the daily and weekly indicator panels
//! (plus relative strength when a benchmark is given), and writes one JSON
//! object to stdout. Progress and timing go to stderr; tune with
//! `RUST_LOG`.

use std::env;
use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kline_core::Bar;
use kline_chart::prelude::*;

#[derive(Debug, Serialize)]
struct WeeklyView {
    bars: Vec<Bar>,
    indicators: PanelIndicators,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComputeOutput {
    name: String,
    daily: PanelIndicators,
    weekly: WeeklyView,
    #[serde(skip_serializing_if = "Option::is_none")]
    relative_strength: Option<Vec<RsRecord>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <stock.json> [benchmark.json]", args[0]);
        std::process::exit(2);
    }

    let stock = Dataset::from_path(&args[1])
        .with_context(|| format!("loading stock dataset {}", args[1]))?;
    info!(name = %stock.name, bars = stock.data.len(), "loaded stock dataset");

    let benchmark = match args.get(2) {
        Some(path) => {
            let dataset = Dataset::from_path(path)
                .with_context(|| format!("loading benchmark dataset {path}"))?;
            info!(
                name = %dataset.name,
                bars = dataset.data.len(),
                "loaded benchmark dataset"
            );
            Some(dataset)
        }
        None => None,
    };

    let started = Instant::now();

    let daily = compute_indicators(&stock.data)?;
    debug!(elapsed_ms = elapsed_ms(started), "daily panel computed");

    let weekly_bars = to_weekly(&stock.data);
    let weekly_indicators = compute_indicators(&weekly_bars)?;
    debug!(
        elapsed_ms = elapsed_ms(started),
        weeks = weekly_bars.len(),
        "weekly panel computed"
    );

    let relative_strength = benchmark
        .as_ref()
        .map(|dataset| compute_relative_strength(&stock.data, &dataset.data));

    info!(
        elapsed_ms = elapsed_ms(started),
        divergences = daily.divergences.len(),
        "computation finished"
    );

    let output = ComputeOutput {
        name: stock.name,
        daily,
        weekly: WeeklyView {
            bars: weekly_bars,
            indicators: weekly_indicators,
        },
        relative_strength,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer(&mut handle, &output)?;
    writeln!(handle)?;

    Ok(())
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
