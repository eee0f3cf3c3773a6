//! # Tidepool Tracker Application Entry Point
//!
//! Resolves the station and date to query, performs the single fetch, and
//! prints the report. Failures never escape as a non-zero exit: transport
//! and decode errors are reported on stderr, and bad-status or no-data
//! outcomes are part of the normal report.
//!
//! Usage:
//!   tidepool-tracker [STATION] [DATE] [--tidepool]
//!
//! STATION defaults to the configured station (Santa Cruz, CA) and DATE to
//! today in `YYYYMMDD` form. `--tidepool` appends a one-line advisory on
//! whether the next low tide is worth a trip to the pools.

use std::env;

use anyhow::Result;
use chrono::Local;
use tidepool_lib::config::Config;
use tidepool_lib::{renderer, tide_data, tidepool, FetchOutcome};

/// Today's date in the `YYYYMMDD` form the datagetter API expects.
fn today_yyyymmdd() -> String {
    Local::now().format("%Y%m%d").to_string()
}

/// Main application entry point.
fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let want_advisory = args.iter().any(|arg| arg == "--tidepool");
    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));

    let config = Config::load();
    let station_id = positional
        .next()
        .cloned()
        .unwrap_or_else(|| config.station.id.clone());
    let date = positional.next().cloned().unwrap_or_else(today_yyyymmdd);

    // Create Tokio runtime for the async HTTP client
    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(tide_data::fetch(&station_id, &date, &config.request));

    match result {
        Ok(outcome) => {
            renderer::print_report(&station_id, &date, &outcome);

            if want_advisory {
                if let FetchOutcome::Predictions(predictions) = &outcome {
                    let verdict = tidepool::evaluate(predictions, Local::now().naive_local());
                    renderer::print_advisory(&verdict);
                }
            }
        }
        Err(error) => {
            // Visible in the terminal or journal; the process still exits 0,
            // matching the bad-status and no-data paths.
            eprintln!("Tide data fetch failed: {error}");
        }
    }

    Ok(())
}
