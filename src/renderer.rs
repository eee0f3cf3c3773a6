//! # Report Rendering
//!
//! Turns a [`FetchOutcome`] into the report text printed on stdout, and a
//! tidepool [`Verdict`] into its one-line advisory. Rendering is pure
//! (text in, text out) so the exact output can be asserted in tests;
//! printing is a thin wrapper.

use chrono::NaiveDateTime;

use crate::tidepool::{Verdict, LOOK_AHEAD_HOURS, THRESHOLD_FT};
use crate::{FetchOutcome, Prediction};

/// Print the report for one fetch to stdout.
pub fn print_report(station_id: &str, date: &str, outcome: &FetchOutcome) {
    print!("{}", render_report(station_id, date, outcome));
}

/// Render the report text for one fetch.
///
/// - `Failed` → `Error fetching data: <status>`
/// - `NoData` → `No tide data found.`
/// - `Predictions` → header line plus one line per entry, in input order
pub fn render_report(station_id: &str, date: &str, outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Failed { status } => format!("Error fetching data: {status}\n"),
        FetchOutcome::NoData => "No tide data found.\n".to_string(),
        FetchOutcome::Predictions(predictions) => {
            let mut out = format!("Tide predictions for station {station_id} on {date}:\n");
            for prediction in predictions {
                out.push_str(&format_line(prediction));
                out.push('\n');
            }
            out
        }
    }
}

/// Print the tidepooling advisory to stdout.
pub fn print_advisory(verdict: &Verdict) {
    print!("{}", render_advisory(verdict));
}

/// Render the one-line tidepooling advisory.
pub fn render_advisory(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Good { time, height_ft } => format!(
            "Yes! Next low tide at {} is {height_ft} ft (<= {THRESHOLD_FT} ft).\n",
            format_clock(*time)
        ),
        Verdict::TooHigh { time, height_ft } => format!(
            "No. Next low tide at {} is {height_ft} ft (above {THRESHOLD_FT} ft).\n",
            format_clock(*time)
        ),
        Verdict::NoLowTide => {
            format!("No. No low tide in next {LOOK_AHEAD_HOURS} hrs.\n")
        }
    }
}

fn format_line(prediction: &Prediction) -> String {
    format!(
        "{} at {} — {} ft",
        prediction.kind,
        format_clock(prediction.time),
        prediction.height_ft
    )
}

/// 12-hour clock with zero-padded hour and AM/PM suffix, e.g. "06:12 AM".
fn format_clock(time: NaiveDateTime) -> String {
    time.format("%I:%M %p").to_string()
}
