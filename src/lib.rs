//! # Tidepool Tracker Core Library
//!
//! This library provides the data structures and modules for fetching NOAA
//! tide predictions and turning them into a human-readable report.
//!
//! ## Data Flow
//!
//! 1. **Fetch**: one HTTP GET to the NOAA Tides and Currents `datagetter`
//!    endpoint for a station and date ([`tide_data`])
//! 2. **Decode**: JSON response → typed [`FetchOutcome`]
//! 3. **Render**: outcome → report text on stdout ([`renderer`])
//! 4. **Advise** (optional): scan the predictions for a tidepool-worthy low
//!    tide ([`tidepool`])
//!
//! Everything is transient: nothing is cached or persisted between runs.
//!
//! ## Outcome Model
//!
//! The fetch distinguishes three terminal states rather than signaling them
//! through printed text alone:
//! - [`FetchOutcome::Predictions`]: success with one or more entries
//! - [`FetchOutcome::NoData`]: the request succeeded but the service had
//!   nothing to show (absent or empty `predictions` field)
//! - [`FetchOutcome::Failed`]: non-success HTTP status; the body is never read
//!
//! Transport and decode failures are real errors and surface as
//! [`tide_data::TideError`]. Presentation of all three outcomes is the
//! renderer's concern, so callers and tests can branch on the type instead of
//! scraping output.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// Module declarations
pub mod config;
pub mod renderer;
pub mod tide_data;
pub mod tidepool;

/// Tide extremum classification from the NOAA `hilo` interval.
///
/// The service encodes these as single-letter codes: `"H"` for high water,
/// `"L"` for low water. No other codes are expected in `hilo` responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TideKind {
    High,
    Low,
}

impl fmt::Display for TideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TideKind::High => write!(f, "High Tide"),
            TideKind::Low => write!(f, "Low Tide"),
        }
    }
}

/// A single predicted tide event at a station.
///
/// Parsed from one `{t, type, v}` entry of the response. The timestamp is
/// naive: NOAA returns station-local time (`time_zone=lst_ldt`) with no
/// offset, so attaching a timezone here would claim more than the data says.
///
/// # Example
/// ```
/// use chrono::NaiveDateTime;
/// use tidepool_lib::{Prediction, TideKind};
///
/// let low = Prediction {
///     time: NaiveDateTime::parse_from_str("2025-05-11 05:45", "%Y-%m-%d %H:%M").unwrap(),
///     kind: TideKind::Low,
///     height_ft: 1.2,
/// };
/// assert_eq!(low.kind, TideKind::Low);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Station-local time of the predicted extremum
    pub time: NaiveDateTime,
    /// High or low water
    pub kind: TideKind,
    /// Height in feet above MLLW
    pub height_ft: f32,
}

/// Terminal state of one fetch invocation.
///
/// Entry order inside `Predictions` matches the order the service returned;
/// the list is never re-sorted.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// Success with at least one prediction
    Predictions(Vec<Prediction>),
    /// Success, but the `predictions` field was absent or empty
    NoData,
    /// Non-success HTTP status; no body was parsed
    Failed { status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tide_kind_labels() {
        assert_eq!(TideKind::High.to_string(), "High Tide");
        assert_eq!(TideKind::Low.to_string(), "Low Tide");
    }
}
