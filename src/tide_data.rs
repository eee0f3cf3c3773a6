//! # NOAA Tide Prediction Fetching
//!
//! This module handles the single network operation of the application:
//! fetching high/low tide predictions from NOAA's Tides and Currents
//! `datagetter` API for one station and one date.
//!
//! ## Data Source
//!
//! - **URL**: https://api.tidesandcurrents.noaa.gov/api/prod/datagetter
//! - **Product**: `predictions` with `interval=hilo` (extrema only, not the
//!   continuous six-minute series)
//! - **Datum**: MLLW, heights in feet (`units=english`)
//! - **Time zone**: `lst_ldt` (station-local standard/daylight time)
//! - **Format**: JSON, `{"predictions": [{"t": ..., "type": ..., "v": ...}]}`
//!
//! ## Outcome Mapping
//!
//! - Non-success HTTP status → [`FetchOutcome::Failed`]; the body is not read
//! - Absent or empty `predictions` field → [`FetchOutcome::NoData`]
//! - Otherwise each entry is parsed, in received order, into a
//!   [`Prediction`]
//!
//! A malformed entry (bad timestamp, unparseable height, unknown type code)
//! aborts the decode with a [`TideError`] rather than being skipped, so a
//! successful outcome always carries exactly one prediction per response
//! entry. Transport failures (connect error, timeout) also surface as
//! [`TideError`]. No retries are attempted.

use std::time::Duration;

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::config::RequestConfig;
use crate::{FetchOutcome, Prediction, TideKind};

/// Errors that can occur while fetching or decoding tide predictions.
///
/// Non-success HTTP statuses and empty result sets are *not* errors; they are
/// [`FetchOutcome`] variants. This enum covers the cases where no meaningful
/// outcome exists at all.
#[derive(Error, Debug)]
pub enum TideError {
    /// Transport failure (connect error, timeout, protocol error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON envelope
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Entry timestamp did not match `YYYY-MM-DD HH:MM`
    #[error("malformed timestamp: {0:?}")]
    Timestamp(String),

    /// Entry height was not a numeric string
    #[error("malformed height: {0:?}")]
    Height(String),

    /// Entry type code was neither `"H"` nor `"L"`
    #[error("unknown tide type code: {0:?}")]
    UnknownKind(String),
}

/// Production endpoint for the NOAA Tides and Currents data API.
pub const DEFAULT_BASE_URL: &str = "https://api.tidesandcurrents.noaa.gov/api/prod/datagetter";

// Fixed query parameters; only station and date vary per invocation.
const APPLICATION: &str = "demo_app";
const DATUM: &str = "MLLW";
const TIME_ZONE: &str = "lst_ldt";
const UNITS: &str = "english";
const INTERVAL: &str = "hilo";

/// Timestamp layout used by the predictions product.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Fetch tide predictions for one station and one date (`YYYYMMDD`).
///
/// Issues a single GET with a client-side timeout and maps the response to a
/// [`FetchOutcome`]. Neither input is validated locally; malformed station
/// codes or dates are rejected by the remote service, which shows up here as
/// a failed status or an empty result.
///
/// # Example
/// ```no_run
/// use tidepool_lib::config::RequestConfig;
/// use tidepool_lib::tide_data;
///
/// # async fn run() {
/// let request = RequestConfig::default();
/// let outcome = tide_data::fetch("9413745", "20250511", &request).await;
/// # }
/// ```
pub async fn fetch(
    station_id: &str,
    date: &str,
    request: &RequestConfig,
) -> Result<FetchOutcome, TideError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(request.timeout_secs))
        .build()?;

    let url = build_url(&request.base_url, station_id, date);
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Ok(FetchOutcome::Failed {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    parse_body(&body)
}

/// Decode a response body into a [`FetchOutcome`].
///
/// Split out from [`fetch`] so decoding can be exercised without a server.
pub fn parse_body(body: &str) -> Result<FetchOutcome, TideError> {
    let envelope: PredictionsEnvelope = serde_json::from_str(body)?;

    if envelope.predictions.is_empty() {
        return Ok(FetchOutcome::NoData);
    }

    let mut predictions = Vec::with_capacity(envelope.predictions.len());
    for raw in envelope.predictions {
        predictions.push(parse_entry(raw)?);
    }

    Ok(FetchOutcome::Predictions(predictions))
}

// -- Private Implementation --

/// Response envelope. An absent `predictions` key is the same valid "no data"
/// state as an empty array, hence the default.
#[derive(Debug, Deserialize)]
struct PredictionsEnvelope {
    #[serde(default)]
    predictions: Vec<RawPrediction>,
}

/// One wire-format entry, all fields strings as the service sends them.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    t: String,
    #[serde(rename = "type")]
    kind: String,
    v: String,
}

fn build_url(base_url: &str, station_id: &str, date: &str) -> String {
    format!(
        "{base_url}?product=predictions\
         &application={APPLICATION}\
         &begin_date={date}\
         &end_date={date}\
         &datum={DATUM}\
         &station={station_id}\
         &time_zone={TIME_ZONE}\
         &units={UNITS}\
         &interval={INTERVAL}\
         &format=json"
    )
}

fn parse_entry(raw: RawPrediction) -> Result<Prediction, TideError> {
    let time = NaiveDateTime::parse_from_str(&raw.t, TIME_FORMAT)
        .map_err(|_| TideError::Timestamp(raw.t.clone()))?;

    let kind = match raw.kind.as_str() {
        "H" => TideKind::High,
        "L" => TideKind::Low,
        other => return Err(TideError::UnknownKind(other.to_string())),
    };

    let height_ft: f32 = raw
        .v
        .trim()
        .parse()
        .map_err(|_| TideError::Height(raw.v.clone()))?;

    Ok(Prediction {
        time,
        kind,
        height_ft,
    })
}
