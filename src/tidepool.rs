//! # Tidepooling Viability Check
//!
//! Decides whether conditions favor tidepooling by scanning fetched
//! predictions for the next low tide within a look-ahead window. A low tide
//! at or below [`THRESHOLD_FT`] exposes enough of the intertidal zone to be
//! worth the trip.
//!
//! The first low tide inside the window decides the verdict, even when a
//! later one would be lower.

use chrono::{Duration, NaiveDateTime};

use crate::{Prediction, TideKind};

/// Maximum low-water height, in feet above MLLW, still considered good
/// for tidepooling.
pub const THRESHOLD_FT: f32 = 1.5;

/// How far ahead of the reference time to look for a low tide, in hours.
pub const LOOK_AHEAD_HOURS: i64 = 12;

/// Result of evaluating predictions against the tidepooling criteria.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Next low tide in the window is at or below the threshold
    Good {
        time: NaiveDateTime,
        height_ft: f32,
    },
    /// Next low tide in the window is above the threshold
    TooHigh {
        time: NaiveDateTime,
        height_ft: f32,
    },
    /// No low tide falls within the look-ahead window
    NoLowTide,
}

/// Evaluate predictions against the next low tide after `reference`.
///
/// Predictions are scanned in order; entries before `reference` or beyond
/// the look-ahead cutoff are ignored, as are high tides.
pub fn evaluate(predictions: &[Prediction], reference: NaiveDateTime) -> Verdict {
    let cutoff = reference + Duration::hours(LOOK_AHEAD_HOURS);

    for prediction in predictions {
        if prediction.kind != TideKind::Low {
            continue;
        }
        if prediction.time < reference || prediction.time > cutoff {
            continue;
        }

        if prediction.height_ft <= THRESHOLD_FT {
            return Verdict::Good {
                time: prediction.time,
                height_ft: prediction.height_ft,
            };
        }
        return Verdict::TooHigh {
            time: prediction.time,
            height_ft: prediction.height_ft,
        };
    }

    Verdict::NoLowTide
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap()
    }

    fn prediction(time: &str, kind: TideKind, height_ft: f32) -> Prediction {
        Prediction {
            time: at(time),
            kind,
            height_ft,
        }
    }

    #[test]
    fn test_low_tide_below_threshold_is_good() {
        let predictions = vec![
            prediction("2025-05-11 05:45", TideKind::Low, 1.2),
            prediction("2025-05-11 12:10", TideKind::High, 4.8),
        ];

        let verdict = evaluate(&predictions, at("2025-05-11 04:00"));
        assert_eq!(
            verdict,
            Verdict::Good {
                time: at("2025-05-11 05:45"),
                height_ft: 1.2,
            }
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let predictions = vec![prediction("2025-05-11 05:45", TideKind::Low, THRESHOLD_FT)];

        let verdict = evaluate(&predictions, at("2025-05-11 04:00"));
        assert!(matches!(verdict, Verdict::Good { .. }));
    }

    #[test]
    fn test_high_low_tide_is_too_high() {
        let predictions = vec![prediction("2025-05-11 05:45", TideKind::Low, 2.3)];

        let verdict = evaluate(&predictions, at("2025-05-11 04:00"));
        assert_eq!(
            verdict,
            Verdict::TooHigh {
                time: at("2025-05-11 05:45"),
                height_ft: 2.3,
            }
        );
    }

    #[test]
    fn test_first_low_in_window_decides() {
        // A later, lower low must not override the first one found.
        let predictions = vec![
            prediction("2025-05-11 05:45", TideKind::Low, 2.3),
            prediction("2025-05-11 11:50", TideKind::Low, 0.4),
        ];

        let verdict = evaluate(&predictions, at("2025-05-11 04:00"));
        assert!(matches!(verdict, Verdict::TooHigh { .. }));
    }

    #[test]
    fn test_past_low_tides_are_skipped() {
        let predictions = vec![
            prediction("2025-05-11 05:45", TideKind::Low, 0.9),
            prediction("2025-05-11 18:02", TideKind::Low, 1.1),
        ];

        let verdict = evaluate(&predictions, at("2025-05-11 10:00"));
        assert_eq!(
            verdict,
            Verdict::Good {
                time: at("2025-05-11 18:02"),
                height_ft: 1.1,
            }
        );
    }

    #[test]
    fn test_low_beyond_window_is_no_low_tide() {
        let predictions = vec![prediction("2025-05-11 23:45", TideKind::Low, 0.5)];

        let verdict = evaluate(&predictions, at("2025-05-11 04:00"));
        assert_eq!(verdict, Verdict::NoLowTide);
    }

    #[test]
    fn test_high_tides_alone_give_no_low_tide() {
        let predictions = vec![
            prediction("2025-05-11 05:45", TideKind::High, 4.8),
            prediction("2025-05-11 12:10", TideKind::High, 5.1),
        ];

        let verdict = evaluate(&predictions, at("2025-05-11 04:00"));
        assert_eq!(verdict, Verdict::NoLowTide);
    }

    #[test]
    fn test_empty_predictions_give_no_low_tide() {
        assert_eq!(evaluate(&[], at("2025-05-11 04:00")), Verdict::NoLowTide);
    }
}
