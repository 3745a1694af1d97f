//! Pattern-driven parsing of free-text durations.
//!
//! Recognized forms, tried in order (first match wins):
//!
//! 1. hours and minutes: `"2h 30m"`, `"2 hours 30 minutes"`
//! 2. hours: `"2h"`, `"2 hours"`, `"2.5h"`
//! 3. minutes: `"30m"`, `"30 min"`, `"30 minutes"`
//! 4. clock style `H:MM`: `"2:30"`, `"0:45"`
//! 5. days: `"1 day"`, `"2 days"`
//! 6. seconds: `"30s"`, `"30 seconds"`
//!
//! A bare number such as `"45"` matches nothing; a unit is mandatory.

use chrono::TimeDelta;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::display::format_minutes;

/// Outcome of parsing a duration field.
///
/// Invalid input is represented by `is_valid == false`, `minutes == 0`
/// and an empty `display`, never by an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationParse {
    pub is_valid: bool,
    pub minutes: f64,
    pub display: String,
}

impl DurationParse {
    /// The result returned for anything that does not parse.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            minutes: 0.0,
            display: String::new(),
        }
    }

    fn valid(minutes: f64) -> Self {
        Self {
            is_valid: true,
            minutes,
            display: format_minutes(minutes),
        }
    }

    /// Convert to a [`TimeDelta`] with millisecond precision.
    ///
    /// Returns `None` for invalid parses and for values outside the range
    /// `TimeDelta` can represent.
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        if !self.is_valid {
            return None;
        }
        let millis = (self.minutes * 60_000.0).round();
        if millis > i64::MAX as f64 {
            return None;
        }
        TimeDelta::try_milliseconds(millis as i64)
    }
}

/// Error returned by the strict entry point [`try_parse_duration`].
#[derive(Debug, thiserror::Error)]
pub enum DurationError {
    #[error("unrecognized duration: '{0}' (try e.g. \"30 minutes\", \"2h 30m\", \"1:45\", \"2 days\")")]
    Unrecognized(String),
}

/// A recognized duration shape and how its captures become minutes.
struct Pattern {
    regex: Regex,
    to_minutes: fn(&[f64]) -> f64,
}

impl Pattern {
    fn new(source: &str, to_minutes: fn(&[f64]) -> f64) -> Self {
        Self {
            regex: Regex::new(source).expect("duration pattern must compile"),
            to_minutes,
        }
    }
}

const NUMBER: &str = r"(\d+(?:\.\d+)?)";

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::new(
            &format!(r"(?i){NUMBER}\s*h(?:ours?)?\s*{NUMBER}\s*m(?:in(?:utes?)?)?"),
            |v| v[0] * 60.0 + v[1],
        ),
        Pattern::new(&format!(r"(?i){NUMBER}\s*h(?:ours?)?$"), |v| v[0] * 60.0),
        Pattern::new(&format!(r"(?i){NUMBER}\s*m(?:in(?:utes?)?)?$"), |v| v[0]),
        Pattern::new(r"(\d+):(\d+)", |v| v[0] * 60.0 + v[1]),
        Pattern::new(&format!(r"(?i){NUMBER}\s*days?"), |v| v[0] * 24.0 * 60.0),
        Pattern::new(&format!(r"(?i){NUMBER}\s*s(?:ec(?:onds?)?)?$"), |v| v[0] / 60.0),
    ]
});

/// Parse a free-text duration.
///
/// Input is lowercased and trimmed before matching. A pattern whose
/// arithmetic yields a NaN, infinite or negative total is skipped and the
/// next pattern is tried. Calling this repeatedly with the same text
/// always yields the same result.
///
/// # Examples
///
/// ```
/// use levain_timeparsing::parse_duration;
///
/// let parsed = parse_duration("1 hour 30 minutes");
/// assert!(parsed.is_valid);
/// assert_eq!(parsed.minutes, 90.0);
/// assert_eq!(parsed.display, "1h 30m");
///
/// assert!(!parse_duration("45").is_valid);
/// ```
pub fn parse_duration(text: &str) -> DurationParse {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return DurationParse::invalid();
    }

    for pattern in PATTERNS.iter() {
        let Some(caps) = pattern.regex.captures(&text) else {
            continue;
        };
        let values: Vec<f64> = caps
            .iter()
            .skip(1)
            .map(|m| {
                m.and_then(|m| m.as_str().parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            })
            .collect();

        let minutes = (pattern.to_minutes)(&values);
        if !minutes.is_finite() || minutes < 0.0 {
            continue;
        }
        return DurationParse::valid(minutes);
    }

    DurationParse::invalid()
}

/// Parse a duration, turning an invalid result into an error.
///
/// Used where a duration is required (template catalogs, CLI input) rather
/// than validated live.
pub fn try_parse_duration(text: &str) -> Result<DurationParse, DurationError> {
    let parsed = parse_duration(text);
    if parsed.is_valid {
        Ok(parsed)
    } else {
        Err(DurationError::Unrecognized(text.to_string()))
    }
}
