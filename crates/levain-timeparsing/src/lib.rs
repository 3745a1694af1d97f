//! Duration expression parsing for the levain system.
//!
//! Turns what a baker types into a step's duration field ("2h 30m",
//! "18 h", "1:45", "2 days") into a minute count plus a normalized
//! display string. Parsing never fails loudly: unrecognized input comes
//! back as an invalid [`DurationParse`] so callers can flag the field and
//! keep going.

pub mod display;
pub mod duration;

pub use display::format_minutes;
pub use duration::{DurationError, DurationParse, parse_duration, try_parse_duration};
