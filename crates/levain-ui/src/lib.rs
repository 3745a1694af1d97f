//! Terminal styling for levain CLI output.
//!
//! Colour detection follows the usual `NO_COLOR` / `CLICOLOR`
//! conventions; [`styles::Style`] carries the decision so callers can
//! force it on or off.

pub mod styles;
pub mod terminal;

pub use styles::Style;
