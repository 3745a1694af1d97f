//! Colours and render helpers for CLI output.
//!
//! Uses the Ayu Dark palette. Only states a baker should act on get
//! colour: invalid durations and catalog problems in red, totals in the
//! accent colour, secondary detail muted.

use owo_colors::OwoColorize;

use levain_timeparsing::DurationParse;

use crate::terminal::supports_color;

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff

pub const ICON_PASS: &str = "\u{2713}";
pub const ICON_FAIL: &str = "\u{2716}";

/// Tree prefix for steps listed under a group header.
pub const TREE_CHILD: &str = "\u{2514}\u{2500} ";

const SEPARATOR_WIDTH: usize = 42;

/// Styling decision for one run of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self::detect()
    }
}

impl Style {
    /// Colour according to the environment and TTY.
    pub fn detect() -> Self {
        Self {
            color: supports_color(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    fn paint(&self, s: &str, rgb: (u8, u8, u8)) -> String {
        if self.color {
            s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
        } else {
            s.to_string()
        }
    }

    pub fn pass(&self, s: &str) -> String {
        self.paint(s, PASS)
    }

    pub fn warn(&self, s: &str) -> String {
        self.paint(s, WARN)
    }

    pub fn fail(&self, s: &str) -> String {
        self.paint(s, FAIL)
    }

    pub fn muted(&self, s: &str) -> String {
        self.paint(s, MUTED)
    }

    pub fn accent(&self, s: &str) -> String {
        self.paint(s, ACCENT)
    }

    pub fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    /// Uppercase accent header, e.g. `INGREDIENTS`.
    pub fn category(&self, s: &str) -> String {
        let upper = s.to_uppercase();
        if self.color {
            upper.truecolor(ACCENT.0, ACCENT.1, ACCENT.2).bold().to_string()
        } else {
            upper
        }
    }

    pub fn separator(&self) -> String {
        self.muted(&"\u{2500}".repeat(SEPARATOR_WIDTH))
    }

    pub fn pass_icon(&self) -> String {
        self.pass(ICON_PASS)
    }

    pub fn fail_icon(&self) -> String {
        self.fail(ICON_FAIL)
    }

    /// A step duration: its display form, or the raw text flagged in red
    /// when it does not parse.
    pub fn duration(&self, raw: &str, parsed: &DurationParse) -> String {
        if parsed.is_valid {
            parsed.display.clone()
        } else if raw.trim().is_empty() {
            self.fail("(no duration)")
        } else {
            self.fail(&format!("{} (invalid)", raw.trim()))
        }
    }

    /// Header for a step group; ungrouped runs get a muted label.
    pub fn group_header(&self, group_id: Option<&str>) -> String {
        match group_id {
            Some(id) => self.bold(&format!("[{}]", id)),
            None => self.muted("[ungrouped]"),
        }
    }
}
