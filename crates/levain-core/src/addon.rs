//! Optional extras layered on top of the main dough.
//!
//! Recipe documents store add-ons as a loose map of id to [`AddonEntry`];
//! [`Addon`] is the typed view the calculator works with.

use serde::{Deserialize, Serialize};

/// Add-on id for a tangzhong (cooked flour paste).
pub const TANGZHONG: &str = "tangzhong";
/// Add-on id for whole wheat flour replacing part of the base flour.
pub const WHOLE_WHEAT_FLOUR: &str = "whole-wheat-flour";
/// Process add-on id for a cold (fridge) fermentation.
pub const COLD_FERMENTATION: &str = "cold-fermentation";
/// Process add-on id for a room-temperature fermentation.
pub const ROOM_TEMP_FERMENTATION: &str = "room-temp-fermentation";

const DEFAULT_TANGZHONG_HYDRATION: f64 = 200.0;
const DEFAULT_FERMENTATION_DURATION: &str = "12 hours";

/// How a whole wheat amount is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlourUnit {
    #[default]
    #[serde(rename = "g")]
    Grams,
    /// Percent of the estimated total flour.
    #[serde(rename = "%")]
    Percent,
}

impl FlourUnit {
    /// Resolve `amount` to grams against the estimated total flour.
    pub fn to_grams(self, amount: f64, estimated_total_flour: f64) -> f64 {
        match self {
            Self::Grams => amount,
            Self::Percent => estimated_total_flour * amount / 100.0,
        }
    }
}

/// A typed add-on.
#[derive(Debug, Clone, PartialEq)]
pub enum Addon {
    /// Flour cooked with water; its flour counts toward total flour and its
    /// water is subtracted from the water to add.
    TangZhong { flour: f64, hydration: f64 },
    /// Whole wheat flour taken out of the base flour.
    WholeWheatFlour { amount: f64, unit: FlourUnit },
    /// A timed process step. Carries no mass.
    Fermentation { id: String, duration: String },
    /// Any other ingredient, counted into total dough weight only.
    Generic { id: String, amount: f64 },
}

impl Addon {
    /// The id this add-on is stored under in a recipe document.
    pub fn id(&self) -> &str {
        match self {
            Self::TangZhong { .. } => TANGZHONG,
            Self::WholeWheatFlour { .. } => WHOLE_WHEAT_FLOUR,
            Self::Fermentation { id, .. } | Self::Generic { id, .. } => id.as_str(),
        }
    }

    /// Interpret a stored entry. Missing numbers count as zero; a missing or
    /// zero tangzhong hydration means 200%.
    pub fn from_entry(id: &str, entry: &AddonEntry) -> Self {
        match id {
            TANGZHONG => Self::TangZhong {
                flour: entry.flour.unwrap_or(0.0),
                hydration: entry
                    .hydration
                    .filter(|h| *h > 0.0)
                    .unwrap_or(DEFAULT_TANGZHONG_HYDRATION),
            },
            WHOLE_WHEAT_FLOUR => Self::WholeWheatFlour {
                amount: entry.amount.unwrap_or(0.0),
                unit: entry.percentage.unwrap_or_default(),
            },
            COLD_FERMENTATION | ROOM_TEMP_FERMENTATION => Self::Fermentation {
                id: id.to_string(),
                duration: entry
                    .duration
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FERMENTATION_DURATION.to_string()),
            },
            other => Self::Generic {
                id: other.to_string(),
                amount: entry.amount.unwrap_or(0.0),
            },
        }
    }

    /// The stored form of this add-on.
    pub fn to_entry(&self) -> AddonEntry {
        match self {
            Self::TangZhong { flour, hydration } => AddonEntry {
                flour: Some(*flour),
                hydration: Some(*hydration),
                ..AddonEntry::default()
            },
            Self::WholeWheatFlour { amount, unit } => AddonEntry {
                amount: Some(*amount),
                percentage: Some(*unit),
                ..AddonEntry::default()
            },
            Self::Fermentation { duration, .. } => AddonEntry {
                duration: Some(duration.clone()),
                ..AddonEntry::default()
            },
            Self::Generic { amount, .. } => AddonEntry {
                amount: Some(*amount),
                ..AddonEntry::default()
            },
        }
    }
}

/// An add-on as stored in a recipe document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydration: Option<f64>,
    /// Unit of `amount` for whole wheat flour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<FlourUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}
