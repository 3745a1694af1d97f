//! Recipe inputs and the derived ingredient masses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::LeaveningType;
use crate::leavening::LeaveningDefaults;

fn default_portions() -> u32 {
    1
}

/// The high-level parameters a baker enters.
///
/// Percentages are baker's percentages (relative to total flour). Field
/// names follow the recipe JSON format (`doughPortions`, `portionWeight`,
/// ...); missing fields take the values of [`RecipeInputs::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeInputs {
    pub dough_portions: u32,
    /// Grams per portion.
    pub portion_weight: f64,
    pub hydration_percent: f64,
    pub salt_percent: f64,
    pub leavening_type: LeaveningType,
    pub yeast_percent: f64,
    /// Percent of total flour that goes into a preferment; 0 disables it.
    pub inoculated_flour_percent: f64,
    /// Hydration of the preferment alone.
    pub preferment_hydration: f64,
}

impl Default for RecipeInputs {
    fn default() -> Self {
        Self {
            dough_portions: default_portions(),
            portion_weight: 500.0,
            hydration_percent: 72.0,
            salt_percent: 2.2,
            leavening_type: LeaveningType::ActiveDryYeast,
            yeast_percent: 0.210,
            inoculated_flour_percent: 0.0,
            preferment_hydration: 100.0,
        }
    }
}

impl RecipeInputs {
    /// Switch leavening type, resetting the yeast percentage and, for
    /// preferment-based leavening, the preferment share and hydration.
    pub fn with_leavening(mut self, leavening: LeaveningType, defaults: &LeaveningDefaults) -> Self {
        self.yeast_percent = defaults.yeast_percent_for(&leavening);
        if let Some(preferment) = defaults.preferment_for(&leavening) {
            self.inoculated_flour_percent = preferment.inoculated_flour_percent;
            self.preferment_hydration = preferment.hydration;
        }
        self.leavening_type = leavening;
        self
    }

    /// Total finished dough mass in grams.
    pub fn dough_weight(&self) -> f64 {
        f64::from(self.dough_portions) * self.portion_weight
    }
}

/// A flour/water split, used for preferments and tangzhong.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MassPair {
    pub flour: f64,
    pub water: f64,
}

impl MassPair {
    pub fn total(&self) -> f64 {
        self.flour + self.water
    }

    pub(crate) fn rounded(self) -> Self {
        Self {
            flour: round_tenth(self.flour),
            water: round_tenth(self.water),
        }
    }
}

/// Gram quantities to weigh out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredients {
    /// Base flour, excluding flour supplied by add-ons.
    pub flour: f64,
    /// Water to add, excluding water bound in a tangzhong.
    pub water: f64,
    pub salt: f64,
    pub yeast: f64,
    /// Share of flour and water built into the preferment.
    pub preferment: MassPair,
    #[serde(default)]
    pub whole_wheat_flour: f64,
    #[serde(default)]
    pub tangzhong: MassPair,
    /// Other add-on masses by add-on id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub addons: BTreeMap<String, f64>,
}

/// Summary figures for the whole dough.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStats {
    pub total_flour: f64,
    pub total_weight: f64,
    /// `water / total_flour` as a percentage.
    pub actual_hydration: f64,
}

/// Result of one recipe calculation. Values are rounded to 0.1 g.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeOutputs {
    pub ingredients: Ingredients,
    pub stats: RecipeStats,
}

/// Round to one decimal place, the precision recipes are shown at.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
