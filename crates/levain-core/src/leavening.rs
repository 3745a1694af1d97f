//! Lookup tables keyed by [`LeaveningType`].
//!
//! These are plain values handed to the calculator and to input editing,
//! so a configuration file can override them without any process-wide
//! state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::enums::LeaveningType;

/// Yeast potency multipliers, with optional per-type overrides.
///
/// Types without an override use [`LeaveningType::builtin_scaling`], which
/// in turn falls back to 1.0 for unknown types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScalingTable {
    overrides: HashMap<LeaveningType, f64>,
}

impl ScalingTable {
    /// Build a table from explicit overrides.
    pub fn with_overrides(overrides: HashMap<LeaveningType, f64>) -> Self {
        Self { overrides }
    }

    /// The multiplier applied to the baker's-percentage yeast mass.
    pub fn factor(&self, leavening: &LeaveningType) -> f64 {
        self.overrides
            .get(leavening)
            .copied()
            .unwrap_or_else(|| leavening.builtin_scaling())
    }
}

/// Flour share and hydration used to seed a preferment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PrefermentDefaults {
    pub inoculated_flour_percent: f64,
    pub hydration: f64,
}

/// Values applied to the recipe inputs when the leavening type changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LeaveningDefaults {
    /// Default yeast baker's percentage per leavening type.
    #[serde(default = "builtin_yeast_percent")]
    pub yeast_percent: HashMap<LeaveningType, f64>,

    /// Yeast percentage for types missing from `yeast_percent`.
    #[serde(default = "fallback_yeast_percent")]
    pub fallback_yeast_percent: f64,

    /// Preferment seeding for leavening types that use one.
    #[serde(default = "builtin_preferments")]
    pub preferments: HashMap<LeaveningType, PrefermentDefaults>,
}

impl Default for LeaveningDefaults {
    fn default() -> Self {
        Self {
            yeast_percent: builtin_yeast_percent(),
            fallback_yeast_percent: fallback_yeast_percent(),
            preferments: builtin_preferments(),
        }
    }
}

impl LeaveningDefaults {
    /// Default yeast percentage for `leavening`.
    pub fn yeast_percent_for(&self, leavening: &LeaveningType) -> f64 {
        self.yeast_percent
            .get(leavening)
            .copied()
            .unwrap_or(self.fallback_yeast_percent)
    }

    /// Preferment seeding for `leavening`, if it uses one.
    pub fn preferment_for(&self, leavening: &LeaveningType) -> Option<PrefermentDefaults> {
        self.preferments.get(leavening).copied()
    }
}

fn fallback_yeast_percent() -> f64 {
    0.210
}

fn builtin_yeast_percent() -> HashMap<LeaveningType, f64> {
    HashMap::from([
        (LeaveningType::ActiveDryYeast, 0.210),
        (LeaveningType::InstantYeast, 0.158),
        (LeaveningType::CakeYeast, 0.630),
        (LeaveningType::SourdoughStarter, 4.200),
        (LeaveningType::Poolish, 0.032),
    ])
}

fn builtin_preferments() -> HashMap<LeaveningType, PrefermentDefaults> {
    HashMap::from([
        (
            LeaveningType::SourdoughStarter,
            PrefermentDefaults {
                inoculated_flour_percent: 20.0,
                hydration: 100.0,
            },
        ),
        (
            LeaveningType::Poolish,
            PrefermentDefaults {
                inoculated_flour_percent: 30.0,
                hydration: 100.0,
            },
        ),
    ])
}
