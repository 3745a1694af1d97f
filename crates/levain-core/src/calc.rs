//! Baker's-percentage arithmetic.
//!
//! The free functions are the individual formulas; [`RecipeCalculator`]
//! composes them into a full recipe. Everything here is total: any number
//! in produces a number out, and intermediate values stay unrounded until
//! the final [`RecipeOutputs`] are assembled.

use std::collections::BTreeMap;

use crate::addon::Addon;
use crate::enums::LeaveningType;
use crate::leavening::ScalingTable;
use crate::recipe::{Ingredients, MassPair, RecipeInputs, RecipeOutputs, RecipeStats, round_tenth};

/// Water mass for `hydration_percent` of `total_flour` grams.
pub fn calculate_water(total_flour: f64, hydration_percent: f64) -> f64 {
    total_flour * (hydration_percent / 100.0)
}

/// Salt mass for `salt_percent` of `total_flour` grams.
pub fn calculate_salt(total_flour: f64, salt_percent: f64) -> f64 {
    total_flour * (salt_percent / 100.0)
}

/// Leavening mass using the built-in potency of `leavening`.
///
/// Unknown leavening types scale by 1.0.
pub fn calculate_yeast(total_flour: f64, yeast_percent: f64, leavening: &LeaveningType) -> f64 {
    total_flour * (yeast_percent / 100.0) * leavening.builtin_scaling()
}

/// Flour and water built into a preferment.
///
/// A zero, negative or NaN inoculation means no preferment.
pub fn calculate_preferment(
    total_flour: f64,
    inoculated_flour_percent: f64,
    preferment_hydration: f64,
) -> MassPair {
    if !(inoculated_flour_percent > 0.0) {
        return MassPair::default();
    }
    let flour = total_flour * (inoculated_flour_percent / 100.0);
    MassPair {
        flour,
        water: flour * (preferment_hydration / 100.0),
    }
}

/// Estimate total flour from finished dough weight and hydration.
///
/// Salt and yeast are left out of the back-solve; they are small enough
/// that the estimate only drifts by a percent or two.
pub fn calculate_total_flour(dough_portions: u32, portion_weight: f64, hydration_percent: f64) -> f64 {
    f64::from(dough_portions) * portion_weight / (1.0 + hydration_percent / 100.0)
}

/// Flour and water of a tangzhong made from `flour` grams at `hydration`.
pub fn calculate_tangzhong(flour: f64, hydration: f64) -> MassPair {
    MassPair {
        flour,
        water: flour * (hydration / 100.0),
    }
}

/// Composes the formulas above into a full recipe.
///
/// The scaling table is injected so configured potency overrides apply
/// without touching global state.
#[derive(Debug, Clone, Default)]
pub struct RecipeCalculator {
    scaling: ScalingTable,
}

impl RecipeCalculator {
    pub fn new(scaling: ScalingTable) -> Self {
        Self { scaling }
    }

    pub fn scaling(&self) -> &ScalingTable {
        &self.scaling
    }

    /// Leavening mass using this calculator's scaling table.
    pub fn yeast(&self, total_flour: f64, yeast_percent: f64, leavening: &LeaveningType) -> f64 {
        total_flour * (yeast_percent / 100.0) * self.scaling.factor(leavening)
    }

    /// Calculate every ingredient mass and the dough statistics.
    ///
    /// Flour supplied by add-ons (whole wheat, tangzhong) is taken out of
    /// the base flour so each gram of flour is counted once, and tangzhong
    /// water is taken out of the water to add. Preferment flour and water
    /// are a share of the totals and are not added on top.
    pub fn calculate(&self, inputs: &RecipeInputs, addons: &[Addon]) -> RecipeOutputs {
        let estimate = calculate_total_flour(
            inputs.dough_portions,
            inputs.portion_weight,
            inputs.hydration_percent,
        );

        let mut whole_wheat = 0.0;
        let mut tangzhong = MassPair::default();
        let mut extras: BTreeMap<String, f64> = BTreeMap::new();
        for addon in addons {
            match addon {
                Addon::TangZhong { flour, hydration } => {
                    let tz = calculate_tangzhong(*flour, *hydration);
                    tangzhong.flour += tz.flour;
                    tangzhong.water += tz.water;
                }
                Addon::WholeWheatFlour { amount, unit } => {
                    whole_wheat += unit.to_grams(*amount, estimate);
                }
                Addon::Generic { id, amount } => {
                    *extras.entry(id.clone()).or_insert(0.0) += amount;
                }
                Addon::Fermentation { .. } => {}
            }
        }

        let flour_needed = (estimate - whole_wheat - tangzhong.flour).max(0.0);
        let total_flour = flour_needed + whole_wheat + tangzhong.flour;
        let water = (calculate_water(total_flour, inputs.hydration_percent) - tangzhong.water).max(0.0);
        let salt = calculate_salt(total_flour, inputs.salt_percent);
        let yeast = self.yeast(total_flour, inputs.yeast_percent, &inputs.leavening_type);
        let preferment = calculate_preferment(
            total_flour,
            inputs.inoculated_flour_percent,
            inputs.preferment_hydration,
        );

        let extra_mass: f64 = extras.values().sum();
        let total_weight = total_flour + water + tangzhong.water + salt + yeast + extra_mass;
        let actual_hydration = if total_flour > 0.0 {
            water / total_flour * 100.0
        } else {
            0.0
        };

        RecipeOutputs {
            ingredients: Ingredients {
                flour: round_tenth(flour_needed),
                water: round_tenth(water),
                salt: round_tenth(salt),
                yeast: round_tenth(yeast),
                preferment: preferment.rounded(),
                whole_wheat_flour: round_tenth(whole_wheat),
                tangzhong: tangzhong.rounded(),
                addons: extras.into_iter().map(|(id, g)| (id, round_tenth(g))).collect(),
            },
            stats: RecipeStats {
                total_flour: round_tenth(total_flour),
                total_weight: round_tenth(total_weight),
                actual_hydration: round_tenth(actual_hydration),
            },
        }
    }
}
