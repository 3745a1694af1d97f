//! Read-only reference data: the ingredient list offered when adding an
//! ingredient to a step, and the add-ons offered for the main dough.
//!
//! Catalogs are ordinary values. Callers build one (usually with
//! `builtin()`) and pass it to whatever needs it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::enums::IngredientType;
use crate::step::StepIngredient;

/// (name, type, water scaling)
const BUILTIN_INGREDIENTS: &[(&str, Option<&str>, Option<f64>)] = &[
    ("Flour", Some("flour"), None),
    ("Boiling water", Some("water"), None),
    ("Whole Wheat Flour", Some("flour"), None),
    ("Oil", None, None),
    ("Milk (90% water)", Some("water"), Some(0.9)),
    ("Sugar", None, None),
    ("Butter", None, None),
    ("Eggs", Some("water"), Some(0.75)),
    ("Baking Powder", None, None),
    ("Water room temp", Some("water"), None),
    ("Salt", None, None),
    ("Active Dry Yeast", None, None),
    ("Instant Yeast", None, None),
    ("Cake Yeast", None, None),
    ("Sourdough Starter (100% hydration)", None, None),
    ("Poolish (100% hydration)", None, None),
];

/// An ingredient that can be added to a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogIngredient {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<IngredientType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<f64>,
}

impl CatalogIngredient {
    /// A step ingredient seeded with `default_value` grams.
    pub fn to_step_ingredient(&self, default_value: f64) -> StepIngredient {
        StepIngredient {
            name: self.name.clone(),
            kind: self.kind.clone().unwrap_or_default(),
            unit: "g".to_string(),
            default_value,
            value: Some(default_value),
            scaling: self.scaling,
        }
    }
}

/// The list of ingredients a step can draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCatalog {
    pub ingredients: Vec<CatalogIngredient>,
}

impl IngredientCatalog {
    /// The ingredients shipped with levain.
    pub fn builtin() -> Self {
        let ingredients = BUILTIN_INGREDIENTS
            .iter()
            .map(|(name, kind, scaling)| CatalogIngredient {
                name: (*name).to_string(),
                kind: kind.map(IngredientType::from),
                scaling: *scaling,
            })
            .collect();
        Self { ingredients }
    }

    /// Ingredients whose name contains `query`, case-insensitively.
    /// A blank query returns everything.
    pub fn suggestions(&self, query: &str) -> Vec<&CatalogIngredient> {
        if query.trim().is_empty() {
            return self.ingredients.iter().collect();
        }
        let query = query.to_lowercase();
        self.ingredients
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Exact (case-insensitive) lookup by name.
    pub fn find(&self, name: &str) -> Option<&CatalogIngredient> {
        self.ingredients
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
    }
}

/// Which part of the recipe form an add-on belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddonSection {
    /// Extra ingredients.
    Addons,
    /// Timed processes.
    Processes,
}

/// An add-on that can be switched on for the main dough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonInfo {
    pub id: String,
    pub name: String,
    pub section: AddonSection,
}

const BUILTIN_ADDONS: &[(&str, &str, AddonSection)] = &[
    ("tangzhong", "TangZhong", AddonSection::Addons),
    ("whole-wheat-flour", "Whole Wheat Flour", AddonSection::Addons),
    ("oil", "Oil", AddonSection::Addons),
    ("milk", "Milk (90% water)", AddonSection::Addons),
    ("sugar", "Sugar", AddonSection::Addons),
    ("butter", "Butter", AddonSection::Addons),
    ("eggs", "Eggs", AddonSection::Addons),
    ("baking-powder", "Baking Powder", AddonSection::Addons),
    ("cold-fermentation", "Cold Fermentation (CF)", AddonSection::Processes),
    (
        "room-temp-fermentation",
        "Room Temperature (RT) Fermentation",
        AddonSection::Processes,
    ),
];

/// The add-ons offered for the main dough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonCatalog {
    pub addons: Vec<AddonInfo>,
}

impl AddonCatalog {
    pub fn builtin() -> Self {
        let addons = BUILTIN_ADDONS
            .iter()
            .map(|(id, name, section)| AddonInfo {
                id: (*id).to_string(),
                name: (*name).to_string(),
                section: *section,
            })
            .collect();
        Self { addons }
    }

    /// Add-ons matching `query` that are not already `active`.
    ///
    /// A blank query lists every add-on, active or not.
    pub fn suggestions(&self, query: &str, active: &HashSet<String>) -> Vec<&AddonInfo> {
        if query.trim().is_empty() {
            return self.addons.iter().collect();
        }
        let query = query.to_lowercase();
        self.addons
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&query) && !active.contains(&a.id))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&AddonInfo> {
        self.addons.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_ingredients() {
        let catalog = IngredientCatalog::builtin();
        assert_eq!(catalog.ingredients.len(), 16);
        let milk = catalog.find("milk (90% water)").unwrap();
        assert_eq!(milk.kind, Some(IngredientType::Water));
        assert_eq!(milk.scaling, Some(0.9));
    }

    #[test]
    fn ingredient_search_is_case_insensitive() {
        let catalog = IngredientCatalog::builtin();
        let names: Vec<&str> = catalog
            .suggestions("FLOUR")
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Flour", "Whole Wheat Flour"]);
        assert_eq!(catalog.suggestions("  ").len(), 16);
        assert!(catalog.suggestions("saffron").is_empty());
    }

    #[test]
    fn step_ingredient_from_catalog() {
        let catalog = IngredientCatalog::builtin();
        let eggs = catalog.find("Eggs").unwrap().to_step_ingredient(110.0);
        assert_eq!(eggs.kind, IngredientType::Water);
        assert_eq!(eggs.unit, "g");
        assert_eq!(eggs.value, Some(110.0));
        assert_eq!(eggs.scaling, Some(0.75));

        let sugar = catalog.find("Sugar").unwrap().to_step_ingredient(0.0);
        assert_eq!(sugar.kind, IngredientType::Generic);
    }

    #[test]
    fn addon_search_skips_active() {
        let catalog = AddonCatalog::builtin();
        let active = HashSet::from(["cold-fermentation".to_string()]);
        let ids: Vec<&str> = catalog
            .suggestions("fermentation", &active)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["room-temp-fermentation"]);
        assert_eq!(catalog.suggestions("", &active).len(), 10);
        assert_eq!(catalog.get("eggs").unwrap().section, AddonSection::Addons);
    }
}
