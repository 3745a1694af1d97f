//! The recipe document: name, main-dough inputs, add-ons and steps.
//!
//! This is the JSON shape the browser app copies to the clipboard, so a
//! document written there loads here unchanged and vice versa.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::addon::{Addon, AddonEntry};
use crate::calc::RecipeCalculator;
use crate::recipe::{RecipeInputs, RecipeOutputs};
use crate::step::Step;

/// Errors from reading or writing recipe documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_recipe_name() -> String {
    "New Recipe".to_string()
}

/// A complete, shareable recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDocument {
    #[serde(default = "default_recipe_name")]
    pub recipe_name: String,

    /// Main-dough inputs.
    #[serde(default)]
    pub mandatory: RecipeInputs,

    /// Active add-ons keyed by add-on id.
    #[serde(default)]
    pub addons: BTreeMap<String, AddonEntry>,

    /// Ordered process steps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl Default for RecipeDocument {
    fn default() -> Self {
        Self::new(default_recipe_name(), RecipeInputs::default())
    }
}

impl RecipeDocument {
    pub fn new(recipe_name: impl Into<String>, mandatory: RecipeInputs) -> Self {
        Self {
            recipe_name: recipe_name.into(),
            mandatory,
            addons: BTreeMap::new(),
            steps: Vec::new(),
        }
    }

    /// The document's add-ons as typed values, ordered by id.
    pub fn typed_addons(&self) -> Vec<Addon> {
        self.addons
            .iter()
            .map(|(id, entry)| Addon::from_entry(id, entry))
            .collect()
    }

    /// Insert or replace an add-on.
    pub fn set_addon(&mut self, addon: &Addon) {
        self.addons.insert(addon.id().to_string(), addon.to_entry());
    }

    /// Remove an add-on, returning whether it was present.
    pub fn remove_addon(&mut self, id: &str) -> bool {
        self.addons.remove(id).is_some()
    }

    /// Run the calculator over this document's inputs and add-ons.
    pub fn calculate(&self, calculator: &RecipeCalculator) -> RecipeOutputs {
        calculator.calculate(&self.mandatory, &self.typed_addons())
    }

    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Write the document as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addon::FlourUnit;
    use crate::enums::LeaveningType;
    use pretty_assertions::assert_eq;

    const APP_EXPORT: &str = r#"{
      "recipeName": "Milk bread",
      "mandatory": {
        "doughPortions": 2,
        "portionWeight": 450,
        "hydrationPercent": 68,
        "saltPercent": 2,
        "leaveningType": "instant-yeast",
        "yeastPercent": 0.158,
        "inoculatedFlourPercent": 0,
        "prefermentHydration": 100
      },
      "addons": {
        "tangzhong": { "flour": 30, "hydration": 200 },
        "butter": { "amount": 40 }
      }
    }"#;

    #[test]
    fn loads_app_export() {
        let doc = RecipeDocument::from_json_str(APP_EXPORT).unwrap();
        assert_eq!(doc.recipe_name, "Milk bread");
        assert_eq!(doc.mandatory.dough_portions, 2);
        assert_eq!(doc.mandatory.leavening_type, LeaveningType::InstantYeast);
        assert_eq!(
            doc.typed_addons(),
            vec![
                Addon::Generic {
                    id: "butter".into(),
                    amount: 40.0
                },
                Addon::TangZhong {
                    flour: 30.0,
                    hydration: 200.0
                },
            ]
        );
        assert!(doc.steps.is_empty());
    }

    #[test]
    fn calculate_uses_addons() {
        let doc = RecipeDocument::from_json_str(APP_EXPORT).unwrap();
        let out = doc.calculate(&RecipeCalculator::default());
        assert_eq!(out.ingredients.tangzhong.water, 60.0);
        assert_eq!(out.ingredients.addons.get("butter"), Some(&40.0));
    }

    #[test]
    fn empty_object_is_a_default_document() {
        let doc = RecipeDocument::from_json_str("{}").unwrap();
        assert_eq!(doc, RecipeDocument::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = RecipeDocument::from_json_str("{\"mandatory\": 3}").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes").join("loaf.json");

        let mut doc = RecipeDocument::new("Loaf", RecipeInputs::default());
        doc.set_addon(&Addon::WholeWheatFlour {
            amount: 20.0,
            unit: FlourUnit::Percent,
        });
        doc.steps.push(Step::new("1", "Day1. Autolyse", "30 minutes"));
        doc.save(&path).unwrap();

        let loaded = RecipeDocument::load(&path).unwrap();
        assert_eq!(loaded, doc);
        assert!(loaded.clone().remove_addon("whole-wheat-flour"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RecipeDocument::load(Path::new("/nonexistent/recipe.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }
}
