//! Template catalog data model.
//!
//! Field names follow the browser app (`defaultDuration`, `defaultValue`)
//! in both TOML and JSON, so a template list exported from the app loads
//! as-is.

use serde::{Deserialize, Serialize};

use levain_core::IngredientType;

fn default_unit() -> String {
    "g".to_string()
}

/// Errors from loading or checking template catalogs.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("template catalog not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An ingredient a template pre-fills into its step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateIngredient {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: IngredientType,

    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default)]
    pub default_value: f64,
}

/// A reusable step definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTemplate {
    pub name: String,

    /// Free-text duration, parsed like any step duration.
    #[serde(default)]
    pub default_duration: String,

    /// Target temperature in °C.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<TemplateIngredient>,
}

/// An ordered list of step templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    #[serde(default)]
    pub templates: Vec<StepTemplate>,

    /// Where this catalog was loaded from (set by the parser).
    #[serde(skip)]
    pub source: String,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<StepTemplate>) -> Self {
        Self {
            templates,
            source: String::new(),
        }
    }

    /// Exact (case-insensitive) lookup by name.
    pub fn get(&self, name: &str) -> Option<&StepTemplate> {
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
