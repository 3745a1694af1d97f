//! Process steps and the ingredients they use.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::enums::IngredientType;
use crate::step_name::{ParsedStepName, format_step_name, parse_step_name};

/// Helper for `skip_serializing_if` on `Vec` fields.
fn is_empty_vec<T>(v: &Vec<T>) -> bool {
    v.is_empty()
}

fn default_unit() -> String {
    "g".to_string()
}

/// Opaque step identifier.
///
/// Serialized as a string; integer ids (as written by the browser app)
/// are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(String);

impl StepId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StepId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for StepId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StepId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// An ingredient used by a single step (e.g. the flour of an autolyse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepIngredient {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: IngredientType,

    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default)]
    pub default_value: f64,

    /// Entered amount; `None` until the baker fills it in.
    #[serde(default)]
    pub value: Option<f64>,

    /// Fraction of this ingredient's mass that counts as water (milk 0.9).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<f64>,
}

impl StepIngredient {
    /// The entered amount, or the default when nothing was entered.
    pub fn amount(&self) -> f64 {
        self.value.unwrap_or(self.default_value)
    }

    /// Water-equivalent grams: water-type amounts times `scaling`
    /// (1.0 when absent). Other types contribute nothing.
    pub fn water_equivalent(&self) -> f64 {
        match self.kind {
            IngredientType::Water => self.amount() * self.scaling.unwrap_or(1.0),
            _ => 0.0,
        }
    }
}

/// One step of the bake (autolyse, bulk fermentation, bake, ...).
///
/// `name` may carry a group prefix (`"Day1. Mix"`); see
/// [`crate::step_name`]. `duration` is free text and may be invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: StepId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub duration: String,

    /// Target temperature in °C.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Repetitions (e.g. number of stretch-and-fold sets).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    #[serde(default, skip_serializing_if = "is_empty_vec")]
    pub ingredients: Vec<StepIngredient>,
}

impl Step {
    /// A step with only a name and a duration.
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            id: StepId::new(id),
            name: name.into(),
            duration: duration.into(),
            temperature: None,
            reps: None,
            ingredients: Vec::new(),
        }
    }

    pub fn parsed_name(&self) -> ParsedStepName {
        parse_step_name(&self.name)
    }

    pub fn group_id(&self) -> Option<String> {
        self.parsed_name().group_id
    }

    pub fn title(&self) -> String {
        self.parsed_name().title
    }

    /// Replace the group id, keeping the title.
    pub fn set_group(&mut self, group_id: Option<&str>) {
        let title = self.title();
        self.name = format_step_name(group_id, &title);
    }

    /// Replace the title, keeping the group id.
    pub fn set_title(&mut self, title: &str) {
        let group = self.group_id();
        self.name = format_step_name(group.as_deref(), title);
    }

    /// Grams of flour-type ingredients in this step.
    pub fn flour_grams(&self) -> f64 {
        self.ingredients
            .iter()
            .filter(|i| i.kind == IngredientType::Flour)
            .map(StepIngredient::amount)
            .sum()
    }

    /// Water-equivalent grams of this step's ingredients.
    pub fn water_grams(&self) -> f64 {
        self.ingredients.iter().map(StepIngredient::water_equivalent).sum()
    }
}
