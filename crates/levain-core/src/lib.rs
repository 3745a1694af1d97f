//! Core types and calculations for the levain dough calculator.
//!
//! - [`calc`]: baker's-percentage arithmetic turning recipe inputs into grams
//! - [`step_name`]: the `"group. title"` naming convention for steps
//! - [`step`], [`recipe`], [`addon`], [`document`]: the recipe document model
//! - [`catalog`]: read-only ingredient and add-on reference data

pub mod addon;
pub mod calc;
pub mod catalog;
pub mod document;
pub mod enums;
pub mod leavening;
pub mod recipe;
pub mod step;
pub mod step_name;

pub use calc::RecipeCalculator;
pub use document::RecipeDocument;
pub use enums::{IngredientType, LeaveningType};
pub use recipe::{RecipeInputs, RecipeOutputs};
pub use step::{Step, StepId, StepIngredient};
pub use step_name::{ParsedStepName, format_step_name, is_valid_group_id, parse_step_name};
