//! Step templates and step scheduling for levain recipes.
//!
//! Templates are reusable step definitions ("Autolyse", "Bulk
//! Fermentation", ...) that get stamped into a recipe's step list. This
//! crate loads template catalogs from TOML or JSON, ships the built-in
//! catalog, and turns a recipe's steps into grouped listings and a
//! wall-clock timeline.

pub mod builtin;
pub mod engine;
pub mod parser;
pub mod schedule;
pub mod types;

pub use types::{StepTemplate, TemplateCatalog, TemplateError, TemplateIngredient};
