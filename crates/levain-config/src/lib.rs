//! Configuration management for levain.
//!
//! This crate handles loading and saving `.levain/config.yaml`, finding
//! the `.levain/` directory, and layering `LEVAIN_*` environment
//! variables over the file.

pub mod config;
pub mod levain_dir;

pub use config::{ColorChoice, ConfigError, LevainConfig, RecipeDefaults, load_config, save_config};
pub use levain_dir::{ensure_levain_dir, find_levain_dir};
