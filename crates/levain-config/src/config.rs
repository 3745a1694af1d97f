//! Configuration types and loading.
//!
//! [`LevainConfig`] is the contents of `.levain/config.yaml`. Loading
//! layers built-in defaults, then the file, then `LEVAIN_*` environment
//! variables (`LEVAIN_RECIPE__SALT_PERCENT=2` sets `recipe.salt-percent`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use levain_core::LeaveningType;
use levain_core::RecipeInputs;
use levain_core::leavening::{LeaveningDefaults, ScalingTable};

/// File name of the configuration inside `.levain/`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Prefix of environment variables layered over the file.
pub const ENV_PREFIX: &str = "LEVAIN_";

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("failed to write config file: {0}")]
    WriteError(#[from] serde_yaml::Error),

    #[error("failed to load configuration: {0}")]
    LoadError(#[from] figment::Error),

    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Whether CLI output uses colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Default recipe inputs for `calc` and `export`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RecipeDefaults {
    pub dough_portions: u32,
    pub portion_weight: f64,
    pub hydration_percent: f64,
    pub salt_percent: f64,
    pub leavening_type: LeaveningType,
    /// Overrides the per-leavening default when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yeast_percent: Option<f64>,
}

impl Default for RecipeDefaults {
    fn default() -> Self {
        let inputs = RecipeInputs::default();
        Self {
            dough_portions: inputs.dough_portions,
            portion_weight: inputs.portion_weight,
            hydration_percent: inputs.hydration_percent,
            salt_percent: inputs.salt_percent,
            leavening_type: inputs.leavening_type,
            yeast_percent: None,
        }
    }
}

impl RecipeDefaults {
    /// Build recipe inputs, seeding leavening-dependent fields from
    /// `leavening`.
    pub fn to_inputs(&self, leavening: &LeaveningDefaults) -> RecipeInputs {
        let mut inputs = RecipeInputs {
            dough_portions: self.dough_portions,
            portion_weight: self.portion_weight,
            hydration_percent: self.hydration_percent,
            salt_percent: self.salt_percent,
            ..RecipeInputs::default()
        }
        .with_leavening(self.leavening_type.clone(), leavening);
        if let Some(pct) = self.yeast_percent {
            inputs.yeast_percent = pct;
        }
        inputs
    }
}

/// Step template settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TemplatesConfig {
    /// Custom catalog file; relative paths resolve against the working
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Output preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Emit JSON even without `--json`.
    pub json: bool,
    pub color: ColorChoice,
}

/// The contents of `.levain/config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LevainConfig {
    pub recipe: RecipeDefaults,
    pub leavening: LeaveningDefaults,
    /// Yeast potency overrides per leavening type.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub scaling: HashMap<LeaveningType, f64>,
    pub templates: TemplatesConfig,
    pub output: OutputConfig,
}

impl LevainConfig {
    /// Default recipe inputs for new recipes.
    pub fn default_inputs(&self) -> RecipeInputs {
        self.recipe.to_inputs(&self.leavening)
    }

    /// The scaling table handed to the calculator.
    pub fn scaling_table(&self) -> ScalingTable {
        ScalingTable::with_overrides(self.scaling.clone())
    }

    /// Reject values the calculator cannot use.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("recipe.portion-weight", self.recipe.portion_weight),
            ("recipe.hydration-percent", self.recipe.hydration_percent),
            ("recipe.salt-percent", self.recipe.salt_percent),
            ("leavening.fallback-yeast-percent", self.leavening.fallback_yeast_percent),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(key, format!("must be a non-negative number, got {}", value)));
            }
        }
        if self.recipe.dough_portions == 0 {
            return Err(invalid("recipe.dough-portions", "must be at least 1".to_string()));
        }
        for (leavening, factor) in &self.scaling {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(invalid(
                    &format!("scaling.{}", leavening),
                    format!("must be a positive number, got {}", factor),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason,
    }
}

/// The provider stack for a `.levain/` directory: defaults, then
/// `config.yaml` (when present and non-empty), then `LEVAIN_*` variables.
pub fn figment(levain_dir: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(LevainConfig::default()));

    if let Some(dir) = levain_dir {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() && !std::fs::read_to_string(&path)?.trim().is_empty() {
            debug!(path = %path.display(), "reading config file");
            figment = figment.merge(Yaml::file(path));
        }
    }

    Ok(figment.merge(Env::prefixed(ENV_PREFIX).map(|key| {
        key.as_str().replace("__", ".").replace('_', "-").into()
    })))
}

/// Load and validate the configuration. A missing `.levain/` directory or
/// file yields the defaults (plus any environment overrides).
pub fn load_config(levain_dir: Option<&Path>) -> Result<LevainConfig> {
    let config: LevainConfig = figment(levain_dir)?.extract()?;
    config.validate()?;
    Ok(config)
}

/// Write `config.yaml` into `levain_dir`, creating the directory.
pub fn save_config(levain_dir: &Path, config: &LevainConfig) -> Result<()> {
    std::fs::create_dir_all(levain_dir)?;
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(levain_dir.join(CONFIG_FILE_NAME), yaml)?;
    Ok(())
}
