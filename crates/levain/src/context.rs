//! Runtime context for command execution.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use levain_config::{ColorChoice, LevainConfig, find_levain_dir, load_config};
use levain_core::RecipeCalculator;
use levain_formula::builtin::builtin_catalog;
use levain_formula::parser::{find_catalog, load_catalog};
use levain_formula::TemplateCatalog;
use levain_ui::Style;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Working directory the command was started in.
    pub cwd: PathBuf,

    /// Resolved `.levain/` directory, if any.
    pub levain_dir: Option<PathBuf>,

    /// The `--config-dir` value, resolved against `cwd`.
    pub config_dir_flag: Option<PathBuf>,

    /// Loaded configuration (defaults when no file exists).
    pub config: LevainConfig,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,

    /// Colour decision for human-readable output.
    pub style: Style,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// `--config-dir` wins over `$LEVAIN_DIR`, which wins over walking up
    /// from the working directory.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().context("failed to get current directory")?;
        let config_dir_flag = global.config_dir.as_ref().map(|dir| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                cwd.join(dir)
            }
        });
        let levain_dir = config_dir_flag.clone().or_else(|| find_levain_dir(&cwd));
        debug!(levain_dir = ?levain_dir, "resolved configuration directory");

        let config = load_config(levain_dir.as_deref()).context("failed to load configuration")?;

        let style = match config.output.color {
            ColorChoice::Auto => Style::detect(),
            ColorChoice::Always => Style::colored(),
            ColorChoice::Never => Style::plain(),
        };

        Ok(Self {
            cwd,
            levain_dir,
            config_dir_flag,
            json: global.json || config.output.json,
            quiet: global.quiet,
            config,
            style,
        })
    }

    /// A calculator using the configured scaling overrides.
    pub fn calculator(&self) -> RecipeCalculator {
        RecipeCalculator::new(self.config.scaling_table())
    }

    /// The active template catalog: `file` if given, else the configured
    /// or discovered catalog, else the built-in one.
    pub fn template_catalog(&self, file: Option<&Path>) -> Result<TemplateCatalog> {
        let configured = file.or(self.config.templates.path.as_deref());
        let found = find_catalog(configured, self.levain_dir.as_deref(), &self.cwd)?;
        match found {
            Some(path) => load_catalog(&path)
                .with_context(|| format!("failed to load template catalog {}", path.display())),
            None => Ok(builtin_catalog()?),
        }
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
