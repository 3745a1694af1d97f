//! Parse template catalogs (TOML and JSON) and resolve catalog paths.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::types::{StepTemplate, TemplateCatalog, TemplateError};

/// File names probed inside a `.levain/` directory, in order.
const CATALOG_FILE_NAMES: &[&str] = &["templates.toml", "templates.json"];

/// Parse a catalog from a TOML string (`[[templates]]` tables).
pub fn parse_toml(content: &str) -> Result<TemplateCatalog, TemplateError> {
    toml::from_str(content).map_err(|e| TemplateError::Parse(e.to_string()))
}

/// Parse a catalog from a JSON string.
///
/// Accepts either `{"templates": [...]}` or a bare array of templates.
pub fn parse_json(content: &str) -> Result<TemplateCatalog, TemplateError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCatalog {
        Wrapped(TemplateCatalog),
        List(Vec<StepTemplate>),
    }

    let raw: RawCatalog =
        serde_json::from_str(content).map_err(|e| TemplateError::Parse(e.to_string()))?;
    match raw {
        RawCatalog::Wrapped(catalog) => Ok(catalog),
        RawCatalog::List(templates) => Ok(TemplateCatalog::new(templates)),
    }
}

/// Load a catalog from a file path (TOML vs JSON by extension).
pub fn load_catalog(path: &Path) -> Result<TemplateCatalog, TemplateError> {
    let content = std::fs::read_to_string(path)?;
    let mut catalog = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml(&content)?,
        Some("json") => parse_json(&content)?,
        _ => parse_json(&content).or_else(|_| parse_toml(&content))?,
    };
    catalog.source = path.display().to_string();
    debug!(path = %path.display(), count = catalog.len(), "loaded template catalog");
    Ok(catalog)
}

/// Locate a template catalog.
///
/// Search order:
/// 1. `configured` (relative paths resolve against `cwd`); must exist
/// 2. `templates.toml` / `templates.json` in the `.levain/` directory
///
/// Returns `Ok(None)` when nothing is configured and no catalog file
/// exists, meaning the built-in catalog applies.
pub fn find_catalog(
    configured: Option<&Path>,
    levain_dir: Option<&Path>,
    cwd: &Path,
) -> Result<Option<PathBuf>, TemplateError> {
    if let Some(path) = configured {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        if path.is_file() {
            return Ok(Some(path));
        }
        return Err(TemplateError::NotFound(path.display().to_string()));
    }

    if let Some(dir) = levain_dir {
        for name in CATALOG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Ok(Some(candidate));
            }
        }
    }

    Ok(None)
}
