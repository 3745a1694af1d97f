//! The template catalog shipped with levain.

use crate::parser::parse_toml;
use crate::types::{TemplateCatalog, TemplateError};

const BUILTIN_TOML: &str = include_str!("../templates/builtin.toml");

/// Label used as the `source` of the built-in catalog.
pub const BUILTIN_SOURCE: &str = "<builtin>";

/// Parse the embedded built-in catalog.
pub fn builtin_catalog() -> Result<TemplateCatalog, TemplateError> {
    let mut catalog = parse_toml(BUILTIN_TOML)?;
    catalog.source = BUILTIN_SOURCE.to_string();
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::check_catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = builtin_catalog().unwrap();
        let names: Vec<&str> = catalog.templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "TangZhong",
                "Stretch and Fold",
                "Cold Fermentation",
                "Autolyse",
                "Mix Dough",
                "Bulk Fermentation",
                "Pre-shape",
                "Final Shape",
                "Final Proof",
                "Bake",
            ]
        );
        assert_eq!(catalog.source, BUILTIN_SOURCE);
    }

    #[test]
    fn builtin_catalog_is_clean() {
        let catalog = builtin_catalog().unwrap();
        assert!(check_catalog(&catalog).is_empty());
    }

    #[test]
    fn autolyse_ingredients() {
        let catalog = builtin_catalog().unwrap();
        let autolyse = catalog.get("autolyse").unwrap();
        let values: Vec<f64> = autolyse.ingredients.iter().map(|i| i.default_value).collect();
        assert_eq!(values, vec![500.0, 360.0]);
    }
}
