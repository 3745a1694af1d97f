//! Template search, instantiation and catalog checks.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use levain_core::{Step, StepIngredient, StepId};
use levain_timeparsing::parse_duration;

use crate::types::{StepTemplate, TemplateCatalog};

/// Templates whose name contains `query` (case-insensitive), in catalog
/// order. A blank query matches everything.
pub fn search<'a>(catalog: &'a TemplateCatalog, query: &str) -> Vec<&'a StepTemplate> {
    let needle = query.trim().to_lowercase();
    catalog
        .templates
        .iter()
        .filter(|t| needle.is_empty() || t.name.to_lowercase().contains(&needle))
        .collect()
}

/// Stamp a template into a step with the given id.
///
/// Optional fields are copied as-is; every ingredient starts with its
/// value set to the template default.
pub fn instantiate(template: &StepTemplate, id: StepId) -> Step {
    Step {
        id,
        name: template.name.clone(),
        duration: template.default_duration.clone(),
        temperature: template.temperature,
        reps: template.reps,
        ingredients: template
            .ingredients
            .iter()
            .map(|i| StepIngredient {
                name: i.name.clone(),
                kind: i.kind.clone(),
                unit: i.unit.clone(),
                default_value: i.default_value,
                value: Some(i.default_value),
                scaling: None,
            })
            .collect(),
    }
}

/// A problem found by [`check_catalog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CatalogIssue {
    EmptyName { index: usize },
    DuplicateName { name: String },
    InvalidDuration { name: String, duration: String },
    ZeroReps { name: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName { index } => write!(f, "template #{} has an empty name", index + 1),
            Self::DuplicateName { name } => write!(f, "duplicate template name '{}'", name),
            Self::InvalidDuration { name, duration } => {
                write!(f, "'{}': unrecognized default duration '{}'", name, duration)
            }
            Self::ZeroReps { name } => write!(f, "'{}': reps must be at least 1", name),
        }
    }
}

/// Validate every template in a catalog. An empty result means the
/// catalog is clean.
pub fn check_catalog(catalog: &TemplateCatalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, template) in catalog.templates.iter().enumerate() {
        let name = template.name.trim();
        if name.is_empty() {
            issues.push(CatalogIssue::EmptyName { index });
        } else if !seen.insert(name.to_lowercase()) {
            issues.push(CatalogIssue::DuplicateName {
                name: name.to_string(),
            });
        }

        if !parse_duration(&template.default_duration).is_valid {
            issues.push(CatalogIssue::InvalidDuration {
                name: name.to_string(),
                duration: template.default_duration.clone(),
            });
        }

        if template.reps == Some(0) {
            issues.push(CatalogIssue::ZeroReps {
                name: name.to_string(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_catalog;
    use crate::types::TemplateIngredient;
    use levain_core::IngredientType;
    use pretty_assertions::assert_eq;

    fn template(name: &str, duration: &str) -> StepTemplate {
        StepTemplate {
            name: name.to_string(),
            default_duration: duration.to_string(),
            temperature: None,
            reps: None,
            ingredients: Vec::new(),
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = builtin_catalog().unwrap();
        let names: Vec<&str> = search(&catalog, "FERM").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Cold Fermentation", "Bulk Fermentation"]);
    }

    #[test]
    fn search_blank_returns_all() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(search(&catalog, "  ").len(), catalog.len());
        assert!(search(&catalog, "croissant").is_empty());
    }

    #[test]
    fn instantiate_copies_fields() {
        let mut t = template("Levain Build", "6 hours");
        t.temperature = Some(26.0);
        t.reps = Some(2);
        t.ingredients.push(TemplateIngredient {
            name: "rye flour".into(),
            kind: IngredientType::Flour,
            unit: "g".into(),
            default_value: 40.0,
        });

        let step = instantiate(&t, StepId::new("7"));
        assert_eq!(step.id.as_str(), "7");
        assert_eq!(step.name, "Levain Build");
        assert_eq!(step.duration, "6 hours");
        assert_eq!(step.temperature, Some(26.0));
        assert_eq!(step.reps, Some(2));
        assert_eq!(step.ingredients[0].value, Some(40.0));
        assert_eq!(step.flour_grams(), 40.0);
    }

    #[test]
    fn instantiate_without_optionals() {
        let step = instantiate(&template("Mix Dough", "10 minutes"), StepId::new("a"));
        assert_eq!(step.temperature, None);
        assert_eq!(step.reps, None);
        assert!(step.ingredients.is_empty());
    }

    #[test]
    fn check_reports_each_problem() {
        let mut zero = template("Fold", "20 minutes");
        zero.reps = Some(0);
        let catalog = TemplateCatalog::new(vec![
            template("Rest", "1h"),
            template("rest", "2h"),
            template("", "5 minutes"),
            template("Soak", "overnight"),
            zero,
        ]);

        assert_eq!(
            check_catalog(&catalog),
            vec![
                CatalogIssue::DuplicateName {
                    name: "rest".into()
                },
                CatalogIssue::EmptyName { index: 2 },
                CatalogIssue::InvalidDuration {
                    name: "Soak".into(),
                    duration: "overnight".into()
                },
                CatalogIssue::ZeroReps {
                    name: "Fold".into()
                },
            ]
        );
    }

    #[test]
    fn issue_messages() {
        assert_eq!(
            CatalogIssue::EmptyName { index: 0 }.to_string(),
            "template #1 has an empty name"
        );
        assert_eq!(
            CatalogIssue::ZeroReps { name: "Fold".into() }.to_string(),
            "'Fold': reps must be at least 1"
        );
    }
}
