//! `levain addons` -- list add-ons for the main dough.

use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::Serialize;

use levain_core::RecipeDocument;
use levain_core::catalog::{AddonCatalog, AddonInfo, AddonSection};

use crate::cli::AddonsArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

#[derive(Debug, Serialize)]
struct AddonView<'a> {
    #[serde(flatten)]
    info: &'a AddonInfo,
    active: bool,
}

/// Execute the `levain addons` command.
pub fn run(ctx: &RuntimeContext, args: &AddonsArgs) -> Result<()> {
    let active: HashSet<String> = match &args.file {
        Some(path) => {
            let path = ctx.resolve(path);
            let doc = RecipeDocument::load(&path)
                .with_context(|| format!("failed to load recipe {}", path.display()))?;
            doc.addons.keys().cloned().collect()
        }
        None => HashSet::new(),
    };

    let catalog = AddonCatalog::builtin();
    let views: Vec<AddonView<'_>> = catalog
        .suggestions(args.query.as_deref().unwrap_or(""), &active)
        .into_iter()
        .map(|info| AddonView {
            active: active.contains(&info.id),
            info,
        })
        .collect();

    if ctx.json {
        output_json(&views);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = views
        .iter()
        .map(|v| {
            vec![
                v.info.id.clone(),
                v.info.name.clone(),
                match v.info.section {
                    AddonSection::Addons => "ingredient".to_string(),
                    AddonSection::Processes => "process".to_string(),
                },
                if v.active {
                    ctx.style.pass_icon()
                } else {
                    String::new()
                },
            ]
        })
        .collect();
    output_table(&["ID", "NAME", "KIND", "ACTIVE"], &rows);
    Ok(())
}
