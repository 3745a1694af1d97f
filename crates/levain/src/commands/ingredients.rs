//! `levain ingredients` -- search the ingredient catalog.

use anyhow::{Result, bail};

use levain_core::StepIngredient;
use levain_core::catalog::{CatalogIngredient, IngredientCatalog};

use crate::cli::IngredientsArgs;
use crate::context::RuntimeContext;
use crate::output::{format_number, output_json, output_table};

/// Execute the `levain ingredients` command.
pub fn run(ctx: &RuntimeContext, args: &IngredientsArgs) -> Result<()> {
    let catalog = IngredientCatalog::builtin();
    let query = args.query.as_deref().unwrap_or("");
    let matches = select(&catalog, query);

    if let Some(amount) = args.amount {
        if !amount.is_finite() || amount < 0.0 {
            bail!("amount must be a non-negative number, got {}", amount);
        }
        let ingredients: Vec<StepIngredient> = matches
            .iter()
            .map(|i| i.to_step_ingredient(amount))
            .collect();
        output_json(&ingredients);
        return Ok(());
    }

    if ctx.json {
        output_json(&matches);
        return Ok(());
    }

    if matches.is_empty() {
        if !ctx.quiet {
            println!("No ingredients match '{}'.", query);
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = matches
        .iter()
        .map(|i| {
            vec![
                i.name.clone(),
                i.kind.as_ref().map(|k| k.to_string()).unwrap_or_else(|| "generic".into()),
                i.scaling.map(format_number).unwrap_or_default(),
            ]
        })
        .collect();
    output_table(&["NAME", "TYPE", "WATER"], &rows);
    Ok(())
}

/// An exact name match wins over substring matches.
fn select<'a>(catalog: &'a IngredientCatalog, query: &str) -> Vec<&'a CatalogIngredient> {
    match catalog.find(query.trim()) {
        Some(exact) => vec![exact],
        None => catalog.suggestions(query),
    }
}
