//! `levain templates` -- list, search and check step templates.

use anyhow::{Result, bail};

use levain_formula::engine::{check_catalog, search};
use levain_formula::{StepTemplate, TemplateCatalog};
use levain_timeparsing::parse_duration;

use crate::cli::{TemplatesArgs, TemplatesCommands};
use crate::context::RuntimeContext;
use crate::output::{format_number, output_json, output_table};

/// Execute the `levain templates` command.
pub fn run(ctx: &RuntimeContext, args: &TemplatesArgs) -> Result<()> {
    match &args.command {
        Some(TemplatesCommands::Check { file }) => {
            let catalog = ctx.template_catalog(file.as_deref())?;
            check(ctx, &catalog)
        }
        None => {
            let catalog = ctx.template_catalog(None)?;
            list(ctx, &catalog, args.query.as_deref().unwrap_or(""));
            Ok(())
        }
    }
}

fn list(ctx: &RuntimeContext, catalog: &TemplateCatalog, query: &str) {
    let matches = search(catalog, query);

    if ctx.json {
        output_json(&matches);
        return;
    }

    if matches.is_empty() {
        if !ctx.quiet {
            println!("No templates match '{}'.", query);
        }
        return;
    }

    let rows: Vec<Vec<String>> = matches.iter().map(|t| template_row(ctx, t)).collect();
    output_table(&["NAME", "DURATION", "TEMP", "REPS", "INGREDIENTS"], &rows);
}

fn template_row(ctx: &RuntimeContext, t: &StepTemplate) -> Vec<String> {
    let ingredients: Vec<String> = t
        .ingredients
        .iter()
        .map(|i| format!("{} {}{}", i.name, format_number(i.default_value), i.unit))
        .collect();
    vec![
        t.name.clone(),
        ctx.style
            .duration(&t.default_duration, &parse_duration(&t.default_duration)),
        t.temperature
            .map(|c| format!("{} °C", format_number(c)))
            .unwrap_or_default(),
        t.reps.map(|r| r.to_string()).unwrap_or_default(),
        ingredients.join(", "),
    ]
}

fn check(ctx: &RuntimeContext, catalog: &TemplateCatalog) -> Result<()> {
    let issues = check_catalog(catalog);

    if ctx.json {
        output_json(&serde_json::json!({
            "source": catalog.source,
            "templates": catalog.len(),
            "issues": issues,
        }));
    } else {
        for issue in &issues {
            println!("{} {}", ctx.style.fail_icon(), issue);
        }
        if issues.is_empty() && !ctx.quiet {
            println!(
                "{} {} templates in {} look fine",
                ctx.style.pass_icon(),
                catalog.len(),
                catalog.source
            );
        }
    }

    if !issues.is_empty() {
        bail!("{} problem(s) in {}", issues.len(), catalog.source);
    }
    Ok(())
}
