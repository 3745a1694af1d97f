//! `levain calc` -- compute ingredient weights for a recipe.

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::{debug, warn};

use levain_core::addon::{
    Addon, AddonEntry, COLD_FERMENTATION, FlourUnit, ROOM_TEMP_FERMENTATION, TANGZHONG,
    WHOLE_WHEAT_FLOUR,
};
use levain_core::{LeaveningType, RecipeDocument, RecipeInputs, RecipeOutputs};
use levain_timeparsing::{DurationParse, parse_duration, try_parse_duration};

use crate::cli::{CalcArgs, RecipeArgs};
use crate::context::RuntimeContext;
use crate::output::{format_grams, format_number, output_json, output_table};

/// A timed process add-on as reported by `calc`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessView {
    id: String,
    duration: String,
    parsed: DurationParse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalcView<'a> {
    recipe_name: &'a str,
    inputs: &'a RecipeInputs,
    #[serde(flatten)]
    outputs: &'a RecipeOutputs,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    processes: Vec<ProcessView>,
}

/// Execute the `levain calc` command.
pub fn run(ctx: &RuntimeContext, args: &CalcArgs) -> Result<()> {
    let doc = build_document(ctx, &args.recipe)?;
    let outputs = doc.calculate(&ctx.calculator());

    let processes: Vec<ProcessView> = doc
        .typed_addons()
        .into_iter()
        .filter_map(|addon| match addon {
            Addon::Fermentation { id, duration } => Some(ProcessView {
                parsed: parse_duration(&duration),
                id,
                duration,
            }),
            _ => None,
        })
        .collect();

    if ctx.json {
        output_json(&CalcView {
            recipe_name: &doc.recipe_name,
            inputs: &doc.mandatory,
            outputs: &outputs,
            processes,
        });
        return Ok(());
    }

    let style = &ctx.style;
    let inputs = &doc.mandatory;
    if !ctx.quiet {
        println!(
            "{} {}",
            style.bold(&doc.recipe_name),
            style.muted(&format!(
                "({} x {} = {}, {}% hydration, {})",
                inputs.dough_portions,
                format_grams(inputs.portion_weight),
                format_grams(inputs.dough_weight()),
                format_number(inputs.hydration_percent),
                inputs.leavening_type
            ))
        );
        println!();
    }

    output_table(&["INGREDIENT", "AMOUNT"], &ingredient_rows(&outputs));

    let stats = &outputs.stats;
    println!("{}", style.separator());
    println!("{}", style.category("totals"));
    println!("  flour      {}", style.accent(&format_grams(stats.total_flour)));
    println!("  dough      {}", style.accent(&format_grams(stats.total_weight)));
    println!("  hydration  {}%", format_number(stats.actual_hydration));

    if !processes.is_empty() {
        println!();
        println!("{}", style.category("processes"));
        for p in &processes {
            println!("  {}  {}", p.id, style.duration(&p.duration, &p.parsed));
        }
    }

    Ok(())
}

fn ingredient_rows(outputs: &RecipeOutputs) -> Vec<Vec<String>> {
    let ing = &outputs.ingredients;
    let mut rows = vec![
        row("flour", ing.flour),
        row("water", ing.water),
        row("salt", ing.salt),
        row("yeast", ing.yeast),
    ];
    if ing.preferment.total() > 0.0 {
        rows.push(row("preferment flour", ing.preferment.flour));
        rows.push(row("preferment water", ing.preferment.water));
    }
    if ing.whole_wheat_flour > 0.0 {
        rows.push(row("whole wheat flour", ing.whole_wheat_flour));
    }
    if ing.tangzhong.total() > 0.0 {
        rows.push(row("tangzhong flour", ing.tangzhong.flour));
        rows.push(row("tangzhong water", ing.tangzhong.water));
    }
    for (id, grams) in &ing.addons {
        rows.push(row(id, *grams));
    }
    rows
}

fn row(name: &str, grams: f64) -> Vec<String> {
    vec![name.to_string(), format_grams(grams)]
}

/// Build the recipe document for `calc` and `export`: configured
/// defaults, replaced by `--file`, then adjusted by individual flags.
pub fn build_document(ctx: &RuntimeContext, args: &RecipeArgs) -> Result<RecipeDocument> {
    let mut doc = match &args.file {
        Some(path) => {
            let path = ctx.resolve(path);
            debug!(path = %path.display(), "loading recipe");
            RecipeDocument::load(&path)
                .with_context(|| format!("failed to load recipe {}", path.display()))?
        }
        None => RecipeDocument::new("New Recipe", ctx.config.default_inputs()),
    };

    if let Some(name) = &args.name {
        doc.recipe_name = name.clone();
    }

    if let Some(leavening) = &args.leavening {
        let leavening = LeaveningType::from(leavening.as_str());
        if !leavening.is_builtin() {
            warn!(%leavening, "unknown leavening type, using fallback yeast settings");
        }
        doc.mandatory = doc
            .mandatory
            .clone()
            .with_leavening(leavening, &ctx.config.leavening);
    }

    let inputs = &mut doc.mandatory;
    if let Some(n) = args.portions {
        inputs.dough_portions = n;
    }
    if let Some(w) = args.portion_weight {
        inputs.portion_weight = non_negative("portion weight", w)?;
    }
    if let Some(h) = args.hydration {
        inputs.hydration_percent = non_negative("hydration", h)?;
    }
    if let Some(s) = args.salt {
        inputs.salt_percent = non_negative("salt", s)?;
    }
    if let Some(y) = args.yeast {
        inputs.yeast_percent = non_negative("yeast", y)?;
    }
    if let Some(p) = args.inoculated_flour {
        inputs.inoculated_flour_percent = non_negative("inoculated flour", p)?;
    }
    if let Some(h) = args.preferment_hydration {
        inputs.preferment_hydration = non_negative("preferment hydration", h)?;
    }

    for raw in &args.addons {
        let addon = parse_addon(raw)?;
        doc.set_addon(&addon);
    }

    Ok(doc)
}

fn non_negative(what: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        bail!("{} must be a non-negative number, got {}", what, value);
    }
    Ok(value)
}

fn parse_number(what: &str, text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid {} '{}'", what, text.trim()))?;
    non_negative(what, value)
}

/// Parse an `ID=VALUE` add-on flag.
///
/// - `tangzhong=FLOUR[:HYDRATION]`
/// - `whole-wheat-flour=GRAMS` or `=PERCENT%`
/// - `cold-fermentation=DURATION`, `room-temp-fermentation=DURATION`
/// - any other id: `=GRAMS`
fn parse_addon(raw: &str) -> Result<Addon> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("add-on '{}' must be written ID=VALUE", raw))?;
    let id = id.trim();
    let value = value.trim();
    if id.is_empty() {
        bail!("add-on '{}' has an empty id", raw);
    }

    let addon = match id {
        TANGZHONG => {
            let (flour, hydration) = match value.split_once(':') {
                Some((f, h)) => (f, Some(parse_number("tangzhong hydration", h)?)),
                None => (value, None),
            };
            let entry = AddonEntry {
                flour: Some(parse_number("tangzhong flour", flour.trim_end_matches('g'))?),
                hydration,
                ..AddonEntry::default()
            };
            Addon::from_entry(id, &entry)
        }
        WHOLE_WHEAT_FLOUR => match value.strip_suffix('%') {
            Some(pct) => Addon::WholeWheatFlour {
                amount: parse_number("whole wheat percentage", pct)?,
                unit: FlourUnit::Percent,
            },
            None => Addon::WholeWheatFlour {
                amount: parse_number("whole wheat amount", value.trim_end_matches('g'))?,
                unit: FlourUnit::Grams,
            },
        },
        COLD_FERMENTATION | ROOM_TEMP_FERMENTATION => {
            try_parse_duration(value)?;
            Addon::Fermentation {
                id: id.to_string(),
                duration: value.to_string(),
            }
        }
        other => Addon::Generic {
            id: other.to_string(),
            amount: parse_number(other, value.trim_end_matches('g'))?,
        },
    };
    Ok(addon)
}
