//! `levain steps` -- grouped step listing, timeline and template insertion.

use std::collections::HashSet;

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDateTime;
use serde::Serialize;

use levain_core::{RecipeDocument, Step, StepId, is_valid_group_id};
use levain_formula::engine::{instantiate, search};
use levain_formula::schedule::{ScheduledStep, StepGroup, Timeline, group_steps, timeline};
use levain_timeparsing::{format_minutes, parse_duration};
use levain_ui::styles::TREE_CHILD;

use crate::cli::StepsArgs;
use crate::context::RuntimeContext;
use crate::output::{format_grams, format_number, output_json, render_table};

/// Accepted `--start` formats.
const START_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupView<'a> {
    #[serde(flatten)]
    group: &'a StepGroup<'a>,
    flour_grams: f64,
    water_grams: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StepsView<'a> {
    recipe_name: &'a str,
    groups: Vec<GroupView<'a>>,
    timeline: &'a Timeline,
}

/// Execute the `levain steps` command.
pub fn run(ctx: &RuntimeContext, args: &StepsArgs) -> Result<()> {
    let path = ctx.resolve(&args.file);
    let mut doc = RecipeDocument::load(&path)
        .with_context(|| format!("failed to load recipe {}", path.display()))?;

    if let Some(template_name) = &args.add {
        let step = add_step(ctx, &mut doc, template_name, args.group.as_deref())?;
        doc.save(&path)
            .with_context(|| format!("failed to save recipe {}", path.display()))?;
        if ctx.json {
            output_json(&step);
        } else if !ctx.quiet {
            println!(
                "{} Added step '{}' (id {})",
                ctx.style.pass_icon(),
                step.name,
                step.id
            );
        }
        return Ok(());
    }

    let start = args.start.as_deref().map(parse_start).transpose()?;
    let groups = group_steps(&doc.steps);
    let plan = timeline(&doc.steps, start);

    if ctx.json {
        output_json(&StepsView {
            recipe_name: &doc.recipe_name,
            groups: groups
                .iter()
                .map(|g| GroupView {
                    group: g,
                    flour_grams: g.flour_grams(),
                    water_grams: g.water_grams(),
                })
                .collect(),
            timeline: &plan,
        });
        return Ok(());
    }

    print_plan(ctx, &doc, &groups, &plan);
    Ok(())
}

fn print_plan(ctx: &RuntimeContext, doc: &RecipeDocument, groups: &[StepGroup<'_>], plan: &Timeline) {
    let style = &ctx.style;
    if doc.steps.is_empty() {
        if !ctx.quiet {
            println!("No steps in '{}'.", doc.recipe_name);
        }
        return;
    }

    let mut scheduled = plan.steps.iter();
    for group in groups {
        let mut header = style.group_header(group.group_id.as_deref());
        let flour = group.flour_grams();
        let water = group.water_grams();
        if flour > 0.0 || water > 0.0 {
            header.push_str(&style.muted(&format!(
                "  flour {}, water {}",
                format_grams(flour),
                format_grams(water)
            )));
        }
        println!("{}", header);

        let rows: Vec<Vec<String>> = group
            .steps
            .iter()
            .zip(scheduled.by_ref())
            .map(|(step, slot)| step_row(ctx, step, slot))
            .collect();
        print!("{}", indent_rows(&render_table(&["STEP", "DURATION", "WHEN"], &rows)));
        println!();
    }

    let mut total = format!("Total: {}", style.accent(&plan.total_display));
    if let Some(end) = plan.end {
        total.push_str(&format!(", done {}", end.format("%a %H:%M")));
    }
    if plan.invalid > 0 {
        total.push_str(&style.warn(&format!(" ({} step(s) with invalid duration)", plan.invalid)));
    }
    println!("{}", total);
}

fn step_row(ctx: &RuntimeContext, step: &Step, slot: &ScheduledStep) -> Vec<String> {
    let mut title = step.title();
    if let Some(reps) = step.reps {
        title.push_str(&format!(" x{}", reps));
    }
    if let Some(t) = step.temperature {
        title.push_str(&format!(" @ {}°C", format_number(t)));
    }
    let when = match (slot.start, slot.end) {
        (Some(s), Some(e)) => format!("{} - {}", s.format("%H:%M"), e.format("%H:%M")),
        _ => format!("+{}", format_minutes(slot.offset_minutes)),
    };
    vec![
        title,
        ctx.style.duration(&step.duration, &parse_duration(&step.duration)),
        when,
    ]
}

/// Prefix table body lines with the tree glyph, header lines with spaces.
fn indent_rows(table: &str) -> String {
    table
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i < 2 { "   " } else { TREE_CHILD };
            format!("{}{}\n", prefix, line)
        })
        .collect()
}

/// Instantiate `template_name` into `doc` and return the new step.
fn add_step(
    ctx: &RuntimeContext,
    doc: &mut RecipeDocument,
    template_name: &str,
    group: Option<&str>,
) -> Result<Step> {
    if let Some(id) = group.map(str::trim).filter(|g| !g.is_empty()) {
        if !is_valid_group_id(id) {
            bail!(
                "invalid group id '{}': use only letters, digits and underscores",
                id
            );
        }
    }

    let catalog = ctx.template_catalog(None)?;
    let template = catalog.get(template_name).ok_or_else(|| {
        let similar: Vec<&str> = search(&catalog, template_name)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        if similar.is_empty() {
            anyhow!("no template named '{}'", template_name)
        } else {
            anyhow!(
                "no template named '{}' (did you mean: {}?)",
                template_name,
                similar.join(", ")
            )
        }
    })?;

    let mut step = instantiate(template, next_step_id(&doc.steps));
    if group.is_some() {
        step.set_group(group);
    }
    doc.steps.push(step.clone());
    Ok(step)
}

/// One more than the largest numeric id. Without numeric ids, or when
/// the largest one is `u64::MAX`, counts up from the step count plus one
/// to the first id not in use.
fn next_step_id(steps: &[Step]) -> StepId {
    let after_max = steps
        .iter()
        .filter_map(|s| s.id.as_str().parse::<u64>().ok())
        .max()
        .and_then(|n| n.checked_add(1));
    if let Some(next) = after_max {
        return StepId::new(next.to_string());
    }

    let taken: HashSet<&str> = steps.iter().map(|s| s.id.as_str()).collect();
    let mut next = steps.len() as u64 + 1;
    while taken.contains(next.to_string().as_str()) {
        next += 1;
    }
    StepId::new(next.to_string())
}

fn parse_start(text: &str) -> Result<NaiveDateTime> {
    START_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text.trim(), fmt).ok())
        .ok_or_else(|| anyhow!("invalid start time '{}' (expected e.g. 2024-05-04 08:00)", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn next_id_after_numeric_ids() {
        let steps = vec![Step::new("3", "a", "1h"), Step::new("10", "b", "1h")];
        assert_eq!(next_step_id(&steps).as_str(), "11");
    }

    #[test]
    fn next_id_when_max_id_cannot_grow() {
        let steps = vec![Step::new("18446744073709551615", "a", "1h")];
        assert_eq!(next_step_id(&steps).as_str(), "2");

        let steps = vec![
            Step::new("18446744073709551615", "a", "1h"),
            Step::new("3", "b", "1h"),
            Step::new("4", "c", "1h"),
        ];
        assert_eq!(next_step_id(&steps).as_str(), "5");
    }

    #[test]
    fn next_id_without_numeric_ids() {
        assert_eq!(next_step_id(&[]).as_str(), "1");
        let steps = vec![Step::new("mix", "a", "1h")];
        assert_eq!(next_step_id(&steps).as_str(), "2");
    }

    #[test]
    fn start_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 4)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(parse_start("2024-05-04 08:00").unwrap(), expected);
        assert_eq!(parse_start("2024-05-04T08:00:00").unwrap(), expected);
        assert!(parse_start("tomorrow").is_err());
    }

    #[test]
    fn indent_marks_body_rows() {
        let out = indent_rows("H\n-\nrow\n");
        assert_eq!(out, format!("   H\n   -\n{}row\n", TREE_CHILD));
    }
}
