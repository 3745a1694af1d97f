//! `levain step-name` -- parse or build "group. title" step names.

use anyhow::Result;

use levain_core::{format_step_name, parse_step_name};

use crate::cli::{StepNameArgs, StepNameCommands};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `levain step-name` command.
pub fn run(ctx: &RuntimeContext, args: &StepNameArgs) -> Result<()> {
    match &args.command {
        StepNameCommands::Parse { name } => {
            let parsed = parse_step_name(name);
            if ctx.json {
                output_json(&parsed);
            } else {
                println!("group: {}", parsed.group_id.as_deref().unwrap_or("-"));
                println!("title: {}", parsed.title);
            }
        }
        StepNameCommands::Format { group, title } => {
            let name = format_step_name(group.as_deref(), title);
            if ctx.json {
                output_json(&serde_json::json!({ "name": name }));
            } else {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
