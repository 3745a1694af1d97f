//! `levain export` -- print a recipe document as JSON.
//!
//! The output is the same document `calc --file` reads, and the same
//! shape the browser app copies to the clipboard.

use anyhow::{Context, Result};

use crate::cli::ExportArgs;
use crate::commands::calc::build_document;
use crate::context::RuntimeContext;

/// Execute the `levain export` command.
pub fn run(ctx: &RuntimeContext, args: &ExportArgs) -> Result<()> {
    let doc = build_document(ctx, &args.recipe)?;

    match &args.output {
        Some(path) => {
            let path = ctx.resolve(path);
            doc.save(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !ctx.quiet && !ctx.json {
                println!("{} Wrote {}", ctx.style.pass_icon(), path.display());
            }
        }
        None => println!("{}", doc.to_json_pretty()?),
    }
    Ok(())
}
