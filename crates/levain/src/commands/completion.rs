//! `levain completion` -- generate shell completions.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionArgs};
use crate::context::RuntimeContext;

/// Execute the `levain completion` command.
pub fn run(_ctx: &RuntimeContext, args: &CompletionArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "levain", &mut std::io::stdout());
    Ok(())
}
