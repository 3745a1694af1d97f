//! `levain` -- bread dough calculator CLI.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("levain=debug,levain_config=debug,levain_formula=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| match cli.command {
        Some(Commands::Calc(args)) => commands::calc::run(&ctx, &args),
        Some(Commands::Duration(args)) => commands::duration::run(&ctx, &args),
        Some(Commands::StepName(args)) => commands::step_name::run(&ctx, &args),
        Some(Commands::Templates(args)) => commands::templates::run(&ctx, &args),
        Some(Commands::Steps(args)) => commands::steps::run(&ctx, &args),
        Some(Commands::Ingredients(args)) => commands::ingredients::run(&ctx, &args),
        Some(Commands::Addons(args)) => commands::addons::run(&ctx, &args),
        Some(Commands::Init(args)) => commands::init::run(&ctx, &args),
        Some(Commands::Export(args)) => commands::export::run(&ctx, &args),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
        Some(Commands::Version) => commands::version::run(&ctx),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    });

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
