//! `levain init` -- create `.levain/config.yaml` with defaults.

use anyhow::{Context, Result, bail};

use levain_config::config::CONFIG_FILE_NAME;
use levain_config::{LevainConfig, ensure_levain_dir, save_config};

use crate::cli::InitArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `levain init` command.
///
/// Creates `.levain/` in the working directory, or the `--config-dir`
/// directory when given. A `.levain/` found in a parent directory is not
/// reused.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let levain_dir = match &ctx.config_dir_flag {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            dir.clone()
        }
        None => ensure_levain_dir(&ctx.cwd)
            .with_context(|| format!("failed to create .levain in {}", ctx.cwd.display()))?,
    };

    let config_path = levain_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    save_config(&levain_dir, &LevainConfig::default())
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    if ctx.json {
        output_json(&serde_json::json!({
            "levainDir": levain_dir.display().to_string(),
            "config": config_path.display().to_string(),
        }));
    } else if !ctx.quiet {
        println!("{} Created {}", ctx.style.pass_icon(), config_path.display());
    }
    Ok(())
}
