//! `levain duration` -- parse a free-text duration.

use anyhow::Result;

use levain_timeparsing::{parse_duration, try_parse_duration};

use crate::cli::DurationArgs;
use crate::context::RuntimeContext;
use crate::output::{format_number, output_json};

/// Execute the `levain duration` command.
pub fn run(ctx: &RuntimeContext, args: &DurationArgs) -> Result<()> {
    let text = args.text.join(" ");
    let parsed = if args.lenient {
        parse_duration(&text)
    } else {
        try_parse_duration(&text)?
    };

    if ctx.json {
        output_json(&parsed);
    } else if parsed.is_valid {
        println!(
            "{} {}",
            ctx.style.pass(&parsed.display),
            ctx.style.muted(&format!("({} min)", format_number(parsed.minutes)))
        );
    } else {
        println!("{} {}", ctx.style.fail_icon(), ctx.style.duration(&text, &parsed));
    }
    Ok(())
}
