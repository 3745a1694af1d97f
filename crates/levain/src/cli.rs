//! Clap CLI definitions for the `levain` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// levain -- bread dough calculator.
///
/// Turns dough size, hydration and leavening into gram amounts, and
/// helps plan the steps of a bake.
#[derive(Parser, Debug)]
#[command(
    name = "levain",
    about = "Bread dough calculator",
    long_about = "Turns dough size, hydration and leavening into gram amounts, and helps plan the steps of a bake.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Configuration directory (default: nearest .levain/, or $LEVAIN_DIR).
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate ingredient weights for a recipe.
    Calc(CalcArgs),

    /// Parse a free-text duration ("2h 30m", "1:45", "2 days").
    Duration(DurationArgs),

    /// Parse or build "group. title" step names.
    StepName(StepNameArgs),

    /// List, search or check step templates.
    Templates(TemplatesArgs),

    /// Show a recipe's steps grouped, with durations and a timeline.
    Steps(StepsArgs),

    /// Search the ingredient catalog.
    Ingredients(IngredientsArgs),

    /// List add-ons that can be added to a recipe.
    Addons(AddonsArgs),

    /// Create .levain/config.yaml with default settings.
    Init(InitArgs),

    /// Print a recipe document as JSON.
    Export(ExportArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

// ---------------------------------------------------------------------------
// Recipe input
// ---------------------------------------------------------------------------

/// Recipe input shared by `calc` and `export`. Flags override values from
/// `--file`, which override configured defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct RecipeArgs {
    /// Recipe JSON file to start from.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Recipe name.
    #[arg(long)]
    pub name: Option<String>,

    /// Number of dough portions.
    #[arg(short = 'n', long)]
    pub portions: Option<u32>,

    /// Weight of one portion in grams.
    #[arg(short = 'w', long, value_name = "GRAMS")]
    pub portion_weight: Option<f64>,

    /// Hydration in baker's percent.
    #[arg(long, value_name = "PERCENT")]
    pub hydration: Option<f64>,

    /// Salt in baker's percent.
    #[arg(long, value_name = "PERCENT")]
    pub salt: Option<f64>,

    /// Leavening type (active-dry-yeast, instant-yeast, cake-yeast,
    /// sourdough-starter, poolish). Resets yeast and preferment defaults.
    #[arg(short = 'l', long)]
    pub leavening: Option<String>,

    /// Yeast in baker's percent.
    #[arg(long, value_name = "PERCENT")]
    pub yeast: Option<f64>,

    /// Percent of total flour that goes into the preferment.
    #[arg(long, value_name = "PERCENT")]
    pub inoculated_flour: Option<f64>,

    /// Hydration of the preferment.
    #[arg(long, value_name = "PERCENT")]
    pub preferment_hydration: Option<f64>,

    /// Add-on as ID=VALUE, repeatable: tangzhong=50 (flour, optional
    /// :HYDRATION), whole-wheat-flour=100 or =10%, cold-fermentation=18h,
    /// anything else=GRAMS.
    #[arg(short = 'a', long = "addon", value_name = "ID=VALUE")]
    pub addons: Vec<String>,
}

/// Arguments for `levain calc`.
#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,
}

/// Arguments for `levain export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,

    /// Write to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Durations and step names
// ---------------------------------------------------------------------------

/// Arguments for `levain duration`.
#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Duration text; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Print the invalid result instead of failing.
    #[arg(long)]
    pub lenient: bool,
}

/// Arguments for `levain step-name`.
#[derive(Args, Debug)]
pub struct StepNameArgs {
    #[command(subcommand)]
    pub command: StepNameCommands,
}

/// Step-name subcommands.
#[derive(Subcommand, Debug)]
pub enum StepNameCommands {
    /// Split a step name into group id and title.
    Parse {
        /// Step name, e.g. "Day1. Mix dough".
        name: String,
    },
    /// Build a step name from a title and optional group id.
    Format {
        /// Group id to prefix.
        #[arg(short, long)]
        group: Option<String>,

        /// Step title.
        title: String,
    },
}

// ---------------------------------------------------------------------------
// Templates, steps and catalogs
// ---------------------------------------------------------------------------

/// Arguments for `levain templates`.
#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub command: Option<TemplatesCommands>,

    /// Case-insensitive name filter.
    pub query: Option<String>,
}

/// Template subcommands.
#[derive(Subcommand, Debug)]
pub enum TemplatesCommands {
    /// Validate a template catalog.
    Check {
        /// Catalog file (default: the configured or built-in catalog).
        #[arg(short = 'f', long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

/// Arguments for `levain steps`.
#[derive(Args, Debug)]
pub struct StepsArgs {
    /// Recipe JSON file.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: PathBuf,

    /// Start time for the timeline ("2024-05-04 08:00").
    #[arg(long, value_name = "DATETIME")]
    pub start: Option<String>,

    /// Append a step from the named template and save the file.
    #[arg(long, value_name = "TEMPLATE")]
    pub add: Option<String>,

    /// Group id for the step added with --add.
    #[arg(short, long, requires = "add")]
    pub group: Option<String>,
}

/// Arguments for `levain ingredients`.
#[derive(Args, Debug)]
pub struct IngredientsArgs {
    /// Case-insensitive name filter; an exact name selects one ingredient.
    pub query: Option<String>,

    /// Print matches as step ingredients of this many grams (JSON).
    #[arg(long, value_name = "GRAMS")]
    pub amount: Option<f64>,
}

/// Arguments for `levain addons`.
#[derive(Args, Debug)]
pub struct AddonsArgs {
    /// Case-insensitive name filter.
    pub query: Option<String>,

    /// Recipe whose active add-ons are marked, and left out of searches.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Arguments for `levain init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config.yaml.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `levain completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}
