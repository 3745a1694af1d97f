//! Command handlers, one module per subcommand.

pub mod addons;
pub mod calc;
pub mod completion;
pub mod duration;
pub mod export;
pub mod ingredients;
pub mod init;
pub mod step_name;
pub mod steps;
pub mod templates;
pub mod version;
