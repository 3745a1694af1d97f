//! Discovery and creation of the `.levain/` directory.

use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// The name of the levain metadata directory.
pub const LEVAIN_DIR_NAME: &str = ".levain";

/// Environment variable that overrides directory discovery.
pub const LEVAIN_DIR_ENV: &str = "LEVAIN_DIR";

/// Walk up from `start` looking for a `.levain/` directory.
///
/// `LEVAIN_DIR` takes priority when it names an existing directory.
/// Returns `None` when the filesystem root is reached without a match.
pub fn find_levain_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(LEVAIN_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }
    walk_up(start)
}

fn walk_up(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;
    let mut current = start.as_path();
    loop {
        let candidate = current.join(LEVAIN_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => return None,
        }
    }
}

/// Create `.levain/` under `path` (or `path` itself if it is already
/// named `.levain`) and return it.
pub fn ensure_levain_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let dir = if path.ends_with(LEVAIN_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(LEVAIN_DIR_NAME)
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
