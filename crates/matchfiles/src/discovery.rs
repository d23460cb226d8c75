//! Config file discovery.
//!
//! Walks from the search root up to the repository root looking for
//! `matchfiles.toml` or `.matchfiles.toml`.

use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE_NAME, HIDDEN_CONFIG_FILE_NAME};
use crate::error::{Error, Result};

/// Config file in `dir`, preferring the visible name over the hidden one.
pub fn config_in(dir: &Path) -> Option<PathBuf> {
    let visible = dir.join(CONFIG_FILE_NAME);
    let hidden = dir.join(HIDDEN_CONFIG_FILE_NAME);
    match (visible.is_file(), hidden.is_file()) {
        (true, true) => {
            tracing::warn!(
                "both {} and {} in {}, using {}",
                CONFIG_FILE_NAME,
                HIDDEN_CONFIG_FILE_NAME,
                dir.display(),
                CONFIG_FILE_NAME
            );
            Some(visible)
        }
        (true, false) => Some(visible),
        (false, true) => Some(hidden),
        (false, false) => None,
    }
}

/// Find a config file starting from `start_dir` and walking up to the git root.
///
/// `.git` may be a directory or, in worktrees and submodules, a file.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        tracing::debug!("looking for config in {}", dir.display());
        if let Some(found) = config_in(dir) {
            return Some(found);
        }
        if dir.join(".git").exists() {
            tracing::debug!("stopping at repository root {}", dir.display());
            return None;
        }
    }
    None
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "MATCHFILES_CONFIG").
///    A directory stands for the config file inside it.
/// 2. Discovery from the search root up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, start_dir: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(start_dir));
    };
    if path.is_dir() {
        return match config_in(path) {
            Some(found) => Ok(Some(found)),
            None => Err(not_found(&path.join(CONFIG_FILE_NAME))),
        };
    }
    if path.is_file() {
        Ok(Some(path.to_path_buf()))
    } else {
        Err(not_found(path))
    }
}

fn not_found(path: &Path) -> Error {
    Error::Config {
        message: format!("config file not found: {}", path.display()),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
