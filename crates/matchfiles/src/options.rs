// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Effective walk settings from command-line flags layered over config.

use std::path::Path;

use crate::cli::Cli;
use crate::config::Config;
use crate::paths;
use crate::walker::ReadDirectory;

/// Everything a `read_directory` call needs, with owned strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    pub root: String,
    pub current_directory: String,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub extensions: Vec<String>,
    pub depth: Option<usize>,
    pub case_sensitive: bool,
}

impl MatchOptions {
    /// Layer `cli` over `config`.
    ///
    /// Non-empty flag lists replace config lists. Without a PATH argument the
    /// root is the directory holding `config_path` (relative to
    /// `current_directory` when beneath it), or `.` when there is none.
    /// The case policy falls back to `filesystem_case_sensitive`.
    pub fn resolve(
        cli: &Cli,
        config: &Config,
        config_path: Option<&Path>,
        current_directory: &str,
        filesystem_case_sensitive: bool,
    ) -> Self {
        let root = match (&cli.path, config_path.and_then(Path::parent)) {
            (Some(path), _) => paths::normalize_path(path),
            (None, Some(dir)) if !dir.as_os_str().is_empty() => {
                relative_to(&dir.to_string_lossy(), current_directory)
            }
            (None, _) => ".".to_string(),
        };

        let project = &config.project;
        let extensions = pick(&cli.extensions, &project.extensions)
            .iter()
            .map(|extension| normalize_extension(extension))
            .collect();

        Self {
            root,
            current_directory: paths::normalize_path(current_directory),
            includes: pick(&cli.include, &project.include).to_vec(),
            excludes: pick(&cli.exclude, &project.exclude).to_vec(),
            extensions,
            depth: cli.depth.or(project.depth),
            case_sensitive: cli
                .case_sensitivity()
                .or(project.case_sensitive)
                .unwrap_or(filesystem_case_sensitive),
        }
    }

    /// Absolute form of the root.
    pub fn absolute_root(&self) -> String {
        paths::normalize_path(&paths::combine_paths(&self.current_directory, &self.root))
    }

    pub fn request(&self) -> ReadDirectory<'_> {
        ReadDirectory {
            path: &self.root,
            extensions: &self.extensions,
            excludes: &self.excludes,
            includes: &self.includes,
            case_sensitive: self.case_sensitive,
            current_directory: &self.current_directory,
            depth: self.depth,
        }
    }
}

fn pick<'a>(flags: &'a [String], config: &'a [String]) -> &'a [String] {
    if flags.is_empty() { config } else { flags }
}

/// Spell `dir` relative to `current_directory` when it lies beneath it.
fn relative_to(dir: &str, current_directory: &str) -> String {
    let dir = paths::normalize_path(dir);
    let current_directory = paths::normalize_path(current_directory);
    if dir == current_directory {
        return ".".to_string();
    }
    match dir.strip_prefix(&paths::ensure_trailing_separator(&current_directory)) {
        Some(rest) => rest.to_string(),
        None => dir,
    }
}

/// Accept `ts` as shorthand for `.ts`.
pub fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
