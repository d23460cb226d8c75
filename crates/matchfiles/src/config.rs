// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles matchfiles.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "matchfiles.toml";

/// Hidden spelling, used when a directory has no `matchfiles.toml`.
pub const HIDDEN_CONFIG_FILE_NAME: &str = ".matchfiles.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "project"];

/// Known project keys in the config.
const KNOWN_PROJECT_KEYS: &[&str] = &["include", "exclude", "extensions", "depth", "case_sensitive"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    project: Option<toml::Table>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Project file selection.
    #[serde(default)]
    pub project: ProjectConfig,
}

/// The `[project]` table: which files belong to the project.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    /// Include specs; empty includes every file.
    #[serde(default)]
    pub include: Vec<String>,

    /// Exclude specs.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Accepted file extensions such as `.ts`; empty accepts all.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Directory levels to list (None = unlimited).
    #[serde(default)]
    pub depth: Option<usize>,

    /// Case policy override (None = the filesystem's).
    #[serde(default)]
    pub case_sensitive: Option<bool>,
}

/// Load and validate config from a file path, warning on unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content, silently ignoring unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;
    toml::from_str(content).map_err(|e| config_error(e, path))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;
    for key in unknown_keys(content, path)? {
        warn_unknown_key(path, &key);
    }
    Ok(config)
}

/// Dotted names of keys the config format does not define, e.g. `project.ignore`.
pub fn unknown_keys(content: &str, path: &Path) -> Result<Vec<String>> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let mut keys: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    if let Some(project) = &flexible.project {
        keys.extend(
            project
                .keys()
                .filter(|key| !KNOWN_PROJECT_KEYS.contains(&key.as_str()))
                .map(|key| format!("project.{}", key)),
        );
    }

    Ok(keys)
}

fn check_version(content: &str, path: &Path) -> Result<()> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn config_error(e: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "matchfiles: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
