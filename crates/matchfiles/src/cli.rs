// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// List the files a project's include/exclude specs select
#[derive(Parser, Debug)]
#[command(name = "matchfiles")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root to search (default: the config's directory, else ".")
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "MATCHFILES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Include spec, relative to PATH (repeatable; replaces config includes)
    #[arg(short, long = "include", value_name = "SPEC")]
    pub include: Vec<String>,

    /// Exclude spec, relative to PATH (repeatable; replaces config excludes)
    #[arg(short = 'x', long = "exclude", value_name = "SPEC")]
    pub exclude: Vec<String>,

    /// Accepted file extension, e.g. `.ts` (repeatable; replaces config extensions)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Directory levels to list, counting PATH itself
    #[arg(short, long, value_name = "N")]
    pub depth: Option<usize>,

    /// Match names case-sensitively
    #[arg(long, conflicts_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Match names case-insensitively
    #[arg(long)]
    pub ignore_case: bool,

    /// Directory relative paths are resolved against (default: process cwd)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print walk statistics to stderr
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// Case policy requested on the command line, if any.
    pub fn case_sensitivity(&self) -> Option<bool> {
        if self.case_sensitive {
            Some(true)
        } else if self.ignore_case {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Text,
    /// JSON array of paths
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
