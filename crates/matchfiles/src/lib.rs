// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Include/exclude file matching for compiler-style project configs.
//!
//! Specs such as `src/**/*` or `node_modules` are compiled into component
//! patterns and evaluated one path segment at a time while walking.

pub mod base_paths;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filesystem;
pub mod glob_matcher;
pub mod matching;
pub mod options;
pub mod paths;
pub mod pattern;
pub mod walker;

pub use base_paths::base_paths;
pub use cli::{Cli, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use filesystem::{Entries, FileSystem, OsFileSystem};
pub use glob_matcher::GlobMatcher;
pub use matching::{matches_exclude, matches_include, matches_include_with_extension_filter};
pub use options::MatchOptions;
pub use pattern::{CompiledPattern, GlobSpec, PatternCache, Usage};
pub use walker::{DirectoryWalker, ReadDirectory, Walk, WalkStats, read_directory};
