// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob patterns compiled into path components.
//!
//! Matching proceeds one path segment at a time, so no regular expression
//! engine is involved:
//! - Compilation: spec + base path + usage -> `CompiledPattern`
//! - Segment matching: literal compare, or `*`/`?` backtracking within a segment
//! - Path matching: lockstep walk over segments with `**` spans

pub mod cache;
pub mod compile;
pub mod component;
pub mod matcher;

pub use cache::PatternCache;
pub use compile::{
    CompiledPattern, GlobSpec, PatternComponent, Usage, Wildcard, WildcardSegment,
    is_implicit_glob,
};
pub use component::{COMMON_PACKAGE_FOLDERS, is_package_folder};
pub use matcher::path_segments;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
