// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-path checks against include or exclude specs.
//!
//! These run once per path from watchers and project loaders, so compiled
//! patterns come from the process-wide [`PatternCache`].

use crate::paths;
use crate::pattern::{PatternCache, Usage};

/// Whether `file_name` is excluded by any of `exclude_specs`.
///
/// Specs with `..` after a recursive wildcard are ignored. A path without an
/// extension is also tried as a directory (with a trailing separator).
pub fn matches_exclude<S: AsRef<str>>(
    file_name: &str,
    exclude_specs: &[S],
    current_directory: &str,
    case_sensitive: bool,
) -> bool {
    let base_path = paths::normalize_path(current_directory);
    let cache = PatternCache::global();
    let patterns: Vec<_> = exclude_specs
        .iter()
        .map(AsRef::as_ref)
        .filter(|spec| !invalid_dot_dot_after_recursive_wildcard(spec))
        .filter_map(|spec| cache.compile(spec, &base_path, Usage::Exclude, case_sensitive))
        .collect();
    if patterns.is_empty() {
        return false;
    }

    if patterns.iter().any(|pattern| pattern.matches(file_name)) {
        return true;
    }
    if paths::has_extension(file_name) {
        return false;
    }
    let as_directory = paths::ensure_trailing_separator(file_name);
    patterns.iter().any(|pattern| pattern.matches(&as_directory))
}

/// Whether `file_name` matches any of `include_specs` resolved against `base_path`.
pub fn matches_include<S: AsRef<str>>(
    file_name: &str,
    include_specs: &[S],
    base_path: &str,
    case_sensitive: bool,
) -> bool {
    let cache = PatternCache::global();
    include_specs.iter().any(|spec| {
        cache
            .compile(spec.as_ref(), base_path, Usage::Files, case_sensitive)
            .is_some_and(|pattern| pattern.matches(file_name))
    })
}

/// Like [`matches_include`], considering only specs ending in `required_suffix`
/// (for example `.json`).
pub fn matches_include_with_extension_filter<S: AsRef<str>>(
    file_name: &str,
    include_specs: &[S],
    base_path: &str,
    case_sensitive: bool,
    required_suffix: &str,
) -> bool {
    let filtered: Vec<&str> = include_specs
        .iter()
        .map(AsRef::as_ref)
        .filter(|spec| spec.ends_with(required_suffix))
        .collect();
    matches_include(file_name, filtered.as_slice(), base_path, case_sensitive)
}

/// True for specs such as `**/../x` whose `..` follows a recursive wildcard.
pub fn invalid_dot_dot_after_recursive_wildcard(spec: &str) -> bool {
    let spec = paths::normalize_slashes(spec);
    let wildcard_index = if spec.starts_with("**/") {
        Some(0)
    } else {
        spec.find("/**/")
    };
    let Some(wildcard_index) = wildcard_index else {
        return false;
    };
    let last_dot_index = if spec.ends_with("/..") {
        Some(spec.len())
    } else {
        spec.rfind("/../")
    };
    last_dot_index.is_some_and(|index| index > wildcard_index)
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod tests;
