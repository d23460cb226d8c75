// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Traversal roots implied by include specs.
//!
//! Walking starts at the project root plus every literal include prefix that
//! lies outside it, so directories no include can reach are never listed.

use crate::paths;

/// Wildcard characters that end the literal prefix of a spec.
const WILDCARD_CHARS: [char; 2] = ['*', '?'];

/// Compute the directories a walk must start from.
///
/// `root` always comes first. Include prefixes contained in an already
/// selected base path are dropped; the rest are added in sorted order.
pub fn base_paths<S: AsRef<str>>(root: &str, includes: &[S], case_sensitive: bool) -> Vec<String> {
    let mut base_paths = vec![root.to_string()];

    let mut include_base_paths: Vec<String> = includes
        .iter()
        .map(|include| {
            let include = paths::normalize_slashes(include.as_ref());
            let absolute = if paths::is_rooted(&include) {
                include.into_owned()
            } else {
                paths::normalize_path(&paths::combine_paths(root, &include))
            };
            include_base_path(&absolute)
        })
        .collect();

    include_base_paths.sort_by(|a, b| paths::compare_strings(a, b, !case_sensitive));

    for include_base_path in include_base_paths {
        let covered = base_paths
            .iter()
            .any(|base| paths::contains_path(base, &include_base_path, root, !case_sensitive));
        if !covered {
            base_paths.push(include_base_path);
        }
    }

    base_paths
}

/// Longest wildcard-free directory prefix of an absolute include spec.
pub fn include_base_path(absolute: &str) -> String {
    match absolute.find(WILDCARD_CHARS) {
        None if paths::has_extension(absolute) => {
            paths::remove_trailing_separator(&paths::directory_path(absolute)).to_string()
        }
        None => absolute.to_string(),
        Some(wildcard_offset) => {
            let cut = absolute[..wildcard_offset]
                .rfind(paths::DIRECTORY_SEPARATOR)
                .unwrap_or(0);
            absolute[..cut].to_string()
        }
    }
}

#[cfg(test)]
#[path = "base_paths_tests.rs"]
mod tests;
