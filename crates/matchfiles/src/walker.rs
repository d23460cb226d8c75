// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Depth-first directory walking driven by include/exclude matchers.
//!
//! Each top-level call owns its visited set and result buckets, so
//! concurrent walks never share state. Cycles (and aliases reached through
//! symlinks) are caught by visiting every real directory path at most once.

use std::collections::HashSet;

use crate::base_paths::base_paths;
use crate::filesystem::FileSystem;
use crate::glob_matcher::GlobMatcher;
use crate::paths;
use crate::pattern::Usage;

/// Statistics from a walk operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories whose entries were listed.
    pub directories_visited: usize,

    /// Directories skipped because their real path was already visited.
    pub directories_revisited: usize,

    /// Subdirectories not entered because no include could match beneath them
    /// or an exclude matched them.
    pub directories_pruned: usize,

    /// Directories whose subdirectories were cut off by the depth limit.
    pub depth_limited: usize,

    /// Files skipped for having none of the accepted extensions.
    pub files_filtered: usize,

    /// Files added to a result bucket.
    pub files_matched: usize,
}

/// A single `read_directory` request.
#[derive(Debug, Clone, Copy)]
pub struct ReadDirectory<'a> {
    /// Project root; results are reported relative to its spelling.
    pub path: &'a str,
    /// Accepted file extensions (e.g. `.ts`); empty accepts every file.
    pub extensions: &'a [String],
    pub excludes: &'a [String],
    pub includes: &'a [String],
    pub case_sensitive: bool,
    pub current_directory: &'a str,
    /// Number of directory levels to list, counting the base path; `None` is unlimited.
    pub depth: Option<usize>,
}

/// Files matched by a walk, in include order, with statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Walk {
    pub files: Vec<String>,
    pub stats: WalkStats,
}

impl ReadDirectory<'_> {
    /// Walk every base path and flatten the result buckets in include order.
    pub fn run<F: FileSystem + ?Sized>(&self, fs: &F) -> Walk {
        let path = paths::normalize_path(self.path);
        let current_directory = paths::normalize_path(self.current_directory);
        let absolute_path = paths::combine_paths(&current_directory, &path);

        let files = GlobMatcher::new(
            self.includes,
            self.excludes,
            &absolute_path,
            Usage::Files,
            self.case_sensitive,
        );
        let directories = GlobMatcher::new(
            self.includes,
            self.excludes,
            &absolute_path,
            Usage::Directories,
            self.case_sensitive,
        );

        let mut walker = DirectoryWalker::new(
            fs,
            &files,
            &directories,
            self.extensions,
            self.case_sensitive,
        );
        for base_path in base_paths(&path, self.includes, self.case_sensitive) {
            let absolute = paths::combine_paths(&current_directory, &base_path);
            walker.visit(&base_path, &absolute, self.depth);
        }
        walker.finish()
    }
}

/// Collect the files under `path` matched by `includes` and not by `excludes`.
///
/// Results come grouped by the first include that matched them, in include
/// order; within a group, in the order the filesystem listed them.
#[allow(clippy::too_many_arguments)]
pub fn read_directory<F: FileSystem + ?Sized>(
    path: &str,
    extensions: &[String],
    excludes: &[String],
    includes: &[String],
    case_sensitive: bool,
    current_directory: &str,
    depth: Option<usize>,
    fs: &F,
) -> Vec<String> {
    ReadDirectory {
        path,
        extensions,
        excludes,
        includes,
        case_sensitive,
        current_directory,
        depth,
    }
    .run(fs)
    .files
}

/// Recursive visitor collecting matched files into per-include buckets.
pub struct DirectoryWalker<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    files: &'a GlobMatcher,
    directories: &'a GlobMatcher,
    extensions: &'a [String],
    case_sensitive: bool,
    visited: HashSet<String>,
    buckets: Vec<Vec<String>>,
    stats: WalkStats,
}

impl<'a, F: FileSystem + ?Sized> DirectoryWalker<'a, F> {
    pub fn new(
        fs: &'a F,
        files: &'a GlobMatcher,
        directories: &'a GlobMatcher,
        extensions: &'a [String],
        case_sensitive: bool,
    ) -> Self {
        Self {
            fs,
            files,
            directories,
            extensions,
            case_sensitive,
            visited: HashSet::new(),
            buckets: vec![Vec::new(); files.bucket_count()],
            stats: WalkStats::default(),
        }
    }

    /// Visit `absolute_path`, reporting entries under the spelling `path`.
    ///
    /// `depth` counts the levels still allowed to be listed, this one included.
    pub fn visit(&mut self, path: &str, absolute_path: &str, depth: Option<usize>) {
        let real = self.fs.realpath(absolute_path);
        let canonical = if self.case_sensitive {
            real
        } else {
            paths::to_file_name_lower_case(&real).into_owned()
        };
        if !self.visited.insert(canonical) {
            tracing::debug!("skipping {} (already visited)", absolute_path);
            self.stats.directories_revisited += 1;
            return;
        }

        tracing::trace!("visiting {}", absolute_path);
        self.stats.directories_visited += 1;
        let entries = self.fs.get_accessible_entries(absolute_path);

        for file in &entries.files {
            let name = paths::combine_paths(path, file);
            if !self.extensions.is_empty()
                && !paths::file_extension_is_one_of(&name, self.extensions)
            {
                self.stats.files_filtered += 1;
                continue;
            }
            let absolute_name = paths::combine_paths(absolute_path, file);
            if let Some(index) = self.files.matches_file(&absolute_name) {
                self.buckets[index].push(name);
                self.stats.files_matched += 1;
            }
        }

        let depth = match depth {
            Some(remaining) => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    if !entries.directories.is_empty() {
                        tracing::debug!("depth limit reached at {}", absolute_path);
                        self.stats.depth_limited += 1;
                    }
                    return;
                }
                Some(remaining)
            }
            None => None,
        };

        for directory in &entries.directories {
            let name = paths::combine_paths(path, directory);
            let absolute_name = paths::combine_paths(absolute_path, directory);
            if self.directories.matches_directory(&absolute_name) {
                self.visit(&name, &absolute_name, depth);
            } else {
                self.stats.directories_pruned += 1;
            }
        }
    }

    /// Flatten the buckets in include order.
    pub fn finish(self) -> Walk {
        Walk {
            files: self.buckets.into_iter().flatten().collect(),
            stats: self.stats,
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
