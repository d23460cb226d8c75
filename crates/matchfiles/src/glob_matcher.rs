// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Include/exclude aggregation for one usage.

use std::sync::Arc;

use crate::paths;
use crate::pattern::{CompiledPattern, Usage, path_segments};

/// Compiled include and exclude specs for files or directories.
///
/// Include order is significant: the index of the first matching include
/// picks the result bucket. Immutable once built.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    include_patterns: Vec<Arc<CompiledPattern>>,
    exclude_patterns: Vec<Arc<CompiledPattern>>,
    had_includes: bool,
    case_sensitive: bool,
}

impl GlobMatcher {
    /// Compile `includes` with `usage` and `excludes` as exclusions, all
    /// resolved against `base_path`.
    pub fn new<S: AsRef<str>>(
        includes: &[S],
        excludes: &[S],
        base_path: &str,
        usage: Usage,
        case_sensitive: bool,
    ) -> Self {
        let compile = |spec: &str, usage: Usage| {
            CompiledPattern::compile(spec, base_path, usage, case_sensitive).map(Arc::new)
        };
        let include_usage = if usage == Usage::Exclude {
            Usage::Files
        } else {
            usage
        };
        Self {
            include_patterns: includes
                .iter()
                .filter_map(|spec| compile(spec.as_ref(), include_usage))
                .collect(),
            exclude_patterns: excludes
                .iter()
                .filter_map(|spec| compile(spec.as_ref(), Usage::Exclude))
                .collect(),
            had_includes: !includes.is_empty(),
            case_sensitive,
        }
    }

    /// Number of result buckets a walk needs: one per include pattern, or a
    /// single bucket when no include specs were given at all.
    pub fn bucket_count(&self) -> usize {
        if self.had_includes {
            self.include_patterns.len()
        } else {
            1
        }
    }

    pub fn had_includes(&self) -> bool {
        self.had_includes
    }

    pub fn include_patterns(&self) -> &[Arc<CompiledPattern>] {
        &self.include_patterns
    }

    pub fn exclude_patterns(&self) -> &[Arc<CompiledPattern>] {
        &self.exclude_patterns
    }

    /// Index of the first include pattern matching `path`, or `None` when
    /// the path is excluded or no include matches.
    pub fn matches_file(&self, path: &str) -> Option<usize> {
        let path = paths::normalize_slashes(path);
        let segments = path_segments(&path, self.case_sensitive);
        if self.excluded(&segments) {
            return None;
        }
        if self.include_patterns.is_empty() {
            return if self.had_includes { None } else { Some(0) };
        }
        self.include_patterns
            .iter()
            .position(|pattern| pattern.matches_segments(&segments))
    }

    /// Whether the subtree under `path` could contain matches.
    pub fn matches_directory(&self, path: &str) -> bool {
        let path = paths::normalize_slashes(path);
        let segments = path_segments(&path, self.case_sensitive);
        if self.excluded(&segments) {
            return false;
        }
        if self.include_patterns.is_empty() {
            return !self.had_includes;
        }
        self.include_patterns
            .iter()
            .any(|pattern| pattern.matches_prefix_segments(&segments))
    }

    /// Whether any exclude pattern matches `path`.
    pub fn is_excluded(&self, path: &str) -> bool {
        let path = paths::normalize_slashes(path);
        let segments = path_segments(&path, self.case_sensitive);
        self.excluded(&segments)
    }

    fn excluded<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.matches_segments(segments))
    }
}

#[cfg(test)]
#[path = "glob_matcher_tests.rs"]
mod tests;
