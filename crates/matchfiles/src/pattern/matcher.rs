// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Full and prefix matching of paths against compiled patterns.

use std::borrow::Cow;

use super::compile::{CompiledPattern, PatternComponent};
use super::component::is_package_folder;
use crate::paths;

/// Split an absolute path into the segments patterns are matched against.
///
/// The root loses its trailing separator (`/` becomes an empty segment, `c:/`
/// becomes `c:`). A trailing separator yields a final empty segment.
pub fn path_segments(path: &str, case_sensitive: bool) -> Vec<Cow<'_, str>> {
    let root_len = paths::root_length(path);
    let root = paths::remove_trailing_separator(&path[..root_len]);
    let rest = &path[root_len..];

    let mut segments = Vec::with_capacity(rest.matches('/').count() + 2);
    segments.push(fold(root, case_sensitive));
    if !rest.is_empty() {
        segments.extend(rest.split('/').map(|s| fold(s, case_sensitive)));
    }
    segments
}

fn fold(segment: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(segment)
    } else {
        paths::to_file_name_lower_case(segment)
    }
}

impl CompiledPattern {
    /// Whether `path` matches the whole pattern.
    ///
    /// Exclude patterns also match everything beneath a matched path.
    pub fn matches(&self, path: &str) -> bool {
        let path = paths::normalize_slashes(path);
        let segments = path_segments(&path, self.case_sensitive);
        self.matches_segments(&segments)
    }

    /// Whether the subtree under `path` could still contain a match.
    pub fn matches_prefix(&self, path: &str) -> bool {
        let path = paths::normalize_slashes(path);
        let segments = path_segments(&path, self.case_sensitive);
        self.matches_prefix_segments(&segments)
    }

    pub(crate) fn matches_segments<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        MatchState::new(self, segments, false).run(0, 0)
    }

    pub(crate) fn matches_prefix_segments<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        MatchState::new(self, segments, true).run(0, 0)
    }
}

/// One lockstep match of a pattern against a split path.
///
/// Results are memoized per (segment, component) pair, so `**` spans cost at
/// most segments × components steps however many of them a pattern has.
struct MatchState<'a, S> {
    pattern: &'a CompiledPattern,
    segments: &'a [S],
    prefix: bool,
    memo: Vec<Option<bool>>,
}

impl<'a, S: AsRef<str>> MatchState<'a, S> {
    fn new(pattern: &'a CompiledPattern, segments: &'a [S], prefix: bool) -> Self {
        let size = (segments.len() + 1) * (pattern.components.len() + 1);
        Self {
            pattern,
            segments,
            prefix,
            memo: vec![None; size],
        }
    }

    fn run(&mut self, segment_index: usize, component_index: usize) -> bool {
        let component_index = component_index.min(self.pattern.components.len());
        let slot = segment_index * (self.pattern.components.len() + 1) + component_index;
        if let Some(known) = self.memo[slot] {
            return known;
        }
        let result = self.step(segment_index, component_index);
        self.memo[slot] = Some(result);
        result
    }

    fn step(&mut self, segment_index: usize, component_index: usize) -> bool {
        let pattern = self.pattern;
        let segments = self.segments;
        let remaining = &pattern.components[component_index..];

        let Some(segment) = segments.get(segment_index).map(AsRef::as_ref) else {
            if self.prefix {
                return true;
            }
            return remaining.iter().all(PatternComponent::is_double_star)
                || (pattern.is_exclude && CompiledPattern::is_implicit_tail(remaining));
        };

        let Some(component) = remaining.first() else {
            // An exclude covers everything nested under what it matched.
            return !self.prefix && pattern.is_exclude;
        };

        match component {
            PatternComponent::DoubleStar => {
                if self.run(segment_index, component_index + 1) {
                    return true;
                }
                if segment.is_empty() {
                    return false;
                }
                if !pattern.is_exclude && (segment.starts_with('.') || is_package_folder(segment)) {
                    return false;
                }
                self.run(segment_index + 1, component_index)
            }
            _ => {
                pattern.match_component(component, segment)
                    && self.run(segment_index + 1, component_index + 1)
            }
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
