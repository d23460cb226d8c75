// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching of a single path segment against a single pattern component.
//!
//! Segments never contain `/`, and `*` is resolved without recursion, so a
//! check costs at most the segment length times the component length.

use super::compile::{CompiledPattern, MIN_JS_SUFFIX, PatternComponent, Wildcard, WildcardSegment};

/// Folders that wildcards never reach into unless named literally.
pub const COMMON_PACKAGE_FOLDERS: &[&str] = &["node_modules", "bower_components", "jspm_packages"];

impl CompiledPattern {
    /// Match one path segment against one component.
    ///
    /// `segment` must already be case-folded when the pattern is
    /// case-insensitive. `DoubleStar` spans are handled by the caller and
    /// never match here.
    pub fn match_component(&self, component: &PatternComponent, segment: &str) -> bool {
        match component {
            PatternComponent::DoubleStar => false,
            PatternComponent::Literal(text) => text == segment,
            PatternComponent::Wildcard(wildcard) => self.match_wildcard(wildcard, segment),
        }
    }

    fn match_wildcard(&self, wildcard: &Wildcard, segment: &str) -> bool {
        if wildcard.skip_package_folders && is_package_folder(segment) {
            return false;
        }
        if !self.is_exclude && wildcard.starts_with_wildcard() && segment.starts_with('.') {
            return false;
        }

        let matched = match wildcard.star_suffix() {
            Some(suffix) => segment.ends_with(suffix),
            None => match_segments(&wildcard.segments, segment),
        };
        if !matched {
            return false;
        }

        !(self.exclude_min_js && !wildcard.allows_min_js && ends_with_min_js(segment))
    }
}

/// True for `node_modules`, `bower_components` and `jspm_packages`.
///
/// Callers pass case-folded segments for case-insensitive patterns.
pub fn is_package_folder(segment: &str) -> bool {
    COMMON_PACKAGE_FOLDERS.contains(&segment)
}

fn ends_with_min_js(segment: &str) -> bool {
    segment.len() >= MIN_JS_SUFFIX.len()
        && segment.is_char_boundary(segment.len() - MIN_JS_SUFFIX.len())
        && segment[segment.len() - MIN_JS_SUFFIX.len()..].eq_ignore_ascii_case(MIN_JS_SUFFIX)
}

/// General matcher over one segment, in O(segment length × pattern length).
///
/// Remembers the most recent `*` and the text offset it currently stops at.
/// On a mismatch the star takes one more character and matching resumes
/// after it; earlier stars never need to grow once a later star is reached.
fn match_segments(segments: &[WildcardSegment], text: &str) -> bool {
    let mut segment_index = 0;
    let mut offset = 0;
    // (segment after the star, offset the star's span ends at)
    let mut resume: Option<(usize, usize)> = None;

    loop {
        if let Some(segment) = segments.get(segment_index) {
            let rest = &text[offset..];
            let advance = match segment {
                WildcardSegment::Star => {
                    resume = Some((segment_index + 1, offset));
                    Some(0)
                }
                WildcardSegment::Literal(literal) => {
                    rest.starts_with(literal.as_str()).then_some(literal.len())
                }
                WildcardSegment::Question => rest.chars().next().map(char::len_utf8),
            };
            if let Some(advance) = advance {
                segment_index += 1;
                offset += advance;
                continue;
            }
        } else if offset == text.len() {
            return true;
        }

        let Some((after_star, star_end)) = resume else {
            return false;
        };
        let Some(next) = text[star_end..].chars().next() else {
            return false;
        };
        let star_end = star_end + next.len_utf8();
        resume = Some((after_star, star_end));
        segment_index = after_star;
        offset = star_end;
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
