// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of include/exclude specs into component patterns.

use crate::paths;

/// How a compiled pattern is going to be used.
///
/// The usage decides how `**` expands, whether wildcards may reach into
/// dotted names and package folders, and whether a match may stop short of
/// the end of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    /// Matching file paths against include specs.
    Files,
    /// Deciding whether a directory could contain included files.
    Directories,
    /// Matching paths (and everything beneath them) against exclude specs.
    Exclude,
}

/// A single include or exclude spec, resolved against a base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobSpec<'a> {
    pub text: &'a str,
    pub base_path: &'a str,
    pub usage: Usage,
}

impl GlobSpec<'_> {
    pub fn compile(&self, case_sensitive: bool) -> Option<CompiledPattern> {
        CompiledPattern::compile(self.text, self.base_path, self.usage, case_sensitive)
    }
}

/// One piece of a wildcard component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WildcardSegment {
    Literal(String),
    /// Any run of characters within the segment, including none.
    Star,
    /// Exactly one character.
    Question,
}

/// A path component containing `*` or `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wildcard {
    pub(crate) segments: Vec<WildcardSegment>,
    pub(crate) skip_package_folders: bool,
    pub(crate) allows_min_js: bool,
}

impl Wildcard {
    fn parse(component: &str, skip_package_folders: bool) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        for c in component.chars() {
            let wildcard = match c {
                '*' => WildcardSegment::Star,
                '?' => WildcardSegment::Question,
                _ => {
                    literal.push(c);
                    continue;
                }
            };
            if !literal.is_empty() {
                segments.push(WildcardSegment::Literal(std::mem::take(&mut literal)));
            }
            // `a**b` behaves exactly like `a*b`
            if wildcard == WildcardSegment::Star && segments.last() == Some(&WildcardSegment::Star) {
                continue;
            }
            segments.push(wildcard);
        }
        if !literal.is_empty() {
            segments.push(WildcardSegment::Literal(literal));
        }

        let allows_min_js = segments.iter().any(|segment| match segment {
            WildcardSegment::Literal(text) => text.to_lowercase().contains(MIN_JS_SUFFIX),
            _ => false,
        });

        Self {
            segments,
            skip_package_folders,
            allows_min_js,
        }
    }

    pub fn segments(&self) -> &[WildcardSegment] {
        &self.segments
    }

    /// Whether this component refuses to match common package folders.
    pub fn skips_package_folders(&self) -> bool {
        self.skip_package_folders
    }

    /// The `*`, `.ext` shape, which resolves with a single suffix comparison.
    pub(crate) fn star_suffix(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [WildcardSegment::Star, WildcardSegment::Literal(suffix)] => Some(suffix),
            _ => None,
        }
    }

    pub(crate) fn starts_with_wildcard(&self) -> bool {
        matches!(
            self.segments.first(),
            Some(WildcardSegment::Star | WildcardSegment::Question)
        )
    }
}

/// One component of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternComponent {
    /// `**`: zero or more whole path segments.
    DoubleStar,
    Literal(String),
    Wildcard(Wildcard),
}

impl PatternComponent {
    pub fn is_double_star(&self) -> bool {
        matches!(self, PatternComponent::DoubleStar)
    }

    fn is_lone_star(&self) -> bool {
        matches!(self, PatternComponent::Wildcard(w) if w.segments == [WildcardSegment::Star])
    }
}

/// Suffix that wildcards never match into unless the pattern spells it out.
pub(crate) const MIN_JS_SUFFIX: &str = ".min.js";

/// An include or exclude spec compiled into path components.
///
/// Immutable once built. Literals are stored case-folded when the pattern is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    pub(crate) components: Vec<PatternComponent>,
    pub(crate) is_exclude: bool,
    pub(crate) case_sensitive: bool,
    pub(crate) exclude_min_js: bool,
}

impl CompiledPattern {
    /// Compile `spec` resolved against `base_path`.
    ///
    /// Returns `None` for specs that can never match: empty specs, and
    /// include specs ending in `**`.
    pub fn compile(
        spec: &str,
        base_path: &str,
        usage: Usage,
        case_sensitive: bool,
    ) -> Option<Self> {
        if spec.is_empty() {
            return None;
        }

        let mut components = paths::normalized_path_components(spec, base_path);
        let last = components.last()?.clone();
        if usage != Usage::Exclude && last == "**" {
            return None;
        }

        components[0] = paths::remove_trailing_separator(&components[0]).to_string();

        if is_implicit_glob(&last) {
            components.push("**".to_string());
            components.push("*".to_string());
        }

        let components = components
            .into_iter()
            .map(|component| {
                let component = if case_sensitive {
                    component
                } else {
                    component.to_lowercase()
                };
                if component == "**" {
                    PatternComponent::DoubleStar
                } else if component.contains(['*', '?']) {
                    PatternComponent::Wildcard(Wildcard::parse(&component, usage != Usage::Exclude))
                } else {
                    PatternComponent::Literal(component)
                }
            })
            .collect();

        Some(Self {
            components,
            is_exclude: usage == Usage::Exclude,
            case_sensitive,
            exclude_min_js: usage == Usage::Files,
        })
    }

    pub fn components(&self) -> &[PatternComponent] {
        &self.components
    }

    pub fn is_exclude(&self) -> bool {
        self.is_exclude
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn excludes_min_js(&self) -> bool {
        self.exclude_min_js
    }

    /// True when `rest` is exactly the `**`, `*` tail that implicit globs append.
    pub(crate) fn is_implicit_tail(rest: &[PatternComponent]) -> bool {
        matches!(rest, [first, second] if first.is_double_star() && second.is_lone_star())
    }
}

/// A last component without `.`, `*` or `?` names a directory: include all of it.
pub fn is_implicit_glob(last_component: &str) -> bool {
    !last_component.contains(['.', '*', '?'])
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
