// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Slash-normalized path algebra.
//!
//! Paths are plain strings with `/` separators. Roots keep their trailing
//! separator (`/`, `c:/`, `//server/share/`, `file:///`) so that joining a
//! root with its remaining components reproduces the original path.

use std::borrow::Cow;
use std::cmp::Ordering;

/// The only separator used after normalization.
pub const DIRECTORY_SEPARATOR: char = '/';

/// Replace every `\` with `/`.
pub fn normalize_slashes(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Length of the root portion of a slash-normalized path, or 0 for relative paths.
pub fn root_length(path: &str) -> usize {
    let bytes = path.as_bytes();
    let Some(&first) = bytes.first() else {
        return 0;
    };

    // POSIX or UNC
    if first == b'/' {
        if bytes.get(1) != Some(&b'/') {
            return 1;
        }
        let Some(server_end) = path[2..].find('/').map(|i| i + 2) else {
            return path.len();
        };
        return match path[server_end + 1..].find('/') {
            Some(i) => server_end + 1 + i + 1,
            None => path.len(),
        };
    }

    // DOS drive
    if first.is_ascii_alphabetic() && bytes.get(1) == Some(&b':') {
        match bytes.get(2) {
            Some(b'/') => return 3,
            None => return 2,
            Some(_) => {}
        }
    }

    // URL
    if let Some(scheme_end) = path.find("://").filter(|&i| !path[..i].contains('/')) {
        let authority_start = scheme_end + 3;
        return match path[authority_start..].find('/') {
            Some(i) => authority_start + i + 1,
            None => path.len(),
        };
    }

    0
}

pub fn is_rooted(path: &str) -> bool {
    root_length(&normalize_slashes(path)) > 0
}

pub fn has_trailing_separator(path: &str) -> bool {
    path.ends_with(DIRECTORY_SEPARATOR) || path.ends_with('\\')
}

/// Drop one trailing separator. A bare root such as `/` becomes empty.
pub fn remove_trailing_separator(path: &str) -> &str {
    if has_trailing_separator(path) {
        &path[..path.len() - 1]
    } else {
        path
    }
}

pub fn ensure_trailing_separator(path: &str) -> String {
    if has_trailing_separator(path) {
        path.to_string()
    } else {
        format!("{}{}", path, DIRECTORY_SEPARATOR)
    }
}

/// Join `relative` onto `base`. A rooted `relative` replaces `base` entirely.
pub fn combine_paths(base: &str, relative: &str) -> String {
    let base = normalize_slashes(base);
    let relative = normalize_slashes(relative);
    if relative.is_empty() {
        return base.into_owned();
    }
    if base.is_empty() || root_length(&relative) > 0 {
        return relative.into_owned();
    }
    if has_trailing_separator(&base) {
        format!("{}{}", base, relative)
    } else {
        format!("{}{}{}", base, DIRECTORY_SEPARATOR, relative)
    }
}

/// Split a slash-normalized path into its root and the remaining components.
///
/// The root keeps its trailing separator and is always the first element;
/// a single trailing separator does not produce an empty component.
pub fn path_components(path: &str) -> Vec<&str> {
    let root_len = root_length(path);
    let mut components = vec![&path[..root_len]];
    let rest = &path[root_len..];
    if !rest.is_empty() {
        components.extend(rest.split(DIRECTORY_SEPARATOR));
        if components.last().is_some_and(|c| c.is_empty()) {
            components.pop();
        }
    }
    components
}

/// Resolve `.` and `..` components and drop empty ones.
///
/// `..` never climbs above a root; above a relative start it is kept.
pub fn reduce_path_components<'a>(components: &[&'a str]) -> Vec<&'a str> {
    let Some((&root, rest)) = components.split_first() else {
        return Vec::new();
    };
    let mut reduced = vec![root];
    for &component in rest {
        match component {
            "" | "." => continue,
            ".." => {
                if reduced.len() > 1 {
                    if reduced.last() != Some(&"..") {
                        reduced.pop();
                        continue;
                    }
                } else if !reduced[0].is_empty() {
                    continue;
                }
                reduced.push(component);
            }
            _ => reduced.push(component),
        }
    }
    reduced
}

/// Components of `path` resolved against `current_directory`, with `.` and `..` reduced.
pub fn normalized_path_components(path: &str, current_directory: &str) -> Vec<String> {
    let combined = combine_paths(current_directory, path);
    reduce_path_components(&path_components(&combined))
        .into_iter()
        .map(String::from)
        .collect()
}

/// Rebuild a path from components produced by [`path_components`].
pub fn path_from_components<S: AsRef<str>>(components: &[S]) -> String {
    let Some((root, rest)) = components.split_first() else {
        return String::new();
    };
    let mut path = root.as_ref().to_string();
    for (i, component) in rest.iter().enumerate() {
        if i > 0 {
            path.push(DIRECTORY_SEPARATOR);
        }
        path.push_str(component.as_ref());
    }
    path
}

/// Normalize separators and resolve `.`/`..`, preserving a trailing separator.
pub fn normalize_path(path: &str) -> String {
    let slashed = normalize_slashes(path);
    let components = path_components(&slashed);
    let reduced = reduce_path_components(&components);
    let normalized = path_from_components(&reduced);
    if reduced.len() > 1 && has_trailing_separator(&slashed) {
        ensure_trailing_separator(&normalized)
    } else {
        normalized
    }
}

/// Parent directory of `path`; a bare root is its own parent.
pub fn directory_path(path: &str) -> String {
    let path = normalize_slashes(path);
    let root_len = root_length(&path);
    if root_len == path.len() {
        return path.into_owned();
    }
    let trimmed = remove_trailing_separator(&path);
    let cut = trimmed
        .rfind(DIRECTORY_SEPARATOR)
        .map_or(root_len, |i| i.max(root_len));
    trimmed[..cut].to_string()
}

pub fn base_file_name(path: &str) -> &str {
    let trimmed = if path.len() > root_length(path) {
        remove_trailing_separator(path)
    } else {
        path
    };
    match trimmed.rfind(DIRECTORY_SEPARATOR) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// True when the base name contains a `.`.
pub fn has_extension(path: &str) -> bool {
    base_file_name(&normalize_slashes(path)).contains('.')
}

/// Ordinal suffix test; the path must be strictly longer than the extension.
pub fn file_extension_is(path: &str, extension: &str) -> bool {
    path.len() > extension.len() && path.ends_with(extension)
}

pub fn file_extension_is_one_of<S: AsRef<str>>(path: &str, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|extension| file_extension_is(path, extension.as_ref()))
}

/// Fold a path for case-insensitive comparison.
pub fn to_file_name_lower_case(path: &str) -> Cow<'_, str> {
    if path.chars().any(char::is_uppercase) {
        Cow::Owned(path.to_lowercase())
    } else {
        Cow::Borrowed(path)
    }
}

pub fn equate_strings(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a == b || a.to_uppercase() == b.to_uppercase()
    } else {
        a == b
    }
}

pub fn compare_strings(a: &str, b: &str, ignore_case: bool) -> Ordering {
    if ignore_case {
        a.to_uppercase().cmp(&b.to_uppercase())
    } else {
        a.cmp(b)
    }
}

/// True when `child` is `parent` or lies beneath it.
///
/// Roots always compare case-insensitively.
pub fn contains_path(parent: &str, child: &str, current_directory: &str, ignore_case: bool) -> bool {
    if parent == child {
        return true;
    }
    let parent_components = normalized_path_components(parent, current_directory);
    let child_components = normalized_path_components(child, current_directory);
    if child_components.len() < parent_components.len() {
        return false;
    }
    parent_components
        .iter()
        .zip(&child_components)
        .enumerate()
        .all(|(i, (p, c))| equate_strings(p, c, i == 0 || ignore_case))
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
