// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem capability consumed by the directory walker.
//!
//! The walker never sees I/O errors: implementations report unreadable
//! directories as empty and unresolvable paths unchanged.

use std::fs;
use std::path::Path;

use crate::paths;

/// Base names of the files and directories directly under a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries {
    pub files: Vec<String>,
    pub directories: Vec<String>,
}

/// Minimal read-only filesystem used for matching.
///
/// Paths are slash-separated strings.
pub trait FileSystem {
    fn use_case_sensitive_file_names(&self) -> bool;

    fn file_exists(&self, path: &str) -> bool;

    fn directory_exists(&self, path: &str) -> bool;

    /// Entries directly under `path`; empty when it is missing or unreadable.
    fn get_accessible_entries(&self, path: &str) -> Entries;

    /// Resolve symlinks and junctions; return `path` unchanged on failure.
    fn realpath(&self, path: &str) -> String;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn use_case_sensitive_file_names(&self) -> bool {
        (**self).use_case_sensitive_file_names()
    }

    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }

    fn directory_exists(&self, path: &str) -> bool {
        (**self).directory_exists(path)
    }

    fn get_accessible_entries(&self, path: &str) -> Entries {
        (**self).get_accessible_entries(path)
    }

    fn realpath(&self, path: &str) -> String {
        (**self).realpath(path)
    }
}

/// [`FileSystem`] over `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct OsFileSystem {
    case_sensitive: bool,
}

impl Default for OsFileSystem {
    fn default() -> Self {
        Self {
            case_sensitive: !cfg!(any(target_os = "windows", target_os = "macos")),
        }
    }
}

impl OsFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the platform's case policy.
    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }
}

impl FileSystem for OsFileSystem {
    fn use_case_sensitive_file_names(&self) -> bool {
        self.case_sensitive
    }

    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn get_accessible_entries(&self, path: &str) -> Entries {
        let dir = if path.is_empty() { "." } else { path };
        let Ok(read_dir) = fs::read_dir(dir) else {
            return Entries::default();
        };

        let mut entries = Entries::default();
        for entry in read_dir.flatten() {
            let Some(name) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            if name == "." || name == ".." {
                continue;
            }
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            // Symlinks are classified by what they point at; dangling ones are dropped.
            let (is_file, is_dir) = if file_type.is_symlink() {
                match fs::metadata(entry.path()) {
                    Ok(meta) => (meta.is_file(), meta.is_dir()),
                    Err(_) => continue,
                }
            } else {
                (file_type.is_file(), file_type.is_dir())
            };

            if is_file {
                entries.files.push(name);
            } else if is_dir {
                entries.directories.push(name);
            }
        }
        entries
    }

    fn realpath(&self, path: &str) -> String {
        match fs::canonicalize(path) {
            Ok(resolved) => paths::normalize_slashes(&resolved.to_string_lossy()).into_owned(),
            Err(_) => path.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
