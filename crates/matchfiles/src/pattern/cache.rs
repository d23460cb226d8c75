// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared cache of compiled patterns.
//!
//! Compilation is deterministic, so the cache only saves work: a miss and a
//! hit produce patterns with identical match results.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use super::compile::{CompiledPattern, Usage};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    spec: String,
    base_path: String,
    usage: Usage,
    case_sensitive: bool,
}

/// Entries kept by [`PatternCache::new`] and the global cache.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Compiled patterns keyed by spec, base path, usage and case sensitivity.
///
/// Specs that compile to nothing are cached too. A miss that finds the cache
/// at capacity empties it first, so a long-running process that sees an
/// unbounded stream of base paths holds at most `capacity` entries (give or
/// take concurrent inserts).
#[derive(Debug)]
pub struct PatternCache {
    inner: DashMap<CacheKey, Option<Arc<CompiledPattern>>>,
    capacity: usize,
}

static GLOBAL: LazyLock<PatternCache> = LazyLock::new(PatternCache::new);

impl Default for PatternCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Process-wide cache used by the single-path matching helpers.
    pub fn global() -> &'static PatternCache {
        &GLOBAL
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn compile(
        &self,
        spec: &str,
        base_path: &str,
        usage: Usage,
        case_sensitive: bool,
    ) -> Option<Arc<CompiledPattern>> {
        let key = CacheKey {
            spec: spec.to_string(),
            base_path: base_path.to_string(),
            usage,
            case_sensitive,
        };
        if let Some(entry) = self.inner.get(&key) {
            return entry.value().clone();
        }

        let compiled = CompiledPattern::compile(spec, base_path, usage, case_sensitive).map(Arc::new);
        if self.inner.len() >= self.capacity {
            tracing::debug!("pattern cache full ({} entries), clearing", self.inner.len());
            self.inner.clear();
        }
        self.inner
            .entry(key)
            .or_insert(compiled)
            .value()
            .clone()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
