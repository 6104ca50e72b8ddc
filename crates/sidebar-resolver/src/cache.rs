//! Resolution cache
//!
//! Bounded keyed store of resolved documents. The default capacity is one
//! entry: resolving a new content identifier evicts the previous result
//! unconditionally. Entries are tagged with how resolution ended so a hit on
//! an exhausted item never re-runs the strategy chain.

use indexmap::IndexMap;
use sidebar_document::{ContentDocument, ContentId};
use std::num::NonZeroUsize;

/// How a cached resolution ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheStatus {
    /// A strategy produced a document with a sidebar
    Resolved,

    /// Every strategy was tried and the sidebar is still empty
    Exhausted,
}

/// Cached resolution result
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// Identifier the document was resolved for
    pub content_id: ContentId,
    /// Outcome of the resolution
    pub status: CacheStatus,
    /// Independent copy of the resolved document
    pub document: ContentDocument,
}

impl CacheEntry {
    /// Create entry
    #[inline]
    #[must_use]
    pub fn new(content_id: ContentId, status: CacheStatus, document: ContentDocument) -> Self {
        Self {
            content_id,
            status,
            document,
        }
    }
}

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: usize,
    /// Lookups answered from cache
    pub hits: u64,
    /// Lookups that missed
    pub misses: u64,
    /// Entries dropped to make room
    pub evictions: u64,
}

/// Bounded content-id keyed store, oldest entry evicted first
#[derive(Debug, Clone)]
pub struct ResolutionCache {
    capacity: NonZeroUsize,
    entries: IndexMap<ContentId, CacheEntry>,
    stats: CacheStats,
}

impl ResolutionCache {
    /// Create cache holding at most `capacity` entries
    #[inline]
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            entries: IndexMap::with_capacity(capacity.get()),
            stats: CacheStats::default(),
        }
    }

    /// Single-slot cache
    #[inline]
    #[must_use]
    pub fn single() -> Self {
        Self::new(NonZeroUsize::MIN)
    }

    /// Maximum number of entries
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Get a deep copy of the entry for `content_id`
    pub fn get(&mut self, content_id: &ContentId) -> Option<CacheEntry> {
        let entry = self.entries.get(content_id).cloned();
        if entry.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        entry
    }

    /// Store an entry, evicting the oldest ones when full
    ///
    /// Returns the evicted entries.
    pub fn insert(&mut self, entry: CacheEntry) -> Vec<CacheEntry> {
        self.entries.shift_remove(&entry.content_id);

        let mut evicted = Vec::new();
        while self.entries.len() >= self.capacity.get() {
            match self.entries.shift_remove_index(0) {
                Some((_, old)) => evicted.push(old),
                None => break,
            }
        }
        self.stats.evictions += evicted.len() as u64;

        self.entries.insert(entry.content_id.clone(), entry);
        evicted
    }

    /// Check if an entry exists without touching statistics
    #[inline]
    #[must_use]
    pub fn contains(&self, content_id: &ContentId) -> bool {
        self.entries.contains_key(content_id)
    }

    /// Drop all entries
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.entries.len(),
            ..self.stats
        }
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::single()
    }
}
