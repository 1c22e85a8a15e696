//! Bounded least-recently-used path cache
//!
//! Lock-free storage using a crossbeam `SkipMap` with atomic access
//! stamps. Eviction runs inline with inserts: when over capacity, the
//! entries with the oldest stamps are discarded. An evicted entry is
//! simply dropped; readers holding its `Arc` are unaffected.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_skiplist::SkipMap;

use super::stats::CacheStats;
use super::PathCache;
use crate::compiled::CompiledPath;

/// Default entry capacity, matching the original engine's bound
pub const DEFAULT_CAPACITY: usize = 400;

struct CacheSlot {
    path: Arc<CompiledPath>,
    last_access: AtomicU64,
}

/// Bounded LRU cache for compiled paths
pub struct LruPathCache {
    entries: SkipMap<String, CacheSlot>,
    capacity: usize,
    clock: AtomicU64,
    entry_count: AtomicU64,
    stats: CacheStats,
}

impl LruPathCache {
    /// Create a cache bounded to `capacity` entries
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: SkipMap::new(),
            capacity: capacity.max(1),
            clock: AtomicU64::new(0),
            entry_count: AtomicU64::new(0),
            stats: CacheStats::default(),
        }
    }

    /// Access counters
    #[inline]
    #[must_use]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entry_count.load(Ordering::Relaxed) as usize
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Discard oldest-stamped entries until under capacity
    fn evict_oldest(&self) {
        let mut candidates: Vec<(String, u64)> = self
            .entries
            .iter()
            .map(|entry| {
                (
                    entry.key().clone(),
                    entry.value().last_access.load(Ordering::Relaxed),
                )
            })
            .collect();

        candidates.sort_by_key(|(_, stamp)| *stamp);

        for (key, _) in candidates {
            if (self.entry_count.load(Ordering::Relaxed) as usize) <= self.capacity {
                break;
            }
            if self.entries.remove(&key).is_some() {
                self.entry_count.fetch_sub(1, Ordering::Relaxed);
                self.stats.evictions.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

impl Default for LruPathCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PathCache for LruPathCache {
    fn get(&self, key: &str) -> Option<Arc<CompiledPath>> {
        match self.entries.get(key) {
            Some(entry) => {
                let stamp = self.tick();
                entry.value().last_access.store(stamp, Ordering::Relaxed);
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(&entry.value().path))
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    fn put(&self, key: String, path: Arc<CompiledPath>) {
        let stamp = self.tick();
        let fresh = self.entries.get(&key).is_none();
        self.entries.insert(
            key,
            CacheSlot {
                path,
                last_access: AtomicU64::new(stamp),
            },
        );
        if fresh {
            self.entry_count.fetch_add(1, Ordering::Relaxed);
        }

        if (self.entry_count.load(Ordering::Relaxed) as usize) > self.capacity {
            self.evict_oldest();
        }
    }
}
