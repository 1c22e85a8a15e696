//! Process-wide cache handle
//!
//! The cache is constructed lazily on first use. A different
//! implementation can be installed exactly once, before anything has
//! compiled through the cache; afterwards the handle is fixed for the
//! lifetime of the process.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::lru::LruPathCache;
use super::PathCache;

static CACHE: OnceCell<Arc<dyn PathCache>> = OnceCell::new();

/// Access point for the process-wide compiled-path cache
pub struct CacheProvider;

impl CacheProvider {
    /// Install a cache implementation
    ///
    /// Returns `Err` with the rejected cache when a cache is already in
    /// use (installed explicitly or initialized lazily).
    pub fn install(cache: Arc<dyn PathCache>) -> Result<(), Arc<dyn PathCache>> {
        CACHE.set(cache)
    }

    /// The active cache, defaulting to a bounded LRU on first use
    #[must_use]
    pub fn cache() -> Arc<dyn PathCache> {
        Arc::clone(CACHE.get_or_init(|| {
            log::debug!("initializing default LRU path cache");
            Arc::new(LruPathCache::default())
        }))
    }
}
