//! Pass-through cache that stores nothing
//!
//! Installing this disables caching entirely without any evaluator
//! changes; every compile request does the full work.

use std::sync::Arc;

use super::PathCache;
use crate::compiled::CompiledPath;

/// Cache implementation that never retains entries
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPathCache;

impl PathCache for NoopPathCache {
    #[inline]
    fn get(&self, _key: &str) -> Option<Arc<CompiledPath>> {
        None
    }

    #[inline]
    fn put(&self, _key: String, _path: Arc<CompiledPath>) {}
}
