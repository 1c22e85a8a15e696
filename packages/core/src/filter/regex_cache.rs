//! Regex compilation cache
//!
//! Compiled patterns are shared process-wide so repeated predicate
//! evaluation never recompiles. The cache is capacity-bounded; once
//! full, further patterns compile uncached.

use std::collections::HashMap;
use std::sync::RwLock;

/// Bounded cache of compiled regular expressions
pub(crate) struct RegexCache {
    cache: RwLock<HashMap<String, regex::Regex>>,
}

impl RegexCache {
    pub(crate) fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get a compiled regex from the cache, compiling and caching on miss
    pub(crate) fn get_or_compile(&self, pattern: &str) -> Result<regex::Regex, regex::Error> {
        if let Ok(cache) = self.cache.read()
            && let Some(compiled) = cache.get(pattern)
        {
            return Ok(compiled.clone());
        }

        let compiled = regex::Regex::new(pattern)?;

        if let Ok(mut cache) = self.cache.write()
            && cache.len() < 64
        {
            cache.insert(pattern.to_string(), compiled.clone());
        }

        Ok(compiled)
    }
}

lazy_static::lazy_static! {
    pub(crate) static ref REGEX_CACHE: RegexCache = RegexCache::new();
}

/// Cache key embedding the case-insensitivity flag as an inline modifier
#[inline]
pub(crate) fn pattern_key(source: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        format!("(?i){source}")
    } else {
        source.to_string()
    }
}
