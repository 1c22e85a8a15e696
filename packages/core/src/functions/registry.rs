//! Function registry
//!
//! Maps function names to implementations. The registry is a
//! process-wide snapshot: unknown names are rejected when a path
//! compiles, so custom functions must be registered before the first
//! compile that uses them.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::numeric::{AvgFunction, MaxFunction, MinFunction, StdDevFunction, SumFunction};
use super::structural::{AppendFunction, FirstFunction, KeysFunction, LastFunction};
use super::text::{ConcatFunction, LengthFunction};
use super::types::PathFunction;

static REGISTRY: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::with_builtins);

/// Name-to-implementation mapping for path functions
pub struct FunctionRegistry {
    entries: RwLock<HashMap<String, Arc<dyn PathFunction>>>,
}

impl FunctionRegistry {
    /// Registry preloaded with the built-in functions
    fn with_builtins() -> Self {
        let registry = Self {
            entries: RwLock::new(HashMap::new()),
        };
        registry.add(Arc::new(SumFunction));
        registry.add(Arc::new(MinFunction));
        registry.add(Arc::new(MaxFunction));
        registry.add(Arc::new(AvgFunction));
        registry.add(Arc::new(StdDevFunction));
        registry.add(Arc::new(LengthFunction));
        registry.add(Arc::new(ConcatFunction));
        registry.add(Arc::new(AppendFunction));
        registry.add(Arc::new(KeysFunction));
        registry.add(Arc::new(FirstFunction));
        registry.add(Arc::new(LastFunction));
        registry
    }

    fn add(&self, function: Arc<dyn PathFunction>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(function.name().to_string(), function);
        }
    }

    fn find(&self, name: &str) -> Option<Arc<dyn PathFunction>> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(name).cloned())
    }
}

/// Look up a function implementation by name
#[must_use]
pub fn lookup(name: &str) -> Option<Arc<dyn PathFunction>> {
    REGISTRY.find(name)
}

/// Whether a function name is registered
#[must_use]
pub fn contains(name: &str) -> bool {
    REGISTRY.find(name).is_some()
}

/// Register a custom function
///
/// Must happen before the first compile of any path that names it;
/// paths compiled earlier have already been rejected.
pub fn register(function: Arc<dyn PathFunction>) {
    REGISTRY.add(function);
}
