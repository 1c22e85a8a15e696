//! Document binding and fluent operations
//!
//! A `DocumentContext` owns one parsed document plus the configuration
//! used for every operation on it. Reads follow the engine's output
//! modes: definite paths yield a single value, indefinite paths (and
//! the always-return-list option) yield arrays, and the as-path-list
//! option yields canonical path strings.

use serde::de::DeserializeOwned;
use serde_json::Value;

use docpath_core::error::{not_found_error, provider_error};
use docpath_core::{
    evaluator, CompiledPath, ConfigOption, Configuration, PathCompiler, PathEvaluator, PathResult,
};

/// Configuration-first entry point (`DocPath::using(config).parse(...)`)
pub struct ParseContext {
    config: Configuration,
}

impl ParseContext {
    /// Bind a configuration for later parses
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Bind an already-built document
    #[must_use]
    pub fn parse(&self, document: Value) -> DocumentContext {
        DocumentContext::new(document, self.config.clone())
    }

    /// Parse a JSON text document and bind it
    pub fn parse_str(&self, json: &str) -> PathResult<DocumentContext> {
        let document: Value = serde_json::from_str(json)
            .map_err(|error| provider_error(format!("document is not valid JSON: {error}")))?;
        Ok(self.parse(document))
    }
}

/// One document bound to one configuration
#[derive(Debug, Clone)]
pub struct DocumentContext {
    document: Value,
    config: Configuration,
}

impl DocumentContext {
    /// Bind a document and configuration
    #[must_use]
    pub fn new(document: Value, config: Configuration) -> Self {
        Self { document, config }
    }

    /// The bound document
    #[inline]
    #[must_use]
    pub fn json(&self) -> &Value {
        &self.document
    }

    /// Take the document back out
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.document
    }

    /// Read the value(s) matched by a path
    pub fn read(&self, path: &str) -> PathResult<Value> {
        Self::read_in(&self.document, &self.config, path)
    }

    /// Read with an already compiled path
    pub fn read_compiled(&self, path: &CompiledPath) -> PathResult<Value> {
        Self::read_outcome(path, &self.document, &self.config)
    }

    /// Read and map the result into a typed value
    pub fn read_as<T: DeserializeOwned>(&self, path: &str) -> PathResult<T> {
        let value = self.read(path)?;
        let materialized = self.config.mapping_provider().materialize(&value);
        serde_json::from_value(materialized)
            .map_err(|error| provider_error(format!("mapping to target type failed: {error}")))
    }

    /// Read the canonical paths of every match
    pub fn read_paths(&self, path: &str) -> PathResult<Vec<String>> {
        let compiled = PathCompiler::compile_cached(path)?;
        let outcome = PathEvaluator::evaluate(&compiled, &self.document, &self.config)?;
        Ok(outcome.paths)
    }

    /// Replace every matched value
    pub fn set(&mut self, path: &str, value: Value) -> PathResult<usize> {
        let compiled = PathCompiler::compile_cached(path)?;
        evaluator::set(&compiled, &mut self.document, &value, &self.config)
    }

    /// Insert or replace a member on every matched map
    pub fn put(&mut self, path: &str, key: &str, value: Value) -> PathResult<usize> {
        let compiled = PathCompiler::compile_cached(path)?;
        evaluator::put(&compiled, &mut self.document, key, &value, &self.config)
    }

    /// Append a value to every matched array
    pub fn add(&mut self, path: &str, value: Value) -> PathResult<usize> {
        let compiled = PathCompiler::compile_cached(path)?;
        evaluator::add(&compiled, &mut self.document, &value, &self.config)
    }

    /// Remove every matched node
    pub fn delete(&mut self, path: &str) -> PathResult<usize> {
        let compiled = PathCompiler::compile_cached(path)?;
        evaluator::delete(&compiled, &mut self.document, &self.config)
    }

    /// Rename a member on every matched map
    pub fn rename_key(&mut self, path: &str, old_key: &str, new_key: &str) -> PathResult<usize> {
        let compiled = PathCompiler::compile_cached(path)?;
        evaluator::rename_key(&compiled, &mut self.document, old_key, new_key, &self.config)
    }

    /// Transform every matched value through a callback
    pub fn map<F: FnMut(Value) -> Value>(&mut self, path: &str, mut transform: F) -> PathResult<usize> {
        let compiled = PathCompiler::compile_cached(path)?;
        evaluator::map(&compiled, &mut self.document, &self.config, &mut transform)
    }

    /// Shared read implementation over a borrowed document
    pub(crate) fn read_in(document: &Value, config: &Configuration, path: &str) -> PathResult<Value> {
        let compiled = PathCompiler::compile_cached(path)?;
        Self::read_outcome(&compiled, document, config)
    }

    fn read_outcome(
        compiled: &CompiledPath,
        document: &Value,
        config: &Configuration,
    ) -> PathResult<Value> {
        let outcome = PathEvaluator::evaluate(compiled, document, config)?;

        if config.contains(ConfigOption::AsPathList) {
            return Ok(Value::Array(
                outcome.paths.into_iter().map(Value::String).collect(),
            ));
        }

        let as_list =
            !compiled.is_definite() || config.contains(ConfigOption::AlwaysReturnList);
        if as_list {
            return Ok(Value::Array(outcome.values));
        }

        let mut values = outcome.values;
        match values.len() {
            0 => {
                if config.contains(ConfigOption::SuppressExceptions) {
                    log::debug!("suppressing missing result for '{}'", compiled.original());
                    Ok(Value::Null)
                } else {
                    Err(not_found_error(compiled.original()))
                }
            }
            1 => Ok(values.swap_remove(0)),
            // A definite path cannot fan out; more than one match means
            // the provider reported inconsistent structure
            _ => Err(provider_error(format!(
                "definite path '{}' produced {} results",
                compiled.original(),
                values.len()
            ))),
        }
    }
}
