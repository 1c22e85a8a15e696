//! Fluent path query API for tree documents
//!
//! Thin public surface over the engine in `docpath_core`: parse a
//! document once, then read values, read canonical paths, or mutate in
//! place with compiled, cached path expressions.
//!
//! # Examples
//!
//! ```rust
//! use docpath::DocPath;
//! use serde_json::json;
//!
//! let ctx = DocPath::parse(json!({"store": {"book": [
//!     {"title": "Moby Dick", "price": 8.99},
//!     {"title": "The Lord of the Rings", "price": 22.99},
//! ]}}));
//!
//! let cheap = ctx.read("$.store.book[?(@.price < 10)].title")?;
//! assert_eq!(cheap, json!(["Moby Dick"]));
//! # Ok::<(), docpath::PathError>(())
//! ```

#![deny(unsafe_code)]

pub mod context;

pub use context::{DocumentContext, ParseContext};

// Re-export engine types so callers need only this crate
pub use docpath_core::{
    CacheProvider, CompiledPath, ComparisonOp, ConfigOption, Configuration, ConfigurationBuilder,
    CustomPredicate, DocumentProvider, EvaluationOutcome, LruPathCache, MappingProvider,
    NoopPathCache, PathCache, PathCompiler, PathError, PathEvaluator, PathFunction, PathResult,
    ResolvedArg, SerdeDocumentProvider, SerdeMappingProvider,
};

use std::sync::Arc;

use serde_json::Value;

/// Main entry point providing static parse and compile methods
pub struct DocPath;

impl DocPath {
    /// Compile a path through the process-wide cache
    pub fn compile(path: &str) -> PathResult<Arc<CompiledPath>> {
        PathCompiler::compile_cached(path)
    }

    /// Bind a document with the default configuration
    #[must_use]
    pub fn parse(document: Value) -> DocumentContext {
        DocumentContext::new(document, Configuration::default())
    }

    /// Bind a JSON text document with the default configuration
    pub fn parse_str(json: &str) -> PathResult<DocumentContext> {
        ParseContext::new(Configuration::default()).parse_str(json)
    }

    /// Bind documents with a custom configuration
    #[must_use]
    pub fn using(config: Configuration) -> ParseContext {
        ParseContext::new(config)
    }

    /// One-shot read against a borrowed document
    pub fn read(document: &Value, path: &str) -> PathResult<Value> {
        DocumentContext::read_in(document, &Configuration::default(), path)
    }
}
