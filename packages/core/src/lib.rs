//! Path query engine for tree-shaped documents
//!
//! This crate compiles a textual path expression (property access,
//! wildcards, recursive descent, array slices, and boolean filter
//! predicates with functions) into a reusable [`CompiledPath`], then
//! evaluates it against a document for matched values, canonical paths,
//! or in-place mutations.
//!
//! # Features
//!
//! - Full grammar support: dot and bracket notation, unions, slices,
//!   recursive descent, filter predicates, function invocation
//! - Exception-free predicate evaluation with permissive type coercion
//! - Bounded, lock-free compiled-path caching
//! - Pluggable document and mapping providers
//!
//! # Examples
//!
//! ```rust
//! use docpath_core::{Configuration, PathCompiler, PathEvaluator};
//! use serde_json::json;
//!
//! let document = json!({"store": {"book": [
//!     {"title": "Moby Dick", "price": 8.99},
//!     {"title": "Sword of Honour", "price": 12.99},
//! ]}});
//!
//! let path = PathCompiler::compile("$.store.book[?(@.price < 10)].title")?;
//! let outcome = PathEvaluator::evaluate(&path, &document, &Configuration::default())?;
//! assert_eq!(outcome.values, vec![json!("Moby Dick")]);
//! # Ok::<(), docpath_core::PathError>(())
//! ```

pub mod ast;
pub mod cache;
pub mod canonical;
pub mod compiled;
pub mod compiler;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod filter_parser;
pub mod functions;
pub mod provider;
pub mod selector_parser;
pub mod tokenizer;
pub mod tokens;

pub use self::{
    ast::{ComparisonOp, CustomPredicate, FilterExpression, FunctionArg, PathSegment, ValueNode},
    cache::{CacheProvider, CacheStats, LruPathCache, NoopPathCache, PathCache},
    canonical::{NodeLocation, PathStep},
    compiled::CompiledPath,
    compiler::PathCompiler,
    config::{ConfigOption, Configuration, ConfigurationBuilder},
    error::{PathError, PathResult},
    evaluator::{EvaluationOutcome, PathEvaluator},
    filter::{FilterEvaluator, Resolved},
    functions::{PathFunction, ResolvedArg},
    provider::{DocumentProvider, MappingProvider, SerdeDocumentProvider, SerdeMappingProvider},
};
