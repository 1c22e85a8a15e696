//! Predicate evaluation for filter expressions
//!
//! Evaluates a compiled filter tree against a candidate node and the
//! document root. Every operator is a total function: mismatched operand
//! kinds make a predicate false, never an error, so evaluation of the
//! remaining candidates continues unaffected.

mod comparisons;
mod core;
mod operators;
mod patterns;
mod regex_cache;
mod resolve;

pub use self::core::FilterEvaluator;
pub use resolve::Resolved;
pub(crate) use regex_cache::{pattern_key, REGEX_CACHE};
