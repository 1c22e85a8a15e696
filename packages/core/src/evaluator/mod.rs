//! Evaluation engine
//!
//! Walks a document through a compiled segment chain using an iterative
//! branch worklist. Fan-out segments (wildcard, slice, filter, recursive
//! descent) multiply branches; every surviving branch contributes its
//! value and canonical path to the outcome. Mutations run the same
//! traversal, materialize their edit targets first, then apply changes
//! through the document provider.

mod context;
mod descent;
mod engine;
mod filters;
mod functions;
mod mutation;
mod segments;

pub use context::{EvaluationContext, EvaluationOutcome};
pub use engine::PathEvaluator;
pub use mutation::{add, delete, map, put, rename_key, set};
