//! Compiled path representation
//!
//! A `CompiledPath` is the immutable product of compilation: an ordered
//! segment chain plus flags derived from it. It holds no external
//! resources and may be evaluated concurrently from any number of
//! threads.

use std::fmt;

use crate::ast::PathSegment;

/// Compiled path expression, reusable across evaluations
#[derive(Debug, Clone)]
pub struct CompiledPath {
    /// Segment chain executed in order
    segments: Vec<PathSegment>,
    /// Original expression text for display and error reporting
    original: String,
    /// Whether the chain is anchored at the document root ($)
    is_root_path: bool,
    /// Whether the chain can match at most one node
    is_definite: bool,
}

impl CompiledPath {
    /// Build a compiled path, deriving definiteness from the chain
    pub(crate) fn new(segments: Vec<PathSegment>, original: String, is_root_path: bool) -> Self {
        let is_definite = segments.iter().all(PathSegment::is_definite);
        Self {
            segments,
            original,
            is_root_path,
            is_definite,
        }
    }

    /// Original expression text
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Segment chain
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// True when the chain is anchored at the document root
    #[inline]
    #[must_use]
    pub fn is_root_path(&self) -> bool {
        self.is_root_path
    }

    /// True when no segment can fan out (no wildcard, slice, recursive
    /// descent, filter, or multi-valued index/property)
    #[inline]
    #[must_use]
    pub fn is_definite(&self) -> bool {
        self.is_definite
    }

    /// True when the final segment is a function invocation
    #[inline]
    #[must_use]
    pub fn is_function_path(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Function { .. }))
    }
}

impl fmt::Display for CompiledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl PartialEq for CompiledPath {
    fn eq(&self, other: &Self) -> bool {
        self.original == other.original
    }
}
