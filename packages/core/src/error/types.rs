//! Path error types
//!
//! One error enum covers the whole engine; the variant tells the caller
//! which phase failed and whether the failure is recoverable.

use thiserror::Error;

/// Errors surfaced by the path compiler and the evaluation engine
#[derive(Debug, Clone, Error)]
pub enum PathError {
    /// Lexical failure in the raw path text (unterminated quote,
    /// malformed escape, unclosed regex literal)
    #[error("{reason} (at position {position:?} in '{expression}')")]
    Syntax {
        expression: String,
        reason: String,
        position: Option<usize>,
    },

    /// Structural failure while parsing token stream into a compiled path
    #[error("{reason} (in path '{expression}')")]
    InvalidPath {
        expression: String,
        reason: String,
        position: Option<usize>,
    },

    /// A definite path produced no result during evaluation
    #[error("no results for path '{path}'")]
    NotFound { path: String },

    /// A path function rejected its input or arguments
    #[error("function '{function}' failed: {reason}")]
    FunctionInvocation { function: String, reason: String },

    /// The document provider reported a structural inconsistency
    #[error("document provider error: {reason}")]
    Provider { reason: String },
}

impl PathError {
    /// True for failures the configuration may downgrade to an empty result
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PathError::NotFound { .. })
    }

    /// True for failures raised before any document was touched
    #[inline]
    #[must_use]
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            PathError::Syntax { .. } | PathError::InvalidPath { .. }
        )
    }
}

/// Result type for path operations
pub type PathResult<T> = Result<T, PathError>;
