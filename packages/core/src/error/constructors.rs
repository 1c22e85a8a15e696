//! Error constructor helpers
//!
//! Factory functions used throughout the compiler and evaluator so call
//! sites stay terse and messages stay uniform. Failures raised while
//! parsing function arguments or filter bodies carry a fixed prefix,
//! letting callers tell them apart from document-level errors.

use super::types::PathError;

/// Lexical error citing the offending position
pub fn syntax_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: Option<usize>,
) -> PathError {
    PathError::Syntax {
        expression: expression.into(),
        reason: reason.into(),
        position,
    }
}

/// Structural parse error
pub fn invalid_path_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: Option<usize>,
) -> PathError {
    PathError::InvalidPath {
        expression: expression.into(),
        reason: reason.into(),
        position,
    }
}

/// Parse error inside a function argument list
///
/// The message starts with a fixed indicator so callers can distinguish
/// "this function call never closed" from a plain syntax error.
pub fn function_argument_error(
    expression: impl Into<String>,
    function: &str,
    reason: impl Into<String>,
) -> PathError {
    PathError::InvalidPath {
        expression: expression.into(),
        reason: format!(
            "function argument parsing failed: arguments to function '{}' {}",
            function,
            reason.into()
        ),
        position: None,
    }
}

/// Parse error inside a filter body
pub fn filter_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: Option<usize>,
) -> PathError {
    PathError::InvalidPath {
        expression: expression.into(),
        reason: format!("filter expression parsing failed: {}", reason.into()),
        position,
    }
}

/// Evaluation produced no result for a definite path
pub fn not_found_error(path: impl Into<String>) -> PathError {
    PathError::NotFound { path: path.into() }
}

/// A path function rejected its input
pub fn function_invocation_error(
    function: impl Into<String>,
    reason: impl Into<String>,
) -> PathError {
    PathError::FunctionInvocation {
        function: function.into(),
        reason: reason.into(),
    }
}

/// Structural inconsistency reported by the document provider
pub fn provider_error(reason: impl Into<String>) -> PathError {
    PathError::Provider {
        reason: reason.into(),
    }
}
