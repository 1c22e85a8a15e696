//! Error handling for path compilation and evaluation
//!
//! Compile-time failures (`Syntax`, `InvalidPath`) are always fatal.
//! `NotFound` is recoverable when the active configuration suppresses it;
//! `FunctionInvocation` and `Provider` failures are always fatal.

mod constructors;
mod types;

pub use constructors::{
    filter_error, function_argument_error, function_invocation_error, invalid_path_error,
    not_found_error, provider_error, syntax_error,
};
pub use types::{PathError, PathResult};
