//! Function capability types

use serde_json::Value;

use crate::error::PathResult;

/// One resolved function argument
///
/// Argument paths are evaluated before invocation, left to right, each
/// against the current node (absolute paths against the root).
#[derive(Debug, Clone)]
pub enum ResolvedArg {
    /// Literal argument, passed through unchanged
    Literal(Value),
    /// Values matched by a sub-path argument
    Nodes(Vec<Value>),
}

impl ResolvedArg {
    /// All values carried by this argument
    #[must_use]
    pub fn values(&self) -> Vec<&Value> {
        match self {
            ResolvedArg::Literal(value) => vec![value],
            ResolvedArg::Nodes(values) => values.iter().collect(),
        }
    }
}

/// Capability implemented by every path function
///
/// An implementation accepts the resolved argument list plus the current
/// node and returns exactly one value, or fails; failures are fatal to
/// the evaluation that invoked them.
pub trait PathFunction: Send + Sync {
    /// Registered function name
    fn name(&self) -> &'static str;

    /// Invoke with the current node and resolved arguments
    fn invoke(&self, current: &Value, args: &[ResolvedArg]) -> PathResult<Value>;
}
