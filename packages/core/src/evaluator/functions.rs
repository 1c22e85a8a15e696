//! Function segment invocation
//!
//! Resolves the argument list left to right for each branch, invokes
//! the registered implementation, and splices the returned value into
//! the outcome as if it were a document node. Invocation failures are
//! fatal and abort the evaluation.

use super::context::{Branch, EvaluationContext};
use super::engine::PathEvaluator;
use crate::ast::FunctionArg;
use crate::error::{invalid_path_error, PathResult};
use crate::functions::{registry, ResolvedArg};

/// Invoke the named function for every live branch
pub(super) fn invoke_for_branches(
    ctx: &mut EvaluationContext<'_>,
    branches: &[Branch<'_>],
    name: &str,
    args: &[FunctionArg],
) -> PathResult<()> {
    let Some(function) = registry::lookup(name) else {
        // Compilation validates names; a vanished registration is still
        // a path error, not a provider fault.
        return Err(invalid_path_error(
            name,
            format!("unknown function '{name}'"),
            None,
        ));
    };

    for branch in branches {
        let mut resolved = Vec::with_capacity(args.len());
        for arg in args {
            match arg {
                FunctionArg::Literal(value) => resolved.push(ResolvedArg::Literal(value.clone())),
                FunctionArg::Path(path) => {
                    let origin = if path.is_root_path() {
                        ctx.root
                    } else {
                        branch.node
                    };
                    let values =
                        PathEvaluator::resolve_values(path, origin, ctx.root, ctx.config)?;
                    resolved.push(ResolvedArg::Nodes(values));
                }
            }
        }

        let value = function.invoke(branch.node, &resolved)?;
        ctx.add_function_match(value, &branch.location, name);
    }
    Ok(())
}
