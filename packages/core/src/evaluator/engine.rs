//! Traversal engine
//!
//! Processes the segment chain iteratively over a branch worklist, so
//! recursion depth never tracks document depth. Function segments are
//! chain-terminal and splice their return value straight into the
//! outcome.

use serde_json::Value;

use super::context::{Branch, EvaluationContext, EvaluationOutcome};
use super::{descent, filters, functions, segments};
use crate::ast::PathSegment;
use crate::canonical::NodeLocation;
use crate::compiled::CompiledPath;
use crate::config::Configuration;
use crate::error::PathResult;

/// Evaluator for compiled paths
pub struct PathEvaluator;

impl PathEvaluator {
    /// Evaluate a compiled path against a document root
    pub fn evaluate(
        path: &CompiledPath,
        root: &Value,
        config: &Configuration,
    ) -> PathResult<EvaluationOutcome> {
        let mut ctx = EvaluationContext::new(root, config, false);
        Self::run(path, root, &mut ctx)?;
        Ok(ctx.into_outcome())
    }

    /// Evaluate for a mutation; collects edit targets without leaf-to-null
    pub(crate) fn evaluate_for_update(
        path: &CompiledPath,
        root: &Value,
        config: &Configuration,
    ) -> PathResult<EvaluationOutcome> {
        let mut ctx = EvaluationContext::new(root, config, true);
        Self::run(path, root, &mut ctx)?;
        Ok(ctx.into_outcome())
    }

    /// Resolve a sub-path leniently to its matched values
    ///
    /// Used for predicate operands and function arguments, where a
    /// missing segment means "no value", never a failure.
    pub(crate) fn resolve_values(
        path: &CompiledPath,
        origin: &Value,
        root: &Value,
        config: &Configuration,
    ) -> PathResult<Vec<Value>> {
        let mut ctx = EvaluationContext::new_lenient(root, config);
        Self::run(path, origin, &mut ctx)?;
        Ok(ctx.into_outcome().values)
    }

    /// Drive one traversal from `origin` through the whole chain
    fn run<'a>(
        path: &CompiledPath,
        origin: &'a Value,
        ctx: &mut EvaluationContext<'a>,
    ) -> PathResult<()> {
        let chain = path.segments();
        let mut branches = vec![Branch {
            node: origin,
            location: NodeLocation::root(),
        }];

        for (index, segment) in chain.iter().enumerate() {
            if let PathSegment::Function { name, args } = segment {
                // Compile-time validation makes function segments terminal
                return functions::invoke_for_branches(ctx, &branches, name, args);
            }

            let is_leaf = index + 1 == chain.len();
            branches = Self::apply_segment(segment, branches, is_leaf, ctx)?;
            if branches.is_empty() {
                break;
            }
        }

        for branch in branches {
            ctx.add_match(branch.node, &branch.location);
        }
        Ok(())
    }

    /// Apply one segment to every live branch
    fn apply_segment<'a>(
        segment: &PathSegment,
        branches: Vec<Branch<'a>>,
        is_leaf: bool,
        ctx: &mut EvaluationContext<'a>,
    ) -> PathResult<Vec<Branch<'a>>> {
        match segment {
            PathSegment::Root => Ok(vec![Branch {
                node: ctx.root,
                location: NodeLocation::root(),
            }]),
            PathSegment::Property { names } => {
                segments::apply_property(branches, names, is_leaf, ctx)
            }
            PathSegment::Wildcard => Ok(segments::apply_wildcard(branches, ctx)),
            PathSegment::Index { indices } => segments::apply_index(branches, indices, ctx),
            PathSegment::Slice { start, end, step } => {
                Ok(segments::apply_slice(branches, *start, *end, *step, ctx))
            }
            PathSegment::RecursiveDescent => Ok(descent::expand(branches, ctx)),
            PathSegment::Filter { expression } => {
                Ok(filters::apply_filter(branches, expression, ctx))
            }
            PathSegment::Function { .. } => {
                unreachable!("function segments are handled by the traversal loop")
            }
        }
    }
}
