//! Predicate segment application
//!
//! Array branches contribute their elements as candidates, map branches
//! their values; any other node is its own sole candidate. A candidate
//! survives iff the filter evaluates truthy with the candidate as `@`
//! and the document root as `$`.

use super::context::{Branch, EvaluationContext};
use crate::ast::FilterExpression;
use crate::filter::FilterEvaluator;

/// Keep the candidates each branch fans out to that pass the filter
pub(super) fn apply_filter<'a>(
    branches: Vec<Branch<'a>>,
    expression: &FilterExpression,
    ctx: &EvaluationContext<'a>,
) -> Vec<Branch<'a>> {
    let provider = ctx.provider();
    let mut out = Vec::new();

    for branch in &branches {
        if provider.is_array(branch.node) {
            let length = provider.length(branch.node).unwrap_or(0);
            for index in 0..length {
                if let Some(candidate) = provider.get_index(branch.node, index)
                    && FilterEvaluator::evaluate(expression, candidate, ctx.root, ctx.config)
                {
                    out.push(Branch {
                        node: candidate,
                        location: branch.location.child_index(index),
                    });
                }
            }
        } else if provider.is_map(branch.node) {
            for key in provider.keys(branch.node) {
                if let Some(candidate) = provider.get_property(branch.node, &key)
                    && FilterEvaluator::evaluate(expression, candidate, ctx.root, ctx.config)
                {
                    out.push(Branch {
                        node: candidate,
                        location: branch.location.child_key(&key),
                    });
                }
            }
        } else if FilterEvaluator::evaluate(expression, branch.node, ctx.root, ctx.config) {
            // A scalar is its own candidate
            out.push(branch.clone());
        }
    }
    out
}
