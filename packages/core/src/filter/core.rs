//! Filter expression evaluation
//!
//! Walks a compiled filter tree for one candidate. Logical nodes
//! short-circuit left to right; negation inverts the falsy treatment of
//! missing values, so `!@.isbn` is true exactly when `@.isbn` is absent
//! or null.

use serde_json::Value;

use super::comparisons;
use super::operators;
use super::patterns::pattern_matches;
use super::resolve::{resolve_operand, Resolved};
use crate::ast::{ComparisonOp, FilterExpression, ValueNode};
use crate::config::Configuration;

/// Evaluator for compiled filter expressions
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// Decide whether a candidate passes the filter
    ///
    /// Total over all inputs: malformed operand combinations evaluate to
    /// false rather than failing.
    pub fn evaluate(
        expression: &FilterExpression,
        candidate: &Value,
        root: &Value,
        config: &Configuration,
    ) -> bool {
        match expression {
            FilterExpression::And { operands } => operands
                .iter()
                .all(|operand| Self::evaluate(operand, candidate, root, config)),
            FilterExpression::Or { operands } => operands
                .iter()
                .any(|operand| Self::evaluate(operand, candidate, root, config)),
            FilterExpression::Not { operand } => {
                !Self::evaluate(operand, candidate, root, config)
            }
            FilterExpression::Exists { value } => {
                resolve_operand(value, candidate, root, config).is_truthy()
            }
            FilterExpression::Comparison { left, op, right } => {
                Self::compare(left, *op, right, candidate, root, config)
            }
        }
    }

    /// Evaluate one relational node
    fn compare(
        left: &ValueNode,
        op: ComparisonOp,
        right: &ValueNode,
        candidate: &Value,
        root: &Value,
        config: &Configuration,
    ) -> bool {
        match op {
            // The pattern may stand on either side of '=~'
            ComparisonOp::RegexMatch => match (left, right) {
                (
                    ValueNode::Pattern {
                        source,
                        case_insensitive,
                    },
                    operand,
                )
                | (
                    operand,
                    ValueNode::Pattern {
                        source,
                        case_insensitive,
                    },
                ) => {
                    let resolved = resolve_operand(operand, candidate, root, config);
                    pattern_matches(source, *case_insensitive, &resolved)
                }
                _ => false,
            },
            ComparisonOp::Matches => match (left, right) {
                (ValueNode::Predicate(predicate), _) | (_, ValueNode::Predicate(predicate)) => {
                    predicate.test(candidate, root)
                }
                _ => false,
            },
            _ => {
                let left = resolve_operand(left, candidate, root, config);
                let right = resolve_operand(right, candidate, root, config);
                Self::compare_resolved(op, &left, &right)
            }
        }
    }

    /// Dispatch a comparison over resolved operands
    fn compare_resolved(op: ComparisonOp, left: &Resolved, right: &Resolved) -> bool {
        match op {
            ComparisonOp::Eq => comparisons::eq(left, right),
            ComparisonOp::Ne => !comparisons::eq(left, right),
            ComparisonOp::Lt | ComparisonOp::Lte | ComparisonOp::Gt | ComparisonOp::Gte => {
                comparisons::ordering(op, left, right)
            }
            _ => operators::evaluate(op, left, right),
        }
    }
}
