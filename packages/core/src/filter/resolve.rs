//! Value node resolution
//!
//! Resolves a filter operand against the candidate node and document
//! root. An absent path resolves to the `Missing` sentinel, never an
//! error; resolution failures inside predicates are swallowed the same
//! way so heterogeneous candidates cannot break evaluation.

use serde_json::Value;

use crate::ast::ValueNode;
use crate::config::Configuration;
use crate::evaluator::PathEvaluator;

/// Outcome of resolving a filter operand
#[derive(Debug, Clone)]
pub enum Resolved {
    /// The operand's path matched nothing
    Missing,
    /// A single concrete value
    One(Value),
    /// Multiple values from an indefinite sub-path
    Many(Vec<Value>),
}

impl Resolved {
    /// Whether the operand resolved to at least one node
    #[inline]
    #[must_use]
    pub fn exists(&self) -> bool {
        !matches!(self, Resolved::Missing)
    }

    /// Truthiness for bare predicates: a non-null resolved node
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Resolved::Missing => false,
            Resolved::One(value) => !value.is_null(),
            Resolved::Many(values) => !values.is_empty(),
        }
    }

    /// Collapse to a single value; `Many` becomes an array
    #[must_use]
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Resolved::Missing => None,
            Resolved::One(value) => Some(value.clone()),
            Resolved::Many(values) => Some(Value::Array(values.clone())),
        }
    }

    /// View as a list of elements for the list operators
    ///
    /// A single array value contributes its elements; an indefinite
    /// result contributes its matches.
    #[must_use]
    pub fn as_element_list(&self) -> Option<Vec<&Value>> {
        match self {
            Resolved::Missing => None,
            Resolved::One(Value::Array(items)) => Some(items.iter().collect()),
            Resolved::One(_) => None,
            Resolved::Many(values) => Some(values.iter().collect()),
        }
    }
}

/// Resolve one operand against (candidate, root)
pub(super) fn resolve_operand(
    node: &ValueNode,
    candidate: &Value,
    root: &Value,
    config: &Configuration,
) -> Resolved {
    match node {
        ValueNode::Literal(value) => Resolved::One(value.clone()),
        ValueNode::Pattern { source, .. } => {
            // Patterns are matched by the regex operator; as a plain
            // value the raw source stands in.
            Resolved::One(Value::String(source.clone()))
        }
        ValueNode::Predicate(_) => Resolved::Missing,
        ValueNode::Path { path, relative } => {
            let origin = if *relative { candidate } else { root };
            match PathEvaluator::resolve_values(path, origin, root, config) {
                Ok(values) => {
                    if path.is_definite() {
                        match values.into_iter().next() {
                            Some(value) => Resolved::One(value),
                            None => Resolved::Missing,
                        }
                    } else if values.is_empty() {
                        Resolved::Missing
                    } else {
                        Resolved::Many(values)
                    }
                }
                Err(error) => {
                    log::debug!("operand path '{path}' failed inside predicate: {error}");
                    Resolved::Missing
                }
            }
        }
    }
}
