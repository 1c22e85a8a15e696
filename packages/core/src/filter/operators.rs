//! Keyword operator contracts
//!
//! List membership, subset/intersection tests, size, emptiness,
//! existence, type, and containment. All total: an operand of the wrong
//! kind makes the predicate false.

use serde_json::Value;

use super::comparisons::value_eq;
use super::resolve::Resolved;
use crate::ast::ComparisonOp;

/// Evaluate a keyword operator over resolved operands
pub(super) fn evaluate(op: ComparisonOp, left: &Resolved, right: &Resolved) -> bool {
    match op {
        ComparisonOp::In => is_in(left, right),
        ComparisonOp::Nin => !is_in(left, right),
        ComparisonOp::SubsetOf => subset_of(left, right),
        ComparisonOp::AnyOf => any_of(left, right),
        ComparisonOp::NoneOf => !any_of(left, right),
        ComparisonOp::Size => size_matches(left, right),
        ComparisonOp::Empty => empty_matches(left, right),
        ComparisonOp::Exists => exists_matches(left, right),
        ComparisonOp::Type => type_matches(left, right),
        ComparisonOp::Contains => contains(left, right),
        _ => false,
    }
}

/// Left value is a member of the right list
fn is_in(left: &Resolved, right: &Resolved) -> bool {
    let Some(value) = left.to_value() else {
        return false;
    };
    let Some(list) = right.as_element_list() else {
        return false;
    };
    list.iter().any(|item| value_eq(item, &value))
}

/// Every element of the left list appears in the right list
fn subset_of(left: &Resolved, right: &Resolved) -> bool {
    let (Some(subset), Some(superset)) = (left.as_element_list(), right.as_element_list()) else {
        return false;
    };
    subset
        .iter()
        .all(|item| superset.iter().any(|other| value_eq(item, other)))
}

/// The two lists share at least one element
fn any_of(left: &Resolved, right: &Resolved) -> bool {
    let (Some(a), Some(b)) = (left.as_element_list(), right.as_element_list()) else {
        return false;
    };
    a.iter().any(|item| b.iter().any(|other| value_eq(item, other)))
}

/// String or collection length equals the expected integer
fn size_matches(left: &Resolved, right: &Resolved) -> bool {
    let size = match left {
        Resolved::One(Value::String(s)) => s.chars().count(),
        Resolved::One(Value::Array(items)) => items.len(),
        Resolved::Many(values) => values.len(),
        _ => return false,
    };
    match right.to_value() {
        Some(Value::Number(n)) => n.as_u64().is_some_and(|expected| expected as usize == size),
        _ => false,
    }
}

/// Emptiness of a string or collection equals the expected boolean
fn empty_matches(left: &Resolved, right: &Resolved) -> bool {
    let is_empty = match left {
        Resolved::One(Value::String(s)) => s.is_empty(),
        Resolved::One(Value::Array(items)) => items.is_empty(),
        Resolved::One(Value::Object(members)) => members.is_empty(),
        Resolved::Many(values) => values.is_empty(),
        _ => return false,
    };
    matches!(right.to_value(), Some(Value::Bool(expected)) if expected == is_empty)
}

/// Existence of the left operand equals the expected boolean
fn exists_matches(left: &Resolved, right: &Resolved) -> bool {
    matches!(right.to_value(), Some(Value::Bool(expected)) if expected == left.exists())
}

/// Type name of the left operand equals the expected string
fn type_matches(left: &Resolved, right: &Resolved) -> bool {
    let Some(value) = left.to_value() else {
        return false;
    };
    let name = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    matches!(right.to_value(), Some(Value::String(expected)) if expected == name)
}

/// Substring containment for strings, element containment for lists
fn contains(left: &Resolved, right: &Resolved) -> bool {
    match left {
        Resolved::One(Value::String(haystack)) => {
            matches!(right.to_value(), Some(Value::String(needle)) if haystack.contains(&needle))
        }
        _ => match (left.as_element_list(), right.to_value()) {
            (Some(items), Some(needle)) => items.iter().any(|item| value_eq(item, &needle)),
            _ => false,
        },
    }
}
