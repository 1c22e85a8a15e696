//! Total comparison operations
//!
//! Equality and ordering over resolved operands. Operands of mismatched
//! kinds are unequal (so `!=` is true) and unordered (so `<`-family
//! operators are false). Numeric comparison unifies integers and
//! decimals; string comparison is exact value comparison.

use serde_json::Value;

use super::resolve::Resolved;

/// Equality over resolved operands
///
/// `Missing` equals only another `Missing`.
pub(super) fn eq(left: &Resolved, right: &Resolved) -> bool {
    match (left, right) {
        (Resolved::Missing, Resolved::Missing) => true,
        (Resolved::Missing, _) | (_, Resolved::Missing) => false,
        _ => match (left.to_value(), right.to_value()) {
            (Some(a), Some(b)) => value_eq(&a, &b),
            _ => false,
        },
    }
}

/// Ordering over resolved operands; false whenever unordered
pub(super) fn ordering(op: crate::ast::ComparisonOp, left: &Resolved, right: &Resolved) -> bool {
    use crate::ast::ComparisonOp;
    use std::cmp::Ordering;

    let (Some(a), Some(b)) = (left.to_value(), right.to_value()) else {
        return false;
    };

    let ord = match (&a, &b) {
        (Value::Number(x), Value::Number(y)) => {
            let (Some(x), Some(y)) = (x.as_f64(), y.as_f64()) else {
                return false;
            };
            x.partial_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => Some(x.as_str().cmp(y.as_str())),
        _ => None,
    };

    let Some(ord) = ord else {
        return false;
    };

    match op {
        ComparisonOp::Lt => ord == Ordering::Less,
        ComparisonOp::Lte => ord != Ordering::Greater,
        ComparisonOp::Gt => ord == Ordering::Greater,
        ComparisonOp::Gte => ord != Ordering::Less,
        _ => false,
    }
}

/// Value equality with numeric unification
///
/// Numbers compare numerically regardless of integer/decimal
/// representation; all other kinds must match exactly. Mismatched kinds
/// are unequal.
pub(crate) fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(xi), Some(yi)) = (x.as_i64(), y.as_i64()) {
                xi == yi
            } else {
                match (x.as_f64(), y.as_f64()) {
                    (Some(xf), Some(yf)) => xf == yf,
                    _ => false,
                }
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| value_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| value_eq(x, y)))
        }
        _ => a == b,
    }
}
