//! Structural segment application
//!
//! Property access, wildcard fan-out, index resolution, and slice
//! clamping. A branch whose node cannot satisfy the segment produces no
//! result unless the configuration requires properties to exist.

use serde_json::Value;

use super::context::{Branch, EvaluationContext};
use crate::error::{not_found_error, PathResult};

static NULL: Value = Value::Null;

/// Descend into one or more named properties
pub(super) fn apply_property<'a>(
    branches: Vec<Branch<'a>>,
    names: &[String],
    is_leaf: bool,
    ctx: &EvaluationContext<'a>,
) -> PathResult<Vec<Branch<'a>>> {
    let provider = ctx.provider();
    let mut out = Vec::new();

    for branch in &branches {
        for name in names {
            if let Some(child) = provider.get_property(branch.node, name) {
                out.push(Branch {
                    node: child,
                    location: branch.location.child_key(name),
                });
            } else if ctx.require_properties() {
                return Err(not_found_error(branch.location.child_key(name).canonical()));
            } else if provider.is_map(branch.node) && is_leaf && ctx.leaf_to_null() {
                out.push(Branch {
                    node: &NULL,
                    location: branch.location.child_key(name),
                });
            }
            // Otherwise: no result for this branch
        }
    }
    Ok(out)
}

/// Fan out to every child of each branch
pub(super) fn apply_wildcard<'a>(
    branches: Vec<Branch<'a>>,
    ctx: &EvaluationContext<'a>,
) -> Vec<Branch<'a>> {
    let provider = ctx.provider();
    let mut out = Vec::new();

    for branch in &branches {
        if provider.is_array(branch.node) {
            let length = provider.length(branch.node).unwrap_or(0);
            for index in 0..length {
                if let Some(child) = provider.get_index(branch.node, index) {
                    out.push(Branch {
                        node: child,
                        location: branch.location.child_index(index),
                    });
                }
            }
        } else if provider.is_map(branch.node) {
            for key in provider.keys(branch.node) {
                if let Some(child) = provider.get_property(branch.node, &key) {
                    out.push(Branch {
                        node: child,
                        location: branch.location.child_key(&key),
                    });
                }
            }
        }
    }
    out
}

/// Select explicit array indices, negative values counting from the end
pub(super) fn apply_index<'a>(
    branches: Vec<Branch<'a>>,
    indices: &[i64],
    ctx: &EvaluationContext<'a>,
) -> PathResult<Vec<Branch<'a>>> {
    let provider = ctx.provider();
    let mut out = Vec::new();

    for branch in &branches {
        if !provider.is_array(branch.node) {
            if ctx.require_properties() {
                return Err(not_found_error(branch.location.canonical()));
            }
            continue;
        }
        let length = provider.length(branch.node).unwrap_or(0) as i64;

        for &index in indices {
            let resolved = if index < 0 { length + index } else { index };
            if (0..length).contains(&resolved) {
                let resolved = resolved as usize;
                if let Some(child) = provider.get_index(branch.node, resolved) {
                    out.push(Branch {
                        node: child,
                        location: branch.location.child_index(resolved),
                    });
                }
            } else if ctx.require_properties() {
                return Err(not_found_error(format!(
                    "{}[{index}]",
                    branch.location.canonical()
                )));
            }
            // Out-of-range index: no result for this branch
        }
    }
    Ok(out)
}

/// Select a clamped slice of each array branch
pub(super) fn apply_slice<'a>(
    branches: Vec<Branch<'a>>,
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
    ctx: &EvaluationContext<'a>,
) -> Vec<Branch<'a>> {
    let provider = ctx.provider();
    let step = step.unwrap_or(1).max(1) as usize;
    let mut out = Vec::new();

    for branch in &branches {
        if !provider.is_array(branch.node) {
            continue;
        }
        let length = provider.length(branch.node).unwrap_or(0) as i64;

        // Bounds clamp to [0, length]; an empty range yields no branches
        let from = match start {
            Some(s) if s < 0 => (length + s).max(0),
            Some(s) => s.min(length),
            None => 0,
        };
        let to = match end {
            Some(e) if e < 0 => (length + e).max(0),
            Some(e) => e.min(length),
            None => length,
        };

        let mut index = from;
        while index < to {
            let resolved = index as usize;
            if let Some(child) = provider.get_index(branch.node, resolved) {
                out.push(Branch {
                    node: child,
                    location: branch.location.child_index(resolved),
                });
            }
            index += step as i64;
        }
    }
    out
}
