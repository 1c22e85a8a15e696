//! Recursive descent expansion
//!
//! Expands each branch into itself plus every nested node, in pre-order
//! (node before its descendants) depth-first document order. Uses an
//! explicit stack so traversal depth never consumes call-stack frames
//! proportional to document depth.

use super::context::{Branch, EvaluationContext};

/// Expand branches with all of their descendants
pub(super) fn expand<'a>(
    branches: Vec<Branch<'a>>,
    ctx: &EvaluationContext<'a>,
) -> Vec<Branch<'a>> {
    let provider = ctx.provider();
    let mut out = Vec::new();

    for branch in branches {
        let mut stack = vec![branch];

        while let Some(current) = stack.pop() {
            let mut children = Vec::new();

            if provider.is_array(current.node) {
                let length = provider.length(current.node).unwrap_or(0);
                for index in 0..length {
                    if let Some(child) = provider.get_index(current.node, index) {
                        children.push(Branch {
                            node: child,
                            location: current.location.child_index(index),
                        });
                    }
                }
            } else if provider.is_map(current.node) {
                for key in provider.keys(current.node) {
                    if let Some(child) = provider.get_property(current.node, &key) {
                        children.push(Branch {
                            node: child,
                            location: current.location.child_key(&key),
                        });
                    }
                }
            }

            out.push(current);

            // Reversed push keeps pop order equal to document order
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
    }
    out
}
