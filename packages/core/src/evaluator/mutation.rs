//! In-place document mutation
//!
//! Every mutation runs in two phases: the read traversal materializes
//! the full set of edit targets first, then edits apply through the
//! document provider. Array removals apply in reverse document order so
//! earlier removals cannot shift targets that are still pending.

use serde_json::Value;

use super::engine::PathEvaluator;
use crate::canonical::{compare_document_order, NodeLocation, PathStep};
use crate::compiled::CompiledPath;
use crate::config::{ConfigOption, Configuration};
use crate::error::{invalid_path_error, not_found_error, provider_error, PathResult};

/// Replace the value at every location the path matches
///
/// Returns the number of locations updated.
pub fn set(
    path: &CompiledPath,
    root: &mut Value,
    new_value: &Value,
    config: &Configuration,
) -> PathResult<usize> {
    let targets = collect_targets(path, root, config)?;
    if targets.is_empty() {
        return empty_result(path, config);
    }

    let provider = config.document_provider();
    for location in &targets {
        let Some((parent_location, step)) = location.split_last() else {
            return Err(provider_error("cannot replace the document root"));
        };
        let parent = resolve_parent(root, &parent_location)?;
        match step {
            PathStep::Key(key) => provider.set_property(parent, key, new_value.clone())?,
            PathStep::Index(index) => provider.set_index(parent, *index, new_value.clone())?,
        }
    }
    Ok(targets.len())
}

/// Remove the node at every location the path matches
pub fn delete(path: &CompiledPath, root: &mut Value, config: &Configuration) -> PathResult<usize> {
    let mut targets = collect_targets(path, root, config)?;
    if targets.is_empty() {
        return empty_result(path, config);
    }

    // Reverse document order: deepest and highest-indexed targets first
    targets.sort_by(compare_document_order);
    targets.reverse();

    let provider = config.document_provider();
    let count = targets.len();
    for location in &targets {
        let Some((parent_location, step)) = location.split_last() else {
            return Err(provider_error("cannot delete the document root"));
        };
        let parent = resolve_parent(root, &parent_location)?;
        match step {
            PathStep::Key(key) => provider.remove_property(parent, key)?,
            PathStep::Index(index) => provider.remove_index(parent, *index)?,
        }
    }
    Ok(count)
}

/// Append a value to every array the path matches
pub fn add(
    path: &CompiledPath,
    root: &mut Value,
    value: &Value,
    config: &Configuration,
) -> PathResult<usize> {
    let targets = collect_targets(path, root, config)?;
    if targets.is_empty() {
        return empty_result(path, config);
    }

    let provider = config.document_provider();
    for location in &targets {
        let target = resolve_parent(root, location)?;
        provider.append(target, value.clone())?;
    }
    Ok(targets.len())
}

/// Insert or replace a member on every map the path matches
pub fn put(
    path: &CompiledPath,
    root: &mut Value,
    key: &str,
    value: &Value,
    config: &Configuration,
) -> PathResult<usize> {
    let targets = collect_targets(path, root, config)?;
    if targets.is_empty() {
        return empty_result(path, config);
    }

    let provider = config.document_provider();
    for location in &targets {
        let target = resolve_parent(root, location)?;
        provider.set_property(target, key, value.clone())?;
    }
    Ok(targets.len())
}

/// Transform the value at every location the path matches
///
/// The callback receives each matched value and returns its replacement.
pub fn map(
    path: &CompiledPath,
    root: &mut Value,
    config: &Configuration,
    transform: &mut dyn FnMut(Value) -> Value,
) -> PathResult<usize> {
    let targets = collect_targets(path, root, config)?;
    if targets.is_empty() {
        return empty_result(path, config);
    }

    let provider = config.document_provider();
    for location in &targets {
        let Some((parent_location, step)) = location.split_last() else {
            return Err(provider_error("cannot replace the document root"));
        };
        let current = location.resolve(root).cloned().ok_or_else(|| {
            provider_error(format!(
                "mutation target '{}' disappeared during update",
                location.canonical()
            ))
        })?;
        let replacement = transform(current);
        let parent = resolve_parent(root, &parent_location)?;
        match step {
            PathStep::Key(key) => provider.set_property(parent, key, replacement)?,
            PathStep::Index(index) => provider.set_index(parent, *index, replacement)?,
        }
    }
    Ok(targets.len())
}

/// Rename a member on every map the path matches
pub fn rename_key(
    path: &CompiledPath,
    root: &mut Value,
    old_key: &str,
    new_key: &str,
    config: &Configuration,
) -> PathResult<usize> {
    let targets = collect_targets(path, root, config)?;
    if targets.is_empty() {
        return empty_result(path, config);
    }

    let provider = config.document_provider();
    for location in &targets {
        let target = resolve_parent(root, location)?;
        let Some(value) = provider.get_property(target, old_key).cloned() else {
            if config.contains(ConfigOption::SuppressExceptions) {
                continue;
            }
            return Err(not_found_error(format!(
                "{}['{old_key}']",
                location.canonical()
            )));
        };
        provider.remove_property(target, old_key)?;
        provider.set_property(target, new_key, value)?;
    }
    Ok(targets.len())
}

/// Run the read traversal and materialize the edit targets
fn collect_targets(
    path: &CompiledPath,
    root: &Value,
    config: &Configuration,
) -> PathResult<Vec<NodeLocation>> {
    if path.is_function_path() {
        return Err(invalid_path_error(
            path.original(),
            "cannot mutate the result of a function call",
            None,
        ));
    }
    let outcome = PathEvaluator::evaluate_for_update(path, root, config)?;
    Ok(outcome.locations)
}

/// No matched targets: an error for definite paths unless suppressed
fn empty_result(path: &CompiledPath, config: &Configuration) -> PathResult<usize> {
    if path.is_definite() && !config.contains(ConfigOption::SuppressExceptions) {
        Err(not_found_error(path.original()))
    } else {
        Ok(0)
    }
}

/// Resolve a location mutably, failing on structural drift
fn resolve_parent<'a>(root: &'a mut Value, location: &NodeLocation) -> PathResult<&'a mut Value> {
    location.resolve_mut(root).ok_or_else(|| {
        provider_error(format!(
            "mutation target '{}' disappeared during update",
            location.canonical()
        ))
    })
}
