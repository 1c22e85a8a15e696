//! Evaluation context and outcome accumulation
//!
//! One context exists per evaluation call; contexts are never shared
//! across concurrent evaluations. The context carries the document
//! root, the active configuration, and the result accumulators.

use serde_json::Value;

use crate::canonical::NodeLocation;
use crate::config::{ConfigOption, Configuration};
use crate::provider::DocumentProvider;

/// One candidate produced during traversal fan-out
#[derive(Debug, Clone)]
pub(crate) struct Branch<'a> {
    /// Node this branch currently points at
    pub node: &'a Value,
    /// Steps taken from the root to reach the node
    pub location: NodeLocation,
}

/// Per-call mutable evaluation state
pub struct EvaluationContext<'a> {
    pub(crate) root: &'a Value,
    pub(crate) config: &'a Configuration,
    pub(crate) results: Vec<Value>,
    pub(crate) paths: Vec<String>,
    pub(crate) locations: Vec<NodeLocation>,
    /// Set inside predicate and function-argument resolution, where
    /// missing segments never fail
    pub(crate) lenient: bool,
    /// Distinguishes mutate traversals from reads
    pub(crate) for_update: bool,
}

impl<'a> EvaluationContext<'a> {
    pub(crate) fn new(root: &'a Value, config: &'a Configuration, for_update: bool) -> Self {
        Self {
            root,
            config,
            results: Vec::new(),
            paths: Vec::new(),
            locations: Vec::new(),
            lenient: false,
            for_update,
        }
    }

    pub(crate) fn new_lenient(root: &'a Value, config: &'a Configuration) -> Self {
        Self {
            lenient: true,
            ..Self::new(root, config, false)
        }
    }

    #[inline]
    pub(crate) fn provider(&self) -> &dyn DocumentProvider {
        self.config.document_provider()
    }

    /// Whether a missing property must fail the evaluation
    #[inline]
    pub(crate) fn require_properties(&self) -> bool {
        !self.lenient && self.config.contains(ConfigOption::RequireProperties)
    }

    /// Whether a missing optional leaf resolves to null
    #[inline]
    pub(crate) fn leaf_to_null(&self) -> bool {
        !self.for_update && self.config.contains(ConfigOption::DefaultPathLeafToNull)
    }

    /// Record one matched branch
    pub(crate) fn add_match(&mut self, node: &Value, location: &NodeLocation) {
        self.results.push(node.clone());
        self.paths.push(location.canonical());
        self.locations.push(location.clone());
    }

    /// Record a function result spliced in at the given location
    pub(crate) fn add_function_match(
        &mut self,
        value: Value,
        location: &NodeLocation,
        function: &str,
    ) {
        self.paths
            .push(format!("{}.{function}()", location.canonical()));
        self.locations.push(location.clone());
        self.results.push(value);
    }

    pub(crate) fn into_outcome(self) -> EvaluationOutcome {
        EvaluationOutcome {
            values: self.results,
            paths: self.paths,
            locations: self.locations,
        }
    }
}

/// Everything one traversal produced
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    /// Matched values in traversal order
    pub values: Vec<Value>,
    /// Canonical path of each match, parallel to `values`
    pub paths: Vec<String>,
    /// Concrete location of each match, parallel to `values`
    pub(crate) locations: Vec<NodeLocation>,
}

impl EvaluationOutcome {
    /// Number of matches
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing matched
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
