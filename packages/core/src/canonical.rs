//! Canonical node locations
//!
//! A `NodeLocation` identifies one concrete node in a document as the
//! sequence of steps taken from the root. Its canonical rendering is
//! always bracket-and-quote form, e.g. `$['store']['book'][0]`.

use std::fmt;

use serde_json::Value;

/// One step from a parent node to a child
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Object member access
    Key(String),
    /// Array element access
    Index(usize),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => write!(f, "['{}']", key.replace('\'', "\\'")),
            PathStep::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Location of one node, as steps from the document root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeLocation {
    steps: Vec<PathStep>,
}

impl NodeLocation {
    /// Location of the document root ($)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self { steps: Vec::new() }
    }

    /// Extend with an object member step
    #[must_use]
    pub fn child_key(&self, key: &str) -> Self {
        let mut steps = self.steps.clone();
        steps.push(PathStep::Key(key.to_string()));
        Self { steps }
    }

    /// Extend with an array index step
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(PathStep::Index(index));
        Self { steps }
    }

    /// Steps from the root, in order
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of steps below the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Split into parent location and final step; `None` for the root
    #[must_use]
    pub fn split_last(&self) -> Option<(NodeLocation, &PathStep)> {
        let (last, parent) = self.steps.split_last()?;
        Some((
            NodeLocation {
                steps: parent.to_vec(),
            },
            last,
        ))
    }

    /// Canonical bracket-and-quote rendering
    #[must_use]
    pub fn canonical(&self) -> String {
        let mut out = String::from("$");
        for step in &self.steps {
            out.push_str(&step.to_string());
        }
        out
    }

    /// Resolve this location against a document root
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut node = root;
        for step in &self.steps {
            node = match step {
                PathStep::Key(key) => node.as_object()?.get(key)?,
                PathStep::Index(index) => node.as_array()?.get(*index)?,
            };
        }
        Some(node)
    }

    /// Resolve this location mutably against a document root
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        let mut node = root;
        for step in &self.steps {
            node = match step {
                PathStep::Key(key) => node.as_object_mut()?.get_mut(key)?,
                PathStep::Index(index) => node.as_array_mut()?.get_mut(*index)?,
            };
        }
        Some(node)
    }
}

impl fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// Order locations by document position, arrays by ascending index
///
/// Used by the mutation pass to apply array removals in reverse order so
/// earlier removals cannot shift later targets.
pub fn compare_document_order(a: &NodeLocation, b: &NodeLocation) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    for (sa, sb) in a.steps.iter().zip(b.steps.iter()) {
        let ord = match (sa, sb) {
            (PathStep::Index(ia), PathStep::Index(ib)) => ia.cmp(ib),
            (PathStep::Key(ka), PathStep::Key(kb)) => ka.cmp(kb),
            (PathStep::Key(_), PathStep::Index(_)) => Ordering::Less,
            (PathStep::Index(_), PathStep::Key(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.steps.len().cmp(&b.steps.len())
}
