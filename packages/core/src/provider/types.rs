//! Provider capability traits

use serde_json::Value;

use crate::error::PathResult;

/// Structural access and mutation capability over document nodes
///
/// The engine is generic over anything implementing this capability and
/// performs no structural edit except through it.
pub trait DocumentProvider: Send + Sync {
    /// Whether the node is an array
    fn is_array(&self, node: &Value) -> bool;

    /// Whether the node is a map/object
    fn is_map(&self, node: &Value) -> bool;

    /// Element, member, or character count; `None` for scalars without length
    fn length(&self, node: &Value) -> Option<usize>;

    /// Member lookup on a map node
    fn get_property<'a>(&self, node: &'a Value, key: &str) -> Option<&'a Value>;

    /// Element lookup on an array node
    fn get_index<'a>(&self, node: &'a Value, index: usize) -> Option<&'a Value>;

    /// Member names of a map node, in provider order
    fn keys(&self, node: &Value) -> Vec<String>;

    /// Create an empty array node
    fn create_array(&self) -> Value;

    /// Create an empty map node
    fn create_map(&self) -> Value;

    /// Insert or replace a member on a map node
    fn set_property(&self, node: &mut Value, key: &str, value: Value) -> PathResult<()>;

    /// Replace an element of an array node
    fn set_index(&self, node: &mut Value, index: usize, value: Value) -> PathResult<()>;

    /// Append an element to an array node
    fn append(&self, node: &mut Value, value: Value) -> PathResult<()>;

    /// Remove a member from a map node
    fn remove_property(&self, node: &mut Value, key: &str) -> PathResult<()>;

    /// Remove an element from an array node
    fn remove_index(&self, node: &mut Value, index: usize) -> PathResult<()>;

    /// Unwrap a scalar node to an owned value; containers pass through
    fn unwrap(&self, node: &Value) -> Value;
}

/// Conversion of resolved nodes into caller-facing values
///
/// Read-mode convenience only; the engine accepts whatever this returns
/// without interpreting it.
pub trait MappingProvider: Send + Sync {
    /// Materialize a resolved node as an owned value tree
    fn materialize(&self, node: &Value) -> Value;
}
