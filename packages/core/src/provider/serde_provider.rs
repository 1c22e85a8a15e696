//! Default providers backed by `serde_json::Value`

use serde_json::Value;

use super::types::{DocumentProvider, MappingProvider};
use crate::error::{PathResult, provider_error};

/// Document provider over `serde_json::Value` trees
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeDocumentProvider;

impl DocumentProvider for SerdeDocumentProvider {
    #[inline]
    fn is_array(&self, node: &Value) -> bool {
        node.is_array()
    }

    #[inline]
    fn is_map(&self, node: &Value) -> bool {
        node.is_object()
    }

    fn length(&self, node: &Value) -> Option<usize> {
        match node {
            Value::Array(items) => Some(items.len()),
            Value::Object(members) => Some(members.len()),
            Value::String(s) => Some(s.chars().count()),
            _ => None,
        }
    }

    #[inline]
    fn get_property<'a>(&self, node: &'a Value, key: &str) -> Option<&'a Value> {
        node.as_object().and_then(|map| map.get(key))
    }

    #[inline]
    fn get_index<'a>(&self, node: &'a Value, index: usize) -> Option<&'a Value> {
        node.as_array().and_then(|items| items.get(index))
    }

    fn keys(&self, node: &Value) -> Vec<String> {
        match node.as_object() {
            Some(map) => map.keys().cloned().collect(),
            None => Vec::new(),
        }
    }

    #[inline]
    fn create_array(&self) -> Value {
        Value::Array(Vec::new())
    }

    #[inline]
    fn create_map(&self) -> Value {
        Value::Object(serde_json::Map::new())
    }

    fn set_property(&self, node: &mut Value, key: &str, value: Value) -> PathResult<()> {
        match node.as_object_mut() {
            Some(map) => {
                map.insert(key.to_string(), value);
                Ok(())
            }
            None => Err(provider_error(format!(
                "cannot set property '{key}' on a non-object node"
            ))),
        }
    }

    fn set_index(&self, node: &mut Value, index: usize, value: Value) -> PathResult<()> {
        match node.as_array_mut() {
            Some(items) if index < items.len() => {
                items[index] = value;
                Ok(())
            }
            Some(items) => Err(provider_error(format!(
                "index {index} out of bounds for array of length {}",
                items.len()
            ))),
            None => Err(provider_error(format!(
                "cannot set index {index} on a non-array node"
            ))),
        }
    }

    fn append(&self, node: &mut Value, value: Value) -> PathResult<()> {
        match node.as_array_mut() {
            Some(items) => {
                items.push(value);
                Ok(())
            }
            None => Err(provider_error("cannot append to a non-array node")),
        }
    }

    fn remove_property(&self, node: &mut Value, key: &str) -> PathResult<()> {
        match node.as_object_mut() {
            Some(map) => {
                map.remove(key);
                Ok(())
            }
            None => Err(provider_error(format!(
                "cannot remove property '{key}' from a non-object node"
            ))),
        }
    }

    fn remove_index(&self, node: &mut Value, index: usize) -> PathResult<()> {
        match node.as_array_mut() {
            Some(items) if index < items.len() => {
                items.remove(index);
                Ok(())
            }
            Some(items) => Err(provider_error(format!(
                "index {index} out of bounds for array of length {}",
                items.len()
            ))),
            None => Err(provider_error(format!(
                "cannot remove index {index} from a non-array node"
            ))),
        }
    }

    #[inline]
    fn unwrap(&self, node: &Value) -> Value {
        node.clone()
    }
}

/// Mapping provider that clones resolved nodes verbatim
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeMappingProvider;

impl MappingProvider for SerdeMappingProvider {
    #[inline]
    fn materialize(&self, node: &Value) -> Value {
        node.clone()
    }
}
