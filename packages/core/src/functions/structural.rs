//! Structural functions over arrays and objects

use serde_json::Value;

use super::types::{PathFunction, ResolvedArg};
use crate::error::{function_invocation_error, PathResult};

/// Copy of the current array with the argument values appended
pub(super) struct AppendFunction;

impl PathFunction for AppendFunction {
    fn name(&self) -> &'static str {
        "append"
    }

    fn invoke(&self, current: &Value, args: &[ResolvedArg]) -> PathResult<Value> {
        let Value::Array(items) = current else {
            return Err(function_invocation_error(
                self.name(),
                "append operates on arrays",
            ));
        };
        let mut out = items.clone();
        for arg in args {
            out.extend(arg.values().into_iter().cloned());
        }
        Ok(Value::Array(out))
    }
}

/// Member names of the current object
pub(super) struct KeysFunction;

impl PathFunction for KeysFunction {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn invoke(&self, current: &Value, _args: &[ResolvedArg]) -> PathResult<Value> {
        let Value::Object(members) = current else {
            return Err(function_invocation_error(
                self.name(),
                "keys operates on objects",
            ));
        };
        Ok(Value::Array(
            members.keys().map(|key| Value::String(key.clone())).collect(),
        ))
    }
}

/// First element of the current array
pub(super) struct FirstFunction;

impl PathFunction for FirstFunction {
    fn name(&self) -> &'static str {
        "first"
    }

    fn invoke(&self, current: &Value, _args: &[ResolvedArg]) -> PathResult<Value> {
        match current {
            Value::Array(items) => items.first().cloned().ok_or_else(|| {
                function_invocation_error(self.name(), "array is empty")
            }),
            _ => Err(function_invocation_error(
                self.name(),
                "first operates on arrays",
            )),
        }
    }
}

/// Last element of the current array
pub(super) struct LastFunction;

impl PathFunction for LastFunction {
    fn name(&self) -> &'static str {
        "last"
    }

    fn invoke(&self, current: &Value, _args: &[ResolvedArg]) -> PathResult<Value> {
        match current {
            Value::Array(items) => items.last().cloned().ok_or_else(|| {
                function_invocation_error(self.name(), "array is empty")
            }),
            _ => Err(function_invocation_error(
                self.name(),
                "last operates on arrays",
            )),
        }
    }
}
