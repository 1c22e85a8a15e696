//! Text and length functions

use serde_json::Value;

use super::types::{PathFunction, ResolvedArg};
use crate::error::{function_invocation_error, PathResult};

/// Length of the current node (array elements, object members, or
/// string characters)
pub(super) struct LengthFunction;

impl PathFunction for LengthFunction {
    fn name(&self) -> &'static str {
        "length"
    }

    fn invoke(&self, current: &Value, _args: &[ResolvedArg]) -> PathResult<Value> {
        let length = match current {
            Value::Array(items) => items.len(),
            Value::Object(members) => members.len(),
            Value::String(s) => s.chars().count(),
            _ => {
                return Err(function_invocation_error(
                    self.name(),
                    "length operates on arrays, objects, and strings",
                ));
            }
        };
        Ok(Value::from(length))
    }
}

/// Concatenation of string arguments
pub(super) struct ConcatFunction;

impl PathFunction for ConcatFunction {
    fn name(&self) -> &'static str {
        "concat"
    }

    fn invoke(&self, _current: &Value, args: &[ResolvedArg]) -> PathResult<Value> {
        let mut out = String::new();
        for arg in args {
            for value in arg.values() {
                match value {
                    Value::String(s) => out.push_str(s),
                    other => {
                        return Err(function_invocation_error(
                            self.name(),
                            format!("expects string arguments, found {other}"),
                        ));
                    }
                }
            }
        }
        Ok(Value::String(out))
    }
}
