//! Numeric aggregate functions
//!
//! sum, min, max, avg, and stddev aggregate the numeric elements of the
//! current node (when it is an array) together with any numeric
//! arguments. Aggregating nothing is an invocation error.

use serde_json::Value;

use super::types::{PathFunction, ResolvedArg};
use crate::error::{function_invocation_error, PathResult};

/// Collect the numeric operands for an aggregate invocation
fn numeric_operands(function: &str, current: &Value, args: &[ResolvedArg]) -> PathResult<Vec<f64>> {
    let mut operands = Vec::new();

    if let Value::Array(items) = current {
        operands.extend(items.iter().filter_map(Value::as_f64));
    }
    for arg in args {
        for value in arg.values() {
            match value {
                Value::Number(n) => operands.extend(n.as_f64()),
                Value::Array(items) => operands.extend(items.iter().filter_map(Value::as_f64)),
                _ => {}
            }
        }
    }

    if operands.is_empty() {
        return Err(function_invocation_error(
            function,
            "aggregation function attempted to calculate value using empty array",
        ));
    }
    Ok(operands)
}

/// Sum of all numeric operands
pub(super) struct SumFunction;

impl PathFunction for SumFunction {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn invoke(&self, current: &Value, args: &[ResolvedArg]) -> PathResult<Value> {
        let operands = numeric_operands(self.name(), current, args)?;
        Ok(Value::from(operands.iter().sum::<f64>()))
    }
}

/// Smallest numeric operand
pub(super) struct MinFunction;

impl PathFunction for MinFunction {
    fn name(&self) -> &'static str {
        "min"
    }

    fn invoke(&self, current: &Value, args: &[ResolvedArg]) -> PathResult<Value> {
        let operands = numeric_operands(self.name(), current, args)?;
        Ok(Value::from(operands.iter().copied().fold(f64::INFINITY, f64::min)))
    }
}

/// Largest numeric operand
pub(super) struct MaxFunction;

impl PathFunction for MaxFunction {
    fn name(&self) -> &'static str {
        "max"
    }

    fn invoke(&self, current: &Value, args: &[ResolvedArg]) -> PathResult<Value> {
        let operands = numeric_operands(self.name(), current, args)?;
        Ok(Value::from(
            operands.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        ))
    }
}

/// Arithmetic mean of the numeric operands
pub(super) struct AvgFunction;

impl PathFunction for AvgFunction {
    fn name(&self) -> &'static str {
        "avg"
    }

    fn invoke(&self, current: &Value, args: &[ResolvedArg]) -> PathResult<Value> {
        let operands = numeric_operands(self.name(), current, args)?;
        let sum: f64 = operands.iter().sum();
        Ok(Value::from(sum / operands.len() as f64))
    }
}

/// Population standard deviation of the numeric operands
pub(super) struct StdDevFunction;

impl PathFunction for StdDevFunction {
    fn name(&self) -> &'static str {
        "stddev"
    }

    fn invoke(&self, current: &Value, args: &[ResolvedArg]) -> PathResult<Value> {
        let operands = numeric_operands(self.name(), current, args)?;
        let count = operands.len() as f64;
        let mean = operands.iter().sum::<f64>() / count;
        let variance = operands
            .iter()
            .map(|value| (value - mean) * (value - mean))
            .sum::<f64>()
            / count;
        Ok(Value::from(variance.sqrt()))
    }
}
