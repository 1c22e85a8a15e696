//! Regex matching for predicate operands
//!
//! The pattern may stand on either side of `=~`. Only string operands
//! can match; an indefinite operand matches when any of its string
//! elements does.

use serde_json::Value;

use super::regex_cache::{pattern_key, REGEX_CACHE};
use super::resolve::Resolved;

/// Match a compiled pattern against a resolved operand
pub(super) fn pattern_matches(source: &str, case_insensitive: bool, operand: &Resolved) -> bool {
    let key = pattern_key(source, case_insensitive);
    let regex = match REGEX_CACHE.get_or_compile(&key) {
        Ok(regex) => regex,
        Err(error) => {
            log::debug!("regex '/{source}/' failed to compile during evaluation: {error}");
            return false;
        }
    };

    match operand {
        Resolved::One(Value::String(s)) => regex.is_match(s),
        Resolved::Many(values) => values
            .iter()
            .any(|value| matches!(value, Value::String(s) if regex.is_match(s))),
        _ => false,
    }
}
