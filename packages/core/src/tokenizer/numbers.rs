//! Number literal tokenization
//!
//! Scans integer and floating-point literals, including negative values
//! used by array indices and slice bounds.

use super::core::PathLexer;
use crate::error::{PathResult, syntax_error};
use crate::tokens::Token;

/// Scan a number literal (integer or float)
pub(crate) fn scan_number_literal(
    lexer: &mut PathLexer,
    chars: &[char],
    mut i: usize,
) -> PathResult<usize> {
    let start = i;

    if chars[i] == '-' {
        i += 1;
        if i >= chars.len() || !chars[i].is_ascii_digit() {
            return Err(syntax_error(
                &lexer.input,
                "expected digit after '-'",
                Some(start),
            ));
        }
    }

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    // A decimal point only continues the number when a digit follows;
    // otherwise it is a path dot (e.g. the '.' in '$[0].name').
    let mut is_float = false;
    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        is_float = true;
        i += 1; // Skip decimal point
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    let number_str: String = chars[start..i].iter().collect();
    if is_float {
        match number_str.parse::<f64>() {
            Ok(float_val) => lexer.tokens.push_back(Token::Number(float_val)),
            Err(_) => {
                return Err(syntax_error(
                    &lexer.input,
                    "invalid floating point number format",
                    Some(start),
                ));
            }
        }
    } else {
        match number_str.parse::<i64>() {
            Ok(int_val) => lexer.tokens.push_back(Token::Integer(int_val)),
            Err(_) => {
                return Err(syntax_error(
                    &lexer.input,
                    "invalid integer format",
                    Some(start),
                ));
            }
        }
    }
    Ok(i.saturating_sub(1)) // Adjust for loop increment
}
