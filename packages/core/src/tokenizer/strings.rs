//! String literal tokenization with escape sequence handling
//!
//! Handles both quote styles, backslash-escaped delimiters, and
//! `\uXXXX` escapes including UTF-16 surrogate pairs. Unescaping
//! happens exactly once, here.

use super::core::PathLexer;
use crate::error::{PathResult, syntax_error};
use crate::tokens::Token;

/// Scan a quoted string literal
pub(crate) fn scan_string_literal(
    lexer: &mut PathLexer,
    chars: &[char],
    mut i: usize,
) -> PathResult<usize> {
    let quote = chars[i];
    i += 1; // Skip opening quote
    let start = i;
    let mut string_value = String::new();

    while i < chars.len() {
        if chars[i] == quote {
            break;
        } else if chars[i] == '\\' && i + 1 < chars.len() {
            i += 1; // Skip backslash
            match chars[i] {
                '"' => string_value.push('"'),
                '\'' => string_value.push('\''),
                '\\' => string_value.push('\\'),
                '/' => string_value.push('/'),
                'b' => string_value.push('\u{0008}'),
                'f' => string_value.push('\u{000C}'),
                'n' => string_value.push('\n'),
                'r' => string_value.push('\r'),
                't' => string_value.push('\t'),
                'u' => {
                    i = scan_unicode_escape(lexer, chars, i, &mut string_value)?;
                }
                _ => {
                    return Err(syntax_error(
                        &lexer.input,
                        "invalid escape sequence",
                        Some(i),
                    ));
                }
            }
        } else {
            string_value.push(chars[i]);
        }
        i += 1;
    }

    if i >= chars.len() {
        return Err(syntax_error(
            &lexer.input,
            "unterminated string literal",
            Some(start),
        ));
    }

    lexer.tokens.push_back(Token::String(string_value));
    Ok(i)
}

/// Scan a `\uXXXX` escape with surrogate pair support
fn scan_unicode_escape(
    lexer: &PathLexer,
    chars: &[char],
    mut i: usize,
    string_value: &mut String,
) -> PathResult<usize> {
    if i + 4 >= chars.len() {
        return Err(syntax_error(
            &lexer.input,
            "incomplete unicode escape sequence",
            Some(i),
        ));
    }
    let hex_digits: String = chars[i + 1..i + 5].iter().collect();
    let Ok(code_point) = u32::from_str_radix(&hex_digits, 16) else {
        return Err(syntax_error(
            &lexer.input,
            "invalid unicode escape sequence",
            Some(i),
        ));
    };

    if (0xD800..=0xDBFF).contains(&code_point) {
        // High surrogate - a low surrogate escape must follow
        if i + 10 < chars.len() && chars[i + 5] == '\\' && chars[i + 6] == 'u' {
            let low_hex: String = chars[i + 7..i + 11].iter().collect();
            if let Ok(low_surrogate) = u32::from_str_radix(&low_hex, 16)
                && (0xDC00..=0xDFFF).contains(&low_surrogate)
            {
                let high = code_point - 0xD800;
                let low = low_surrogate - 0xDC00;
                let unicode_scalar = 0x10000 + (high << 10) + low;
                if let Some(unicode_char) = char::from_u32(unicode_scalar) {
                    string_value.push(unicode_char);
                    return Ok(i + 10); // Skip both \uXXXX sequences
                }
            }
            Err(syntax_error(
                &lexer.input,
                "high surrogate not followed by valid low surrogate",
                Some(i),
            ))
        } else {
            Err(syntax_error(
                &lexer.input,
                "high surrogate not followed by low surrogate escape sequence",
                Some(i),
            ))
        }
    } else if (0xDC00..=0xDFFF).contains(&code_point) {
        Err(syntax_error(
            &lexer.input,
            "low surrogate without preceding high surrogate",
            Some(i),
        ))
    } else if let Some(unicode_char) = char::from_u32(code_point) {
        string_value.push(unicode_char);
        i += 4; // Skip the 4 hex digits
        Ok(i)
    } else {
        Err(syntax_error(
            &lexer.input,
            "invalid unicode code point",
            Some(i),
        ))
    }
}
