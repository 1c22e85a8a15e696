//! Regex literal tokenization
//!
//! Scans `/pattern/` literals with an optional trailing `i` flag. The
//! pattern source is kept verbatim (backslash escapes included) and
//! compiled later through the process-wide regex cache.

use super::core::PathLexer;
use crate::error::{PathResult, syntax_error};
use crate::tokens::Token;

/// Scan a regex literal delimited by '/'
pub(crate) fn scan_pattern_literal(
    lexer: &mut PathLexer,
    chars: &[char],
    mut i: usize,
) -> PathResult<usize> {
    let start = i;
    i += 1; // Skip opening delimiter
    let mut source = String::new();

    loop {
        if i >= chars.len() {
            return Err(syntax_error(
                &lexer.input,
                "unterminated regex literal, expected closing '/'",
                Some(start),
            ));
        }
        match chars[i] {
            '/' => break,
            '\\' if i + 1 < chars.len() => {
                // Keep the escape verbatim so the regex engine sees it
                source.push('\\');
                source.push(chars[i + 1]);
                i += 2;
            }
            c => {
                source.push(c);
                i += 1;
            }
        }
    }

    // Optional flags after the closing delimiter
    let mut case_insensitive = false;
    while i + 1 < chars.len() && chars[i + 1].is_ascii_alphabetic() {
        match chars[i + 1] {
            'i' => case_insensitive = true,
            flag => {
                return Err(syntax_error(
                    &lexer.input,
                    format!("unsupported regex flag '{flag}'"),
                    Some(i + 1),
                ));
            }
        }
        i += 1;
    }

    lexer.tokens.push_back(Token::Pattern {
        source,
        case_insensitive,
    });
    Ok(i)
}
