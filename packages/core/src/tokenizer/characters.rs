//! Character and identifier tokenization
//!
//! Handles single-character structural tokens, identifiers, keywords,
//! and the dot / double-dot distinction.

use super::core::PathLexer;
use crate::error::{PathResult, syntax_error};
use crate::tokens::Token;

/// Scan structural characters, identifiers, and keywords
pub(crate) fn scan_character_token(
    lexer: &mut PathLexer,
    chars: &[char],
    i: usize,
) -> PathResult<usize> {
    match chars[i] {
        '$' => {
            lexer.tokens.push_back(Token::Root);
            Ok(i)
        }
        '.' => {
            if i + 1 < chars.len() && chars[i + 1] == '.' {
                if i + 2 < chars.len() && chars[i + 2] == '.' {
                    return Err(syntax_error(
                        &lexer.input,
                        "triple dot '...' is invalid, use '..' for recursive descent",
                        Some(i),
                    ));
                }
                lexer.tokens.push_back(Token::DoubleDot);
                Ok(i + 1) // Skip the second dot
            } else {
                lexer.tokens.push_back(Token::Dot);
                Ok(i)
            }
        }
        '[' => {
            lexer.tokens.push_back(Token::LeftBracket);
            Ok(i)
        }
        ']' => {
            lexer.tokens.push_back(Token::RightBracket);
            Ok(i)
        }
        '(' => {
            lexer.tokens.push_back(Token::LeftParen);
            Ok(i)
        }
        ')' => {
            lexer.tokens.push_back(Token::RightParen);
            Ok(i)
        }
        ',' => {
            lexer.tokens.push_back(Token::Comma);
            Ok(i)
        }
        ':' => {
            lexer.tokens.push_back(Token::Colon);
            Ok(i)
        }
        '?' => {
            lexer.tokens.push_back(Token::Question);
            Ok(i)
        }
        '@' => {
            lexer.tokens.push_back(Token::At);
            Ok(i)
        }
        '*' => {
            lexer.tokens.push_back(Token::Star);
            Ok(i)
        }
        c if c.is_alphabetic() || c == '_' => scan_identifier(lexer, chars, i),
        _ => Err(syntax_error(
            &lexer.input,
            format!("unexpected character '{}'", chars[i]),
            Some(i),
        )),
    }
}

/// Scan an identifier or keyword token
///
/// Interior dashes are part of the name (`display-price`), so a dash is
/// consumed only when another name character follows it.
fn scan_identifier(lexer: &mut PathLexer, chars: &[char], mut i: usize) -> PathResult<usize> {
    let start = i;
    while i < chars.len() {
        let c = chars[i];
        if c.is_alphanumeric() || c == '_' {
            i += 1;
        } else if c == '-'
            && i + 1 < chars.len()
            && (chars[i + 1].is_alphanumeric() || chars[i + 1] == '_')
        {
            i += 1;
        } else {
            break;
        }
    }
    let identifier: String = chars[start..i].iter().collect();

    let token = match identifier.as_str() {
        "true" => Token::True,
        "false" => Token::False,
        "null" => Token::Null,
        _ => Token::Identifier(identifier),
    };

    lexer.tokens.push_back(token);
    Ok(i.saturating_sub(1)) // Adjust for loop increment
}
