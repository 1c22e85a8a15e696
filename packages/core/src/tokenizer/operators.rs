//! Operator tokenization
//!
//! Handles multi-character comparison and logical operators (==, !=, <=,
//! >=, =~, &&, ||) and the unary negation token.

use super::core::PathLexer;
use crate::error::{PathResult, syntax_error};
use crate::tokens::Token;

/// Scan comparison and logical operator tokens
pub(crate) fn scan_operator(
    lexer: &mut PathLexer,
    chars: &[char],
    i: usize,
) -> PathResult<usize> {
    match chars[i] {
        '=' => {
            if i + 1 < chars.len() && chars[i + 1] == '=' {
                lexer.tokens.push_back(Token::Equal);
                Ok(i + 1)
            } else if i + 1 < chars.len() && chars[i + 1] == '~' {
                lexer.tokens.push_back(Token::RegexMatch);
                Ok(i + 1)
            } else {
                Err(syntax_error(
                    &lexer.input,
                    "single '=' not supported, use '==' for equality or '=~' for regex match",
                    Some(i),
                ))
            }
        }
        '!' => {
            if i + 1 < chars.len() && chars[i + 1] == '=' {
                lexer.tokens.push_back(Token::NotEqual);
                Ok(i + 1)
            } else {
                lexer.tokens.push_back(Token::Not);
                Ok(i)
            }
        }
        '<' => {
            if i + 1 < chars.len() && chars[i + 1] == '=' {
                lexer.tokens.push_back(Token::LessEq);
                Ok(i + 1)
            } else {
                lexer.tokens.push_back(Token::Less);
                Ok(i)
            }
        }
        '>' => {
            if i + 1 < chars.len() && chars[i + 1] == '=' {
                lexer.tokens.push_back(Token::GreaterEq);
                Ok(i + 1)
            } else {
                lexer.tokens.push_back(Token::Greater);
                Ok(i)
            }
        }
        '&' => {
            if i + 1 < chars.len() && chars[i + 1] == '&' {
                lexer.tokens.push_back(Token::LogicalAnd);
                Ok(i + 1)
            } else {
                Err(syntax_error(
                    &lexer.input,
                    "single '&' not supported, use '&&' for logical AND",
                    Some(i),
                ))
            }
        }
        '|' => {
            if i + 1 < chars.len() && chars[i + 1] == '|' {
                lexer.tokens.push_back(Token::LogicalOr);
                Ok(i + 1)
            } else {
                Err(syntax_error(
                    &lexer.input,
                    "single '|' not supported, use '||' for logical OR",
                    Some(i),
                ))
            }
        }
        _ => Err(syntax_error(
            &lexer.input,
            format!("unexpected operator character '{}'", chars[i]),
            Some(i),
        )),
    }
}
