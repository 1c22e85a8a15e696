//! Core lexer implementation
//!
//! Provides the main `PathLexer` dispatch loop that walks the input
//! character by character and delegates to the specialized scanners.

use std::collections::VecDeque;

use crate::error::PathResult;
use crate::tokens::Token;

/// Lexer for path expressions
pub struct PathLexer {
    pub(crate) input: String,
    pub(crate) tokens: VecDeque<Token>,
}

impl PathLexer {
    /// Create a new lexer over the given path text
    #[inline]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            tokens: VecDeque::new(),
        }
    }

    /// Scan the full input into a token stream terminated by `Eof`
    pub fn tokenize(mut self) -> PathResult<VecDeque<Token>> {
        use super::{characters, numbers, operators, patterns, strings};

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                ' ' | '\t' | '\n' | '\r' => {
                    // Skip whitespace
                }
                '\'' | '"' => {
                    i = strings::scan_string_literal(&mut self, &chars, i)?;
                }
                '/' => {
                    i = patterns::scan_pattern_literal(&mut self, &chars, i)?;
                }
                c if c.is_ascii_digit() || c == '-' => {
                    i = numbers::scan_number_literal(&mut self, &chars, i)?;
                }
                '=' | '!' | '<' | '>' | '&' | '|' => {
                    i = operators::scan_operator(&mut self, &chars, i)?;
                }
                _ => {
                    i = characters::scan_character_token(&mut self, &chars, i)?;
                }
            }
            i += 1;
        }

        self.tokens.push_back(Token::Eof);
        Ok(self.tokens)
    }
}
