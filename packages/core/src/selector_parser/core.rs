//! Core segment parser structure and dispatch
//!
//! Contains the main `SegmentParser` struct and the `parse_segment`
//! method that routes to the specialized parsing functions.

use std::collections::VecDeque;

use crate::ast::PathSegment;
use crate::error::{PathResult, invalid_path_error};
use crate::tokens::{Token, TokenMatcher};

/// Parser for individual path segments
pub struct SegmentParser<'a> {
    pub(crate) tokens: &'a mut VecDeque<Token>,
    pub(crate) input: &'a str,
}

impl<'a> SegmentParser<'a> {
    /// Create a new segment parser over a shared token stream
    #[inline]
    pub fn new(tokens: &'a mut VecDeque<Token>, input: &'a str) -> Self {
        Self { tokens, input }
    }

    /// Parse a single path segment
    pub fn parse_segment(&mut self) -> PathResult<PathSegment> {
        match self.peek_token() {
            Some(Token::Root) => {
                self.consume_token();
                Ok(PathSegment::Root)
            }
            Some(Token::Dot) => {
                self.consume_token();
                super::dot::parse_dot_segment(self)
            }
            Some(Token::DoubleDot) => {
                self.consume_token();
                Ok(PathSegment::RecursiveDescent)
            }
            Some(Token::Star) => {
                self.consume_token();
                Ok(PathSegment::Wildcard)
            }
            Some(Token::LeftBracket) => {
                self.consume_token();
                super::bracket::parse_bracket_segment(self)
            }
            Some(Token::Identifier(name)) => {
                // Standalone identifiers follow recursive descent ('author'
                // in '$..author') and may themselves be function calls
                let name = name.clone();
                self.consume_token();
                if matches!(self.peek_token(), Some(Token::LeftParen)) {
                    self.consume_token();
                    super::functions::parse_function_segment(self, name)
                } else {
                    Ok(PathSegment::Property { names: vec![name] })
                }
            }
            Some(Token::At) => Err(invalid_path_error(
                self.input,
                "current node identifier '@' is only valid within filter expressions",
                None,
            )),
            _ => Err(invalid_path_error(
                self.input,
                "expected segment (.property, [index], identifier, or [expression])",
                None,
            )),
        }
    }

    /// True while the next token can extend a sub-path
    #[inline]
    pub(crate) fn at_subpath_continuation(&self) -> bool {
        matches!(
            self.peek_token(),
            Some(Token::Dot | Token::DoubleDot | Token::LeftBracket)
        )
    }

    /// Peek at next token without consuming
    #[inline]
    pub(crate) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Consume and return next token
    #[inline]
    pub(crate) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Expect a specific token kind and consume it
    pub(crate) fn expect_token(&mut self, expected: &Token) -> PathResult<()> {
        match self.consume_token() {
            Some(actual) if TokenMatcher::tokens_match(&actual, expected) => Ok(()),
            Some(actual) => Err(invalid_path_error(
                self.input,
                format!(
                    "expected '{}', found '{}'",
                    expected.as_debug_str(),
                    actual.as_debug_str()
                ),
                None,
            )),
            None => Err(invalid_path_error(
                self.input,
                format!("expected '{}', found end of input", expected.as_debug_str()),
                None,
            )),
        }
    }
}
