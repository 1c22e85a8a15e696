//! Value operand parsing for filter expressions
//!
//! Handles sub-paths anchored at `@` or `$`, literals (including JSON
//! array literals used by the list operators), and regex literals.

use serde_json::Value;

use super::core::FilterCompiler;
use crate::ast::{PathSegment, ValueNode};
use crate::compiled::CompiledPath;
use crate::error::{PathResult, filter_error};
use crate::selector_parser::SegmentParser;
use crate::tokens::Token;

impl FilterCompiler<'_> {
    /// Parse a single value operand
    pub(super) fn parse_value_node(&mut self) -> PathResult<ValueNode> {
        match self.peek_token() {
            Some(Token::At) => {
                self.consume_token();
                let segments = self.parse_subpath_segments()?;
                let original = format!("@{}", render_segments(&segments));
                Ok(ValueNode::Path {
                    path: CompiledPath::new(segments, original, false),
                    relative: true,
                })
            }
            Some(Token::Root) => {
                let mut parser = SegmentParser::new(self.tokens, self.input);
                let mut segments = vec![parser.parse_segment()?];
                drop(parser);
                segments.extend(self.parse_subpath_segments()?);
                let original = render_segments(&segments);
                Ok(ValueNode::Path {
                    path: CompiledPath::new(segments, original, true),
                    relative: false,
                })
            }
            Some(Token::String(s)) => {
                let value = Value::String(s.clone());
                self.consume_token();
                Ok(ValueNode::Literal(value))
            }
            Some(Token::Integer(n)) => {
                let value = Value::from(*n);
                self.consume_token();
                Ok(ValueNode::Literal(value))
            }
            Some(Token::Number(f)) => {
                let value = Value::from(*f);
                self.consume_token();
                Ok(ValueNode::Literal(value))
            }
            Some(Token::True) => {
                self.consume_token();
                Ok(ValueNode::Literal(Value::Bool(true)))
            }
            Some(Token::False) => {
                self.consume_token();
                Ok(ValueNode::Literal(Value::Bool(false)))
            }
            Some(Token::Null) => {
                self.consume_token();
                Ok(ValueNode::Literal(Value::Null))
            }
            Some(Token::Pattern {
                source,
                case_insensitive,
            }) => {
                let source = source.clone();
                let case_insensitive = *case_insensitive;
                self.consume_token();

                // Malformed regex literals are compile errors, not
                // evaluation-time surprises.
                let key = crate::filter::pattern_key(&source, case_insensitive);
                if let Err(error) = crate::filter::REGEX_CACHE.get_or_compile(&key) {
                    return Err(filter_error(
                        self.input,
                        format!("malformed regex literal '/{source}/': {error}"),
                        None,
                    ));
                }

                Ok(ValueNode::Pattern {
                    source,
                    case_insensitive,
                })
            }
            Some(Token::LeftBracket) => {
                self.consume_token();
                self.parse_array_literal()
            }
            _ => Err(filter_error(
                self.input,
                "expected value operand (sub-path, literal, or pattern)",
                None,
            )),
        }
    }

    /// Collect the segments of a sub-path following `@` or `$`
    fn parse_subpath_segments(&mut self) -> PathResult<Vec<PathSegment>> {
        let mut parser = SegmentParser::new(self.tokens, self.input);
        let mut segments = Vec::new();
        while parser.at_subpath_continuation() {
            segments.push(parser.parse_segment()?);
        }
        Ok(segments)
    }

    /// Parse a JSON array literal after the opening '['
    fn parse_array_literal(&mut self) -> PathResult<ValueNode> {
        let mut items = Vec::new();
        let mut expect_item = true;

        loop {
            match self.peek_token() {
                None | Some(Token::Eof) => {
                    return Err(filter_error(
                        self.input,
                        "array literal is not closed with ']'",
                        None,
                    ));
                }
                Some(Token::RightBracket) => {
                    self.consume_token();
                    break;
                }
                Some(Token::Comma) if !expect_item => {
                    self.consume_token();
                    expect_item = true;
                }
                Some(token) if expect_item && token.is_literal() => {
                    let item = match self.consume_token() {
                        Some(Token::String(s)) => Value::String(s),
                        Some(Token::Integer(n)) => Value::from(n),
                        Some(Token::Number(f)) => Value::from(f),
                        Some(Token::True) => Value::Bool(true),
                        Some(Token::False) => Value::Bool(false),
                        Some(Token::Null) => Value::Null,
                        _ => unreachable!("is_literal guarantees a literal token"),
                    };
                    items.push(item);
                    expect_item = false;
                }
                _ => {
                    return Err(filter_error(
                        self.input,
                        "array literals may only contain literal values",
                        None,
                    ));
                }
            }
        }

        Ok(ValueNode::Literal(Value::Array(items)))
    }
}

/// Reconstruct display text for a compiled sub-path
fn render_segments(segments: &[PathSegment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}
