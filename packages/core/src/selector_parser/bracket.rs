//! Bracket notation segment parsing
//!
//! Handles quoted property names (single and comma-separated), array
//! indices, slices, wildcards, and filter predicates.

use super::core::SegmentParser;
use crate::ast::PathSegment;
use crate::error::{PathResult, filter_error, invalid_path_error};
use crate::filter_parser::FilterCompiler;
use crate::tokens::Token;

/// Parse a bracket segment after the opening '['
pub(super) fn parse_bracket_segment(parser: &mut SegmentParser) -> PathResult<PathSegment> {
    match parser.peek_token() {
        Some(Token::Star) => {
            parser.consume_token();
            parser.expect_token(&Token::RightBracket)?;
            Ok(PathSegment::Wildcard)
        }
        Some(Token::Question) => {
            parser.consume_token();
            parse_filter_segment(parser)
        }
        Some(Token::String(s)) => {
            let first = s.clone();
            parser.consume_token();
            parse_property_names(parser, first)
        }
        Some(Token::Integer(n)) => {
            let index = *n;
            parser.consume_token();
            super::slice::parse_index_or_slice(parser, index)
        }
        Some(Token::Colon) => super::slice::parse_slice_from_colon(parser),
        Some(Token::RightBracket) => Err(invalid_path_error(
            parser.input,
            "empty brackets are not allowed",
            None,
        )),
        Some(Token::At) => Err(invalid_path_error(
            parser.input,
            "current node identifier '@' is only valid within filter expressions",
            None,
        )),
        _ => Err(invalid_path_error(
            parser.input,
            "expected quoted name, index, slice, filter, or wildcard in brackets",
            None,
        )),
    }
}

/// Parse a filter predicate after '[?'
fn parse_filter_segment(parser: &mut SegmentParser) -> PathResult<PathSegment> {
    if !matches!(parser.peek_token(), Some(Token::LeftParen)) {
        return Err(filter_error(
            parser.input,
            "filter predicate must start with '?('",
            None,
        ));
    }
    parser.consume_token();

    let expression = {
        let mut filter = FilterCompiler::new(parser.tokens, parser.input);
        filter.parse_expression()?
    };

    if !matches!(parser.peek_token(), Some(Token::RightParen)) {
        return Err(filter_error(
            parser.input,
            "filter predicate is not closed with ')'",
            None,
        ));
    }
    parser.consume_token();
    parser.expect_token(&Token::RightBracket)?;

    Ok(PathSegment::Filter { expression })
}

/// Parse one or more comma-separated quoted property names
fn parse_property_names(parser: &mut SegmentParser, first: String) -> PathResult<PathSegment> {
    let mut names = vec![first];

    while matches!(parser.peek_token(), Some(Token::Comma)) {
        parser.consume_token();
        match parser.peek_token() {
            Some(Token::String(s)) => {
                names.push(s.clone());
                parser.consume_token();
            }
            _ => {
                return Err(invalid_path_error(
                    parser.input,
                    "expected quoted property name after comma",
                    None,
                ));
            }
        }
    }

    parser.expect_token(&Token::RightBracket)?;
    Ok(PathSegment::Property { names })
}
