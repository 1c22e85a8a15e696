//! Index list and slice parsing for array segments
//!
//! Handles single indices, comma-separated index lists, and slice
//! notation with optional start, end, and step components.

use super::core::SegmentParser;
use crate::ast::PathSegment;
use crate::error::{PathResult, invalid_path_error};
use crate::tokens::Token;

/// Parse the remainder of a bracket segment after an initial integer
pub(super) fn parse_index_or_slice(
    parser: &mut SegmentParser,
    start: i64,
) -> PathResult<PathSegment> {
    match parser.peek_token() {
        Some(Token::RightBracket) => {
            parser.consume_token();
            Ok(PathSegment::Index {
                indices: vec![start],
            })
        }
        Some(Token::Colon) => parse_slice_from_start(parser, start),
        Some(Token::Comma) => parse_index_list(parser, start),
        _ => Err(invalid_path_error(
            parser.input,
            "expected ']', ':', or ',' after index",
            None,
        )),
    }
}

/// Parse a comma-separated index list
fn parse_index_list(parser: &mut SegmentParser, first: i64) -> PathResult<PathSegment> {
    let mut indices = vec![first];

    while matches!(parser.peek_token(), Some(Token::Comma)) {
        parser.consume_token();
        match parser.peek_token() {
            Some(Token::Integer(n)) => {
                indices.push(*n);
                parser.consume_token();
            }
            _ => {
                return Err(invalid_path_error(
                    parser.input,
                    "expected integer after comma in index list",
                    None,
                ));
            }
        }
    }

    parser.expect_token(&Token::RightBracket)?;
    Ok(PathSegment::Index { indices })
}

/// Parse slice notation that began with an integer ([1:5])
fn parse_slice_from_start(parser: &mut SegmentParser, start: i64) -> PathResult<PathSegment> {
    parser.consume_token(); // consume colon
    let end = parse_optional_bound(parser);
    let step = parse_optional_step(parser)?;

    parser.expect_token(&Token::RightBracket)?;
    Ok(PathSegment::Slice {
        start: Some(start),
        end,
        step,
    })
}

/// Parse slice notation that began with a colon ([:5], [::2])
pub(super) fn parse_slice_from_colon(parser: &mut SegmentParser) -> PathResult<PathSegment> {
    parser.consume_token(); // consume colon
    let end = parse_optional_bound(parser);
    let step = parse_optional_step(parser)?;

    parser.expect_token(&Token::RightBracket)?;
    Ok(PathSegment::Slice {
        start: None,
        end,
        step,
    })
}

/// Parse an optional integer bound
fn parse_optional_bound(parser: &mut SegmentParser) -> Option<i64> {
    if let Some(Token::Integer(n)) = parser.peek_token() {
        let n = *n;
        parser.consume_token();
        Some(n)
    } else {
        None
    }
}

/// Parse an optional step after a second colon
fn parse_optional_step(parser: &mut SegmentParser) -> PathResult<Option<i64>> {
    if !matches!(parser.peek_token(), Some(Token::Colon)) {
        return Ok(None);
    }
    parser.consume_token(); // consume second colon

    match parser.peek_token() {
        Some(Token::Integer(n)) => {
            let n = *n;
            parser.consume_token();
            if n <= 0 {
                return Err(invalid_path_error(
                    parser.input,
                    "slice step must be a positive integer",
                    None,
                ));
            }
            Ok(Some(n))
        }
        Some(Token::RightBracket) => Ok(None),
        _ => Err(invalid_path_error(
            parser.input,
            "expected step value or ']' after second colon in slice",
            None,
        )),
    }
}
