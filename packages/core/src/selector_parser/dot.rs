//! Dot notation segment parsing
//!
//! Handles property access after '.', wildcard '.*', and function calls
//! such as '.sum()'.

use super::core::SegmentParser;
use crate::ast::PathSegment;
use crate::error::{PathResult, invalid_path_error};
use crate::tokens::Token;

/// Parse the segment following a '.' token
pub(super) fn parse_dot_segment(parser: &mut SegmentParser) -> PathResult<PathSegment> {
    match parser.peek_token() {
        Some(Token::Star) => {
            parser.consume_token();
            Ok(PathSegment::Wildcard)
        }
        Some(Token::Identifier(name)) => {
            let name = name.clone();
            parser.consume_token();
            if matches!(parser.peek_token(), Some(Token::LeftParen)) {
                parser.consume_token();
                super::functions::parse_function_segment(parser, name)
            } else {
                Ok(PathSegment::Property { names: vec![name] })
            }
        }
        // Keywords double as ordinary property names in dot notation
        Some(Token::True) => {
            parser.consume_token();
            Ok(PathSegment::Property {
                names: vec!["true".to_string()],
            })
        }
        Some(Token::False) => {
            parser.consume_token();
            Ok(PathSegment::Property {
                names: vec!["false".to_string()],
            })
        }
        Some(Token::Null) => {
            parser.consume_token();
            Ok(PathSegment::Property {
                names: vec!["null".to_string()],
            })
        }
        Some(Token::At) => Err(invalid_path_error(
            parser.input,
            "current node identifier '@' is only valid within filter expressions",
            None,
        )),
        _ => Err(invalid_path_error(
            parser.input,
            "expected property name, '*' (wildcard), or function call after '.'",
            None,
        )),
    }
}
