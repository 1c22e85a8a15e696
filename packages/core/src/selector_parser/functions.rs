//! Function call segment parsing
//!
//! Parses `name(arg, ...)` segments. Each argument is a literal or an
//! independently compiled sub-path. Function names are checked against
//! the registry snapshot at compile time, and an argument list that
//! never closes fails with the function-argument error prefix.

use serde_json::Value;

use super::core::SegmentParser;
use crate::ast::{FunctionArg, PathSegment};
use crate::compiled::CompiledPath;
use crate::error::{PathResult, function_argument_error, invalid_path_error};
use crate::functions::registry;
use crate::tokens::Token;

/// Parse a function segment after the opening '(' has been consumed
pub(super) fn parse_function_segment(
    parser: &mut SegmentParser,
    name: String,
) -> PathResult<PathSegment> {
    let mut args = Vec::new();
    let mut expect_argument = true;

    loop {
        match parser.peek_token() {
            None | Some(Token::Eof) => {
                return Err(function_argument_error(
                    parser.input,
                    &name,
                    "are not closed properly",
                ));
            }
            Some(Token::RightParen) => {
                parser.consume_token();
                break;
            }
            Some(Token::Comma) if !expect_argument => {
                parser.consume_token();
                expect_argument = true;
            }
            _ if expect_argument => {
                args.push(parse_function_argument(parser, &name)?);
                expect_argument = false;
            }
            _ => {
                return Err(function_argument_error(
                    parser.input,
                    &name,
                    "must be separated by commas",
                ));
            }
        }
    }

    if !registry::contains(&name) {
        return Err(invalid_path_error(
            parser.input,
            format!("unknown function '{name}'"),
            None,
        ));
    }

    Ok(PathSegment::Function { name, args })
}

/// Parse one function argument: a literal or a sub-path
fn parse_function_argument(parser: &mut SegmentParser, function: &str) -> PathResult<FunctionArg> {
    match parser.peek_token() {
        Some(Token::String(s)) => {
            let value = Value::String(s.clone());
            parser.consume_token();
            Ok(FunctionArg::Literal(value))
        }
        Some(Token::Integer(n)) => {
            let value = Value::from(*n);
            parser.consume_token();
            Ok(FunctionArg::Literal(value))
        }
        Some(Token::Number(f)) => {
            let value = Value::from(*f);
            parser.consume_token();
            Ok(FunctionArg::Literal(value))
        }
        Some(Token::True) => {
            parser.consume_token();
            Ok(FunctionArg::Literal(Value::Bool(true)))
        }
        Some(Token::False) => {
            parser.consume_token();
            Ok(FunctionArg::Literal(Value::Bool(false)))
        }
        Some(Token::Null) => {
            parser.consume_token();
            Ok(FunctionArg::Literal(Value::Null))
        }
        Some(Token::Root) => {
            let mut segments = vec![parser.parse_segment()?];
            while parser.at_subpath_continuation() {
                segments.push(parser.parse_segment()?);
            }
            let original = render_segments(&segments);
            Ok(FunctionArg::Path(CompiledPath::new(
                segments, original, true,
            )))
        }
        Some(Token::At) => {
            parser.consume_token();
            let mut segments = Vec::new();
            while parser.at_subpath_continuation() {
                segments.push(parser.parse_segment()?);
            }
            let original = format!("@{}", render_segments(&segments));
            Ok(FunctionArg::Path(CompiledPath::new(
                segments, original, false,
            )))
        }
        _ => Err(function_argument_error(
            parser.input,
            function,
            "must be literals or sub-paths",
        )),
    }
}

/// Reconstruct display text for a compiled sub-path
fn render_segments(segments: &[PathSegment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}
