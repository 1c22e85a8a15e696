//! Path expression compiler and entry point
//!
//! Validates the raw expression, runs the lexer and segment parsers, and
//! produces an immutable `CompiledPath`. `compile_cached` is the
//! cache-mediated entry point used by the public API; plain `compile`
//! always does the full work.

use std::sync::Arc;

use crate::ast::PathSegment;
use crate::cache::CacheProvider;
use crate::compiled::CompiledPath;
use crate::error::{PathResult, invalid_path_error};
use crate::selector_parser::SegmentParser;
use crate::tokenizer::PathLexer;
use crate::tokens::Token;

/// Path expression parser and compiler
pub struct PathCompiler;

impl PathCompiler {
    /// Compile a path expression into a reusable segment chain
    ///
    /// # Errors
    ///
    /// Returns `PathError::Syntax` for lexical failures and
    /// `PathError::InvalidPath` for structural ones. Compilation is a
    /// pure function of the input string.
    pub fn compile(expression: &str) -> PathResult<CompiledPath> {
        let expression = expression.trim();

        if expression.is_empty() {
            return Err(invalid_path_error(
                expression,
                "empty expression not allowed",
                Some(0),
            ));
        }

        let is_root_path = expression.starts_with('$');
        if !is_root_path && !expression.starts_with('@') {
            return Err(invalid_path_error(
                expression,
                "path must start with '$' (root) or '@' (current node)",
                Some(0),
            ));
        }

        // A trailing single dot is an incomplete property access; a
        // trailing '..' is recursive descent with nothing to descend to.
        if expression.ends_with('.') && !expression.ends_with("..") {
            return Err(invalid_path_error(
                expression,
                "incomplete property access (ends with '.')",
                Some(expression.len() - 1),
            ));
        }
        if expression.ends_with("..") {
            return Err(invalid_path_error(
                expression,
                "recursive descent '..' must be followed by a segment",
                Some(expression.len() - 2),
            ));
        }

        let mut tokens = PathLexer::new(expression).tokenize()?;

        // Property access directly after '$' needs dot or bracket notation
        if tokens.len() >= 3
            && matches!(tokens[0], Token::Root)
            && matches!(tokens[1], Token::Identifier(_))
        {
            return Err(invalid_path_error(
                expression,
                "property access requires '.' (dot) or '[]' (bracket) notation after root '$'",
                Some(1),
            ));
        }

        // Relative paths carry no marker segment; evaluation starts at
        // the caller-provided node.
        if !is_root_path && matches!(tokens.front(), Some(Token::At)) {
            tokens.pop_front();
        }

        let mut segments = Vec::new();
        {
            let mut parser = SegmentParser::new(&mut tokens, expression);
            while !matches!(parser.peek_token(), Some(Token::Eof) | None) {
                segments.push(parser.parse_segment()?);
            }
        }

        // Function output has no further structural path, so a function
        // call can only terminate the chain.
        let last = segments.len().saturating_sub(1);
        for (i, segment) in segments.iter().enumerate() {
            if matches!(segment, PathSegment::Function { .. }) && i != last {
                return Err(invalid_path_error(
                    expression,
                    "function calls must be the final segment of a path",
                    None,
                ));
            }
        }

        Ok(CompiledPath::new(
            segments,
            expression.to_string(),
            is_root_path,
        ))
    }

    /// Compile through the process-wide compiled-path cache
    ///
    /// Concurrent misses for the same key may compile redundantly; the
    /// last writer wins and all results are equivalent.
    pub fn compile_cached(expression: &str) -> PathResult<Arc<CompiledPath>> {
        let cache = CacheProvider::cache();
        if let Some(hit) = cache.get(expression.trim()) {
            return Ok(hit);
        }

        let compiled = Arc::new(Self::compile(expression)?);
        cache.put(compiled.original().to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    /// Validate expression syntax without keeping the result
    pub fn validate(expression: &str) -> PathResult<()> {
        Self::compile(expression).map(|_| ())
    }
}
