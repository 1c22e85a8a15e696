//! Grammar productions for filter expressions
//!
//! Logical operators collect their operands into ordered sequences; a
//! value node with no operator compiles to an implicit existence test.

use super::core::FilterCompiler;
use crate::ast::{ComparisonOp, FilterExpression};
use crate::error::{PathResult, filter_error};
use crate::tokens::{Token, TokenMatcher};

impl FilterCompiler<'_> {
    /// Parse logical OR expressions (lowest precedence)
    pub(super) fn parse_logical_or(&mut self) -> PathResult<FilterExpression> {
        let mut operands = vec![self.parse_logical_and()?];

        while matches!(self.peek_token(), Some(Token::LogicalOr)) {
            self.consume_token();
            operands.push(self.parse_logical_and()?);
        }

        if operands.len() == 1 {
            Ok(operands.remove(0))
        } else {
            Ok(FilterExpression::Or { operands })
        }
    }

    /// Parse logical AND expressions
    pub(super) fn parse_logical_and(&mut self) -> PathResult<FilterExpression> {
        let mut operands = vec![self.parse_unary()?];

        while matches!(self.peek_token(), Some(Token::LogicalAnd)) {
            self.consume_token();
            operands.push(self.parse_unary()?);
        }

        if operands.len() == 1 {
            Ok(operands.remove(0))
        } else {
            Ok(FilterExpression::And { operands })
        }
    }

    /// Parse unary negation and parenthesized sub-expressions
    pub(super) fn parse_unary(&mut self) -> PathResult<FilterExpression> {
        match self.peek_token() {
            Some(Token::Not) => {
                self.consume_token();
                let operand = self.parse_negation_operand()?;
                Ok(FilterExpression::Not {
                    operand: Box::new(operand),
                })
            }
            Some(Token::LeftParen) => {
                self.consume_token();
                let expr = self.parse_logical_or()?;
                self.expect_token(&Token::RightParen)?;
                Ok(expr)
            }
            _ => self.parse_relational(),
        }
    }

    /// Parse the operand of '!'
    ///
    /// Negation binds tighter than the relational operators, so it
    /// applies to a parenthesized sub-expression, another negation, or
    /// the truthiness of a single value node.
    fn parse_negation_operand(&mut self) -> PathResult<FilterExpression> {
        match self.peek_token() {
            Some(Token::Not) => {
                self.consume_token();
                let operand = self.parse_negation_operand()?;
                Ok(FilterExpression::Not {
                    operand: Box::new(operand),
                })
            }
            Some(Token::LeftParen) => {
                self.consume_token();
                let expr = self.parse_logical_or()?;
                self.expect_token(&Token::RightParen)?;
                Ok(expr)
            }
            _ => {
                let value = self.parse_value_node()?;
                Ok(FilterExpression::Exists { value })
            }
        }
    }

    /// Parse a relational comparison or an implicit existence test
    pub(super) fn parse_relational(&mut self) -> PathResult<FilterExpression> {
        let left = self.parse_value_node()?;

        let Some(op) = self.parse_relational_operator()? else {
            return Ok(FilterExpression::Exists { value: left });
        };

        if !self
            .peek_token()
            .is_some_and(TokenMatcher::can_start_value)
        {
            return Err(filter_error(
                self.input,
                format!("operator '{}' has no right-hand operand", op.as_str()),
                None,
            ));
        }
        let right = self.parse_value_node()?;

        Ok(FilterExpression::Comparison { left, op, right })
    }

    /// Parse an optional relational operator (symbolic or keyword)
    fn parse_relational_operator(&mut self) -> PathResult<Option<ComparisonOp>> {
        let op = match self.peek_token() {
            Some(Token::Equal) => Some(ComparisonOp::Eq),
            Some(Token::NotEqual) => Some(ComparisonOp::Ne),
            Some(Token::Less) => Some(ComparisonOp::Lt),
            Some(Token::LessEq) => Some(ComparisonOp::Lte),
            Some(Token::Greater) => Some(ComparisonOp::Gt),
            Some(Token::GreaterEq) => Some(ComparisonOp::Gte),
            Some(Token::RegexMatch) => Some(ComparisonOp::RegexMatch),
            Some(Token::Identifier(keyword)) => {
                let Some(op) = ComparisonOp::from_keyword(keyword) else {
                    return Err(filter_error(
                        self.input,
                        format!("unknown operator '{keyword}'"),
                        None,
                    ));
                };
                Some(op)
            }
            _ => None,
        };

        if op.is_some() {
            self.consume_token();
        }
        Ok(op)
    }
}
