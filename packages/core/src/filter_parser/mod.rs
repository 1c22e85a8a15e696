//! Filter expression parsing
//!
//! Compiles the text between `?(` and its matching `)` into a boolean
//! expression tree. Precedence, lowest to highest: `||`, `&&`, unary
//! `!`, relational operators; parentheses override.

mod core;
mod expressions;
mod values;

pub use self::core::FilterCompiler;
