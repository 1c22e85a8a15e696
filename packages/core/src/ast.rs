//! Abstract syntax tree for compiled path expressions
//!
//! Path chains and filter trees are closed sets of tagged variants so the
//! compiler and evaluator stay exhaustively checkable. Everything here is
//! immutable once built.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::compiled::CompiledPath;

/// One segment in a compiled path chain
#[derive(Debug, Clone)]
pub enum PathSegment {
    /// Root of the document ($)
    Root,

    /// Property access (.name or ['name'], possibly multi-name ['a','b'])
    Property {
        /// Property names; more than one fans out a branch per name
        names: Vec<String>,
    },

    /// Wildcard over array elements or map values (* or [*])
    Wildcard,

    /// Array index access ([0], [-1], [0,2])
    Index {
        /// Indices to select; negative values count from the end
        indices: Vec<i64>,
    },

    /// Array slice ([start:end:step], each component optional)
    Slice {
        /// Start index (None means from the beginning)
        start: Option<i64>,
        /// End index, exclusive (None means to the end)
        end: Option<i64>,
        /// Step size (None means 1)
        step: Option<i64>,
    },

    /// Recursive descent (..)
    RecursiveDescent,

    /// Filter predicate ([?( ... )])
    Filter {
        /// Compiled boolean expression tree
        expression: FilterExpression,
    },

    /// Function invocation, always the final segment (name(arg, ...))
    Function {
        /// Registered function name
        name: String,
        /// Arguments, each a literal or an independently compiled sub-path
        args: Vec<FunctionArg>,
    },
}

impl PathSegment {
    /// Whether this segment can match at most one node
    #[inline]
    #[must_use]
    pub fn is_definite(&self) -> bool {
        match self {
            PathSegment::Root | PathSegment::Function { .. } => true,
            PathSegment::Property { names } => names.len() == 1,
            PathSegment::Index { indices } => indices.len() == 1,
            PathSegment::Wildcard
            | PathSegment::Slice { .. }
            | PathSegment::RecursiveDescent
            | PathSegment::Filter { .. } => false,
        }
    }

    /// Whether this segment fans out into multiple branches
    #[inline]
    #[must_use]
    pub fn produces_multiple(&self) -> bool {
        !self.is_definite()
    }
}

/// Argument to a path function
#[derive(Debug, Clone)]
pub enum FunctionArg {
    /// Literal value passed through unchanged
    Literal(Value),
    /// Sub-path evaluated against the current node ($-paths against the root)
    Path(CompiledPath),
}

/// Boolean expression tree for filter predicates
#[derive(Debug, Clone)]
pub enum FilterExpression {
    /// Logical conjunction; operands evaluate left-to-right, short-circuit
    And {
        /// Ordered child expressions
        operands: Vec<FilterExpression>,
    },

    /// Logical disjunction; operands evaluate left-to-right, short-circuit
    Or {
        /// Ordered child expressions
        operands: Vec<FilterExpression>,
    },

    /// Logical negation
    Not {
        /// Negated child expression
        operand: Box<FilterExpression>,
    },

    /// Relational comparison between two value nodes
    Comparison {
        /// Left operand
        left: ValueNode,
        /// Relational operator
        op: ComparisonOp,
        /// Right operand
        right: ValueNode,
    },

    /// Bare value node; truthy iff it resolves to a non-null node
    Exists {
        /// The value node under test
        value: ValueNode,
    },
}

/// Value operand inside a filter expression
#[derive(Clone)]
pub enum ValueNode {
    /// Sub-path relative to the current node (@) or the document root ($)
    Path {
        /// Compiled sub-path; a leading Root segment rebases to the document root
        path: CompiledPath,
        /// True for @-anchored paths
        relative: bool,
    },
    /// Literal value (string, number, boolean, null, array, object)
    Literal(Value),
    /// Regex literal with optional case-insensitive flag
    Pattern {
        /// Raw regex source
        source: String,
        /// Whether matching ignores case
        case_insensitive: bool,
    },
    /// Caller-supplied predicate, only constructible through the API
    Predicate(Arc<dyn CustomPredicate>),
}

/// Caller-supplied predicate used by the `Matches` operator
pub trait CustomPredicate: Send + Sync {
    /// Decide whether the candidate passes, given the document root
    fn test(&self, candidate: &Value, root: &Value) -> bool;
}

impl fmt::Debug for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueNode::Path { path, relative } => f
                .debug_struct("Path")
                .field("path", path)
                .field("relative", relative)
                .finish(),
            ValueNode::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            ValueNode::Pattern {
                source,
                case_insensitive,
            } => f
                .debug_struct("Pattern")
                .field("source", source)
                .field("case_insensitive", case_insensitive)
                .finish(),
            ValueNode::Predicate(_) => f.write_str("Predicate(<custom>)"),
        }
    }
}

/// Relational operators available in filter expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Equality (==)
    Eq,
    /// Inequality (!=)
    Ne,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Regex match (=~)
    RegexMatch,
    /// Membership in a list (in)
    In,
    /// Non-membership in a list (nin)
    Nin,
    /// Left list fully contained in right list (subsetof)
    SubsetOf,
    /// Non-empty intersection between lists (anyof)
    AnyOf,
    /// Empty intersection between lists (noneof)
    NoneOf,
    /// String or collection length equals the operand (size)
    Size,
    /// Emptiness of string/collection equals the boolean operand (empty)
    Empty,
    /// Existence of the path equals the boolean operand (exists)
    Exists,
    /// Type name of the value equals the string operand (type)
    Type,
    /// String or array containment (contains)
    Contains,
    /// Caller-supplied predicate, API-only
    Matches,
}

impl ComparisonOp {
    /// Map a keyword operator appearing in filter text to its variant
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "in" => Some(ComparisonOp::In),
            "nin" => Some(ComparisonOp::Nin),
            "subsetof" => Some(ComparisonOp::SubsetOf),
            "anyof" => Some(ComparisonOp::AnyOf),
            "noneof" => Some(ComparisonOp::NoneOf),
            "size" => Some(ComparisonOp::Size),
            "empty" => Some(ComparisonOp::Empty),
            "exists" => Some(ComparisonOp::Exists),
            "type" => Some(ComparisonOp::Type),
            "contains" => Some(ComparisonOp::Contains),
            _ => None,
        }
    }

    /// Operator text as written in a path expression
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::RegexMatch => "=~",
            ComparisonOp::In => "in",
            ComparisonOp::Nin => "nin",
            ComparisonOp::SubsetOf => "subsetof",
            ComparisonOp::AnyOf => "anyof",
            ComparisonOp::NoneOf => "noneof",
            ComparisonOp::Size => "size",
            ComparisonOp::Empty => "empty",
            ComparisonOp::Exists => "exists",
            ComparisonOp::Type => "type",
            ComparisonOp::Contains => "contains",
            ComparisonOp::Matches => "matches",
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Root => write!(f, "$"),
            PathSegment::Property { names } => {
                if names.len() == 1 {
                    write!(f, "['{}']", names[0])
                } else {
                    let joined: Vec<String> =
                        names.iter().map(|n| format!("'{n}'")).collect();
                    write!(f, "[{}]", joined.join(","))
                }
            }
            PathSegment::Wildcard => write!(f, "[*]"),
            PathSegment::Index { indices } => {
                let joined: Vec<String> = indices.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", joined.join(","))
            }
            PathSegment::Slice { start, end, step } => {
                let fmt_bound = |b: &Option<i64>| b.map(|v| v.to_string()).unwrap_or_default();
                match step {
                    Some(s) => write!(f, "[{}:{}:{s}]", fmt_bound(start), fmt_bound(end)),
                    None => write!(f, "[{}:{}]", fmt_bound(start), fmt_bound(end)),
                }
            }
            PathSegment::RecursiveDescent => write!(f, ".."),
            PathSegment::Filter { expression } => write!(f, "[?({expression})]"),
            PathSegment::Function { name, args } => {
                let joined: Vec<String> = args.iter().map(ToString::to_string).collect();
                write!(f, ".{name}({})", joined.join(","))
            }
        }
    }
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionArg::Literal(value) => write!(f, "{value}"),
            FunctionArg::Path(path) => write!(f, "{path}"),
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::And { operands } => {
                let joined: Vec<String> =
                    operands.iter().map(|o| format!("({o})")).collect();
                write!(f, "{}", joined.join(" && "))
            }
            FilterExpression::Or { operands } => {
                let joined: Vec<String> =
                    operands.iter().map(|o| format!("({o})")).collect();
                write!(f, "{}", joined.join(" || "))
            }
            FilterExpression::Not { operand } => write!(f, "!({operand})"),
            FilterExpression::Comparison { left, op, right } => {
                write!(f, "{left} {} {right}", op.as_str())
            }
            FilterExpression::Exists { value } => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The compiled sub-path text already carries its @ or $ anchor
            ValueNode::Path { path, .. } => write!(f, "{path}"),
            ValueNode::Literal(value) => write!(f, "{value}"),
            ValueNode::Pattern {
                source,
                case_insensitive,
            } => {
                let flag = if *case_insensitive { "i" } else { "" };
                write!(f, "/{source}/{flag}")
            }
            ValueNode::Predicate(_) => write!(f, "<custom predicate>"),
        }
    }
}
