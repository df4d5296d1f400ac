//! Abstract syntax tree types for selectors and filter expressions.

use std::cmp::Ordering;
use std::fmt;

/// A comparison operator shared by filter expressions and trailing value predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>=`
    Ge,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `<`
    Lt,
}

impl ComparisonOp {
    /// Operators in matching order: two-character forms before their one-character prefixes.
    pub const ALL: [ComparisonOp; 6] = [
        ComparisonOp::Eq,
        ComparisonOp::Ne,
        ComparisonOp::Ge,
        ComparisonOp::Gt,
        ComparisonOp::Le,
        ComparisonOp::Lt,
    ];

    /// Returns the operator's source text.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Ge => ">=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Le => "<=",
            ComparisonOp::Lt => "<",
        }
    }

    /// True for `>=`, `>`, `<=` and `<`.
    pub fn is_ordering(self) -> bool {
        !matches!(self, ComparisonOp::Eq | ComparisonOp::Ne)
    }

    /// Whether the operator accepts operands that order as `ordering`.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            ComparisonOp::Eq => ordering.is_eq(),
            ComparisonOp::Ne => ordering.is_ne(),
            ComparisonOp::Ge => ordering.is_ge(),
            ComparisonOp::Gt => ordering.is_gt(),
            ComparisonOp::Le => ordering.is_le(),
            ComparisonOp::Lt => ordering.is_lt(),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A segment in a parsed selector.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Named child (.property)
    Child(String),
    /// Array index ([0], [-1])
    Index(isize),
    /// Raw filter text from `[?( ... )]`, parsed when the segment is applied
    Filter(String),
    /// Trailing comparison against the value resolved so far (`$.id >= 10`)
    ValuePredicate(ComparisonOp, String),
}

/// A complete parsed selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    /// Segments that make up the selector, in application order.
    pub segments: Vec<PathSegment>,
}

impl Selector {
    /// Creates a new selector with the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

/// Boolean connective inside a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// A relative lookup from the filter candidate (`@.a.b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPath {
    pub segments: Vec<String>,
}

impl FilterPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

/// A node in a parsed filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    /// `left op right`
    Comparison {
        left: Box<FilterNode>,
        op: ComparisonOp,
        right: Box<FilterNode>,
    },
    /// `left && right`, `left || right`
    Logical {
        left: Box<FilterNode>,
        op: LogicalOp,
        right: Box<FilterNode>,
    },
    /// `@.segment...`
    Path(FilterPath),
    /// `'text'`, already unescaped
    StringLiteral(String),
    /// Decimal literal, kept as written
    NumericLiteral(String),
    /// `isOneOf(@.path, 'a', 'b', ...)`
    IsOneOf { path: FilterPath, values: Vec<String> },
}

impl FilterNode {
    pub fn comparison(left: FilterNode, op: ComparisonOp, right: FilterNode) -> Self {
        FilterNode::Comparison {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn logical(left: FilterNode, op: LogicalOp, right: FilterNode) -> Self {
        FilterNode::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}
