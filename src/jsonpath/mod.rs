//! Selector parser and evaluator for read-only JSON queries.
//!
//! This module implements a small JSONPath subset: enough to test whether a
//! document contains a node and to pull the first matching scalar out of it.
//!
//! # Supported Syntax
//!
//! - `$` - Root node (optional; `id` and `.id` mean `$.id`)
//! - `.property` - Named property access
//! - `[index]` - Array index (supports negative indices)
//! - `[?(expr)]` - Array filter over `@.path`, quoted strings, decimals,
//!   `== != >= > <= <`, `&&`, `||`, parentheses and `isOneOf(@.path, 'a', 'b', ...)`
//! - `<path> <op> <literal>` - Trailing comparison on the resolved value
//!
//! # Examples
//!
//! ```
//! // $.items[?(@.kind=='x' && @.code=='10')] - items matching both fields
//! // $.items[-1].kind == 'y' - last item's kind is 'y'
//! // $.items[?(isOneOf(@.code,'10','30'))].id - ids of items with either code
//! ```

pub mod ast;
pub mod comparer;
pub mod cursor;
pub mod decimal;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod filter_parser;
pub mod parser;

pub use ast::{ComparisonOp, FilterNode, FilterPath, LogicalOp, PathSegment, Selector};
pub use decimal::ExactDecimal;
pub use error::SelectorError;
pub use evaluator::Evaluator;
pub use filter_parser::FilterParser;
pub use parser::Parser;
