//! Evaluation of parsed filter expressions against one candidate element.

use super::ast::{FilterNode, FilterPath, LogicalOp};
use super::comparer::{compare, to_canonical_string};
use serde_json::Value;

/// Returns whether `candidate` satisfies the filter.
///
/// Only comparisons, logical connectives and `isOneOf` can be true; a bare path or
/// literal evaluates to false.
pub fn matches(node: &FilterNode, candidate: &Value) -> bool {
    match node {
        FilterNode::Comparison { left, op, right } => {
            let left = operand_value(left, candidate);
            let right = operand_value(right, candidate);
            compare(left.as_deref(), right.as_deref(), *op)
        }
        FilterNode::Logical { left, op, right } => match op {
            LogicalOp::And => matches(left, candidate) && matches(right, candidate),
            LogicalOp::Or => matches(left, candidate) || matches(right, candidate),
        },
        FilterNode::IsOneOf { path, values } => match resolve_path(path, candidate) {
            Some(value) => values.iter().any(|v| *v == value),
            None => false,
        },
        FilterNode::Path(_) | FilterNode::StringLiteral(_) | FilterNode::NumericLiteral(_) => false,
    }
}

/// Canonical string of a comparison operand.
fn operand_value(node: &FilterNode, candidate: &Value) -> Option<String> {
    match node {
        FilterNode::Path(path) => resolve_path(path, candidate),
        FilterNode::StringLiteral(value) | FilterNode::NumericLiteral(value) => Some(value.clone()),
        FilterNode::Comparison { .. } | FilterNode::Logical { .. } | FilterNode::IsOneOf { .. } => {
            None
        }
    }
}

/// Follows object properties from the candidate and renders the result.
pub fn resolve_path(path: &FilterPath, candidate: &Value) -> Option<String> {
    let value = path
        .segments
        .iter()
        .try_fold(candidate, |current, name| current.as_object()?.get(name))?;
    to_canonical_string(value)
}
