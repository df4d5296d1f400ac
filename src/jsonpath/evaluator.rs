use super::ast::PathSegment;
use super::comparer::{compare, to_canonical_string};
use super::filter;
use super::filter_parser::FilterParser;
use serde_json::Value;
use tracing::{debug, trace};

pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Evaluates parsed segments from the root and returns the matching nodes in
    /// document order.
    ///
    /// `null` nodes are kept when produced by the last segment, so callers decide
    /// whether they count as matches. A `null` reached earlier ends its branch.
    pub fn evaluate(&self, segments: &[PathSegment]) -> Vec<&'a Value> {
        let mut current: Vec<&'a Value> = vec![self.root];

        for segment in segments {
            let mut next = Vec::new();
            for &node in &current {
                if !node.is_null() {
                    next.extend(self.evaluate_segment(node, segment));
                }
            }
            trace!(?segment, matches = next.len(), "applied segment");
            current = next;
        }

        current
    }

    fn evaluate_segment(&self, node: &'a Value, segment: &PathSegment) -> Vec<&'a Value> {
        match segment {
            PathSegment::Child(name) => self.find_child(node, name),
            PathSegment::Index(idx) => self.get_array_element(node, *idx),
            PathSegment::Filter(expression) => self.filter_array(node, expression),
            PathSegment::ValuePredicate(op, literal) => {
                let value = to_canonical_string(node);
                if compare(value.as_deref(), Some(literal.as_str()), *op) {
                    vec![node]
                } else {
                    vec![]
                }
            }
        }
    }

    fn find_child(&self, node: &'a Value, name: &str) -> Vec<&'a Value> {
        node.as_object()
            .and_then(|props| props.get(name))
            .into_iter()
            .collect()
    }

    fn get_array_element(&self, node: &'a Value, idx: isize) -> Vec<&'a Value> {
        if let Value::Array(items) = node {
            let len = items.len() as isize;
            let normalized_idx = if idx < 0 { len + idx } else { idx };

            if normalized_idx >= 0 && (normalized_idx as usize) < items.len() {
                return vec![&items[normalized_idx as usize]];
            }
        }
        vec![]
    }

    fn filter_array(&self, node: &'a Value, expression: &str) -> Vec<&'a Value> {
        let Value::Array(items) = node else {
            return vec![];
        };

        let filter_node = match FilterParser::parse(expression) {
            Ok(filter_node) => filter_node,
            Err(err) => {
                debug!(%err, expression, "filter expression rejected");
                return vec![];
            }
        };

        items
            .iter()
            .filter(|item| !item.is_null() && filter::matches(&filter_node, item))
            .collect()
    }
}
