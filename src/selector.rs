//! Query operations over JSON text.
//!
//! Every operation is total: malformed JSON, malformed selectors, filters that do
//! not parse, missing nodes and type mismatches all come back as `false` or
//! `None`. Nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use jsonselector::selector::{JsonSelect, JsonSelector};
//!
//! let json = r#"{"items":[{"id":"A1","kind":"x"},{"id":"B2","kind":"y"}]}"#;
//! let selector = JsonSelector::new();
//!
//! assert!(selector.any(json, "$.items[?(@.kind=='x')]"));
//! assert_eq!(
//!     selector.first_string(json, "$.items[?(@.kind=='y')].id"),
//!     Some("B2".to_string())
//! );
//! assert_eq!(selector.first_int(json, "$.items[0].id"), None);
//! ```

use crate::jsonpath::comparer::canonical_number;
use crate::jsonpath::{Evaluator, ExactDecimal, Parser, Selector};
use serde_json::Value;
use tracing::debug;

/// The three query operations.
pub trait JsonSelect {
    /// Returns true if the selector matches at least one non-null node.
    fn any(&self, json: &str, selector: &str) -> bool;

    /// Returns the first match as a string. Numbers render as invariant decimals;
    /// anything other than a string or number yields `None`.
    fn first_string(&self, json: &str, selector: &str) -> Option<String>;

    /// Returns the first match as an `i32`. Numbers are truncated toward zero,
    /// strings are parsed as base-10 integers.
    fn first_int(&self, json: &str, selector: &str) -> Option<i32>;
}

/// Default [`JsonSelect`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSelector;

impl JsonSelector {
    pub fn new() -> Self {
        JsonSelector
    }

    /// [`JsonSelect::any`] over an already parsed document.
    pub fn any_value(&self, document: &Value, selector: &str) -> bool {
        match parse_selector(selector) {
            Some(selector) => Evaluator::new(document)
                .evaluate(&selector.segments)
                .iter()
                .any(|node| !node.is_null()),
            None => false,
        }
    }

    /// [`JsonSelect::first_string`] over an already parsed document.
    pub fn first_string_value(&self, document: &Value, selector: &str) -> Option<String> {
        match first_value(document, selector)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(canonical_number(n)),
            _ => None,
        }
    }

    /// [`JsonSelect::first_int`] over an already parsed document.
    pub fn first_int_value(&self, document: &Value, selector: &str) -> Option<i32> {
        match first_value(document, selector)? {
            Value::Number(n) => ExactDecimal::parse(&n.to_string())?.trunc_to_i32(),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        }
    }
}

impl JsonSelect for JsonSelector {
    fn any(&self, json: &str, selector: &str) -> bool {
        parse_document(json).is_some_and(|document| self.any_value(&document, selector))
    }

    fn first_string(&self, json: &str, selector: &str) -> Option<String> {
        self.first_string_value(&parse_document(json)?, selector)
    }

    fn first_int(&self, json: &str, selector: &str) -> Option<i32> {
        self.first_int_value(&parse_document(json)?, selector)
    }
}

fn first_value<'a>(document: &'a Value, selector: &str) -> Option<&'a Value> {
    let selector = parse_selector(selector)?;
    Evaluator::new(document)
        .evaluate(&selector.segments)
        .into_iter()
        .next()
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Parser::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(%err, selector, "selector rejected");
            None
        }
    }
}

/// Parses JSON text; blank or malformed text is no document.
fn parse_document(json: &str) -> Option<Value> {
    if json.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(json) {
        Ok(document) => Some(document),
        Err(err) => {
            debug!(%err, "JSON text rejected");
            None
        }
    }
}
