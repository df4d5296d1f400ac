//! Read-only JSON queries with a JSONPath subset.
//!
//! The [`selector`] module holds the public operations; [`jsonpath`] holds the
//! selector and filter parsers and the evaluator they feed.

pub mod config;
pub mod file;
pub mod jsonpath;
pub mod selector;

pub use jsonpath::SelectorError;
pub use selector::{JsonSelect, JsonSelector};
