//! Parse errors for selectors and filter expressions.
//!
//! These never reach callers of the query operations, which turn every error
//! into "no match". They are logged at debug level and surface in tests.

use std::fmt;

/// Why a selector or filter expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A character that does not fit the grammar at byte offset `position`.
    UnexpectedToken {
        position: usize,
        found: String,
        expected: String,
    },
    /// The text stopped in the middle of a segment, literal or group.
    UnexpectedEnd { expected: String },
    /// A selector that is structurally wrong, such as an empty name or bad index.
    InvalidSyntax { message: String },
    /// A `[?( ... )]` body that cannot be evaluated.
    InvalidFilter { message: String },
}

impl SelectorError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        SelectorError::InvalidSyntax {
            message: message.into(),
        }
    }

    pub(crate) fn filter(message: impl Into<String>) -> Self {
        SelectorError::InvalidFilter {
            message: message.into(),
        }
    }

    /// Byte offset of the offending character, when one is known.
    pub fn position(&self) -> Option<usize> {
        match self {
            SelectorError::UnexpectedToken { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::UnexpectedToken {
                position,
                found,
                expected,
            } => write!(
                f,
                "expected {} at byte {}, found '{}'",
                expected, position, found
            ),
            SelectorError::UnexpectedEnd { expected } => {
                write!(f, "selector ends early, expected {}", expected)
            }
            SelectorError::InvalidSyntax { message } => write!(f, "bad selector: {}", message),
            SelectorError::InvalidFilter { message } => write!(f, "bad filter: {}", message),
        }
    }
}

impl std::error::Error for SelectorError {}
