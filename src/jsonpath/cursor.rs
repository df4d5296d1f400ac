//! Character cursor shared by the selector and filter parsers.

use super::ast::ComparisonOp;
use super::error::SelectorError;

/// A read position over borrowed input.
///
/// Positions are byte offsets and always sit on a character boundary.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Returns the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the next character and advances position.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Checks if we've reached the end of input.
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Skips whitespace characters.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    /// Consumes `token` if the input continues with it.
    pub fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.position += token.len();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|ch: char| !pred(ch)).unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    /// Expects a specific character and advances, or returns an error.
    pub fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
        let pos = self.position;
        match self.next_char() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(SelectorError::UnexpectedToken {
                position: pos,
                found: ch.to_string(),
                expected: format!("'{}'", expected),
            }),
            None => Err(SelectorError::UnexpectedEnd {
                expected: format!("'{}'", expected),
            }),
        }
    }

    /// Error for whatever sits at the current position.
    pub fn unexpected(&self, expected: &str) -> SelectorError {
        match self.peek() {
            Some(ch) => SelectorError::UnexpectedToken {
                position: self.position,
                found: ch.to_string(),
                expected: expected.to_string(),
            },
            None => SelectorError::UnexpectedEnd {
                expected: expected.to_string(),
            },
        }
    }

    /// Consumes a comparison operator, longest match first.
    pub fn comparison_op(&mut self) -> Option<ComparisonOp> {
        let op = ComparisonOp::ALL
            .into_iter()
            .find(|op| self.rest().starts_with(op.symbol()))?;
        self.position += op.symbol().len();
        Some(op)
    }

    /// Parses a single-quoted string literal, unescaping `\'` and `\\`.
    ///
    /// Any other backslash is kept as written.
    pub fn quoted_string(&mut self) -> Result<String, SelectorError> {
        self.expect('\'')?;
        let mut value = String::new();
        loop {
            match self.next_char() {
                Some('\'') => return Ok(value),
                Some('\\') => match self.next_char() {
                    Some(ch @ ('\'' | '\\')) => value.push(ch),
                    Some(ch) => {
                        value.push('\\');
                        value.push(ch);
                    }
                    None => break,
                },
                Some(ch) => value.push(ch),
                None => break,
            }
        }
        Err(SelectorError::UnexpectedEnd {
            expected: "closing quote '''".to_string(),
        })
    }

    /// Lexes a signed decimal literal: optional `-`, a digit, then digits and dots.
    ///
    /// The text is returned as written; callers validate it as a decimal.
    pub fn number_text(&mut self) -> Result<&'a str, SelectorError> {
        let start = self.position;
        let saved = *self;
        self.eat("-");
        if !matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            let err = self.unexpected("digit");
            *self = saved;
            return Err(err);
        }
        self.take_while(|ch| ch.is_ascii_digit() || ch == '.');
        Ok(&self.input[start..self.position])
    }
}
