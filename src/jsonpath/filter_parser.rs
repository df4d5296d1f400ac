//! Parser for the boolean expressions inside `[?( ... )]`.
//!
//! Precedence from loosest to tightest:
//!
//! ```text
//! or         := and ( '||' and )*
//! and        := comparison ( '&&' comparison )*
//! comparison := '(' or ')' | isOneOf | primary ( op primary )?
//! isOneOf    := 'isOneOf' '(' path ',' string ( ',' string )+ ')'
//! primary    := string | number | path
//! path       := '@' ( '.' identifier )+
//! ```
//!
//! Whitespace between tokens is ignored. Any failure, including trailing input,
//! rejects the whole expression.

use super::ast::{FilterNode, FilterPath, LogicalOp};
use super::decimal::ExactDecimal;
use super::cursor::Cursor;
use super::error::SelectorError;
use super::parser::is_identifier_char;

const IS_ONE_OF: &str = "isOneOf";

/// Recursive-descent parser for filter expressions.
pub struct FilterParser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> FilterParser<'a> {
    pub fn new(expression: &'a str) -> Self {
        Self {
            cursor: Cursor::new(expression),
        }
    }

    /// Parses a complete filter expression.
    pub fn parse(expression: &str) -> Result<FilterNode, SelectorError> {
        if expression.trim().is_empty() {
            return Err(SelectorError::filter("Filter expression is empty"));
        }

        let mut parser = FilterParser::new(expression);
        let node = parser.parse_or()?;
        parser.cursor.skip_whitespace();
        if !parser.cursor.is_eof() {
            return Err(parser.cursor.unexpected("end of filter expression"));
        }
        Ok(node)
    }

    fn parse_or(&mut self) -> Result<FilterNode, SelectorError> {
        let mut left = self.parse_and()?;
        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.eat("||") {
                return Ok(left);
            }
            let right = self.parse_and()?;
            left = FilterNode::logical(left, LogicalOp::Or, right);
        }
    }

    fn parse_and(&mut self) -> Result<FilterNode, SelectorError> {
        let mut left = self.parse_comparison()?;
        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.eat("&&") {
                return Ok(left);
            }
            let right = self.parse_comparison()?;
            left = FilterNode::logical(left, LogicalOp::And, right);
        }
    }

    fn parse_comparison(&mut self) -> Result<FilterNode, SelectorError> {
        self.cursor.skip_whitespace();

        if self.cursor.eat("(") {
            let inner = self.parse_or()?;
            self.cursor.skip_whitespace();
            self.cursor.expect(')')?;
            return Ok(inner);
        }

        if self.at_is_one_of() {
            return self.parse_is_one_of();
        }

        let left = self.parse_primary()?;
        self.cursor.skip_whitespace();
        match self.cursor.comparison_op() {
            Some(op) => {
                let right = self.parse_primary()?;
                Ok(FilterNode::comparison(left, op, right))
            }
            None => Ok(left),
        }
    }

    /// The keyword matches case-insensitively and must be followed by `(` or whitespace.
    fn at_is_one_of(&self) -> bool {
        let rest = self.cursor.rest();
        let keyword = rest.get(..IS_ONE_OF.len());
        let follow = rest.get(IS_ONE_OF.len()..).and_then(|s| s.chars().next());
        matches!(keyword, Some(k) if k.eq_ignore_ascii_case(IS_ONE_OF))
            && matches!(follow, Some(ch) if ch == '(' || ch.is_whitespace())
    }

    fn parse_is_one_of(&mut self) -> Result<FilterNode, SelectorError> {
        let keyword = &self.cursor.rest()[..IS_ONE_OF.len()];
        self.cursor.eat(keyword);
        self.cursor.skip_whitespace();
        self.cursor.expect('(')?;

        let path = match self.parse_primary()? {
            FilterNode::Path(path) => path,
            _ => {
                return Err(SelectorError::filter(
                    "isOneOf expects a path as its first argument",
                ))
            }
        };
        self.cursor.skip_whitespace();
        self.cursor.expect(',')?;

        let mut values = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek() != Some('\'') {
                return Err(self.cursor.unexpected("string literal"));
            }
            values.push(self.cursor.quoted_string()?);
            self.cursor.skip_whitespace();
            if !self.cursor.eat(",") {
                break;
            }
        }
        self.cursor.expect(')')?;

        if values.len() < 2 {
            return Err(SelectorError::filter(format!(
                "isOneOf needs at least 2 values, found {}",
                values.len()
            )));
        }
        Ok(FilterNode::IsOneOf { path, values })
    }

    fn parse_primary(&mut self) -> Result<FilterNode, SelectorError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some('\'') => Ok(FilterNode::StringLiteral(self.cursor.quoted_string()?)),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => {
                let text = self.cursor.number_text()?;
                if ExactDecimal::parse(text).is_none() {
                    return Err(SelectorError::filter(format!("Invalid number: {}", text)));
                }
                Ok(FilterNode::NumericLiteral(text.to_string()))
            }
            Some('@') => self.parse_path().map(FilterNode::Path),
            _ => Err(self.cursor.unexpected("string, number or '@' path")),
        }
    }

    fn parse_path(&mut self) -> Result<FilterPath, SelectorError> {
        self.cursor.expect('@')?;
        self.cursor.expect('.')?;

        let mut segments = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            let name = self.cursor.take_while(is_identifier_char);
            if name.is_empty() {
                return Err(self.cursor.unexpected("identifier"));
            }
            segments.push(name.to_string());
            if !self.cursor.eat(".") {
                return Ok(FilterPath::new(segments));
            }
        }
    }
}
