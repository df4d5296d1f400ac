//! Selector string parser.

use super::ast::{ComparisonOp, PathSegment, Selector};
use super::decimal::ExactDecimal;
use super::cursor::Cursor;
use super::error::SelectorError;
use std::borrow::Cow;

/// Parser for selector strings.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over an already rooted selector (`$...`).
    pub fn new(selector: &'a str) -> Self {
        Self {
            cursor: Cursor::new(selector),
        }
    }

    /// Parses the selector string into a Selector.
    ///
    /// Selectors without a leading `$` are rooted automatically: `.id` and `id`
    /// both mean `$.id`.
    pub fn parse(selector: &str) -> Result<Selector, SelectorError> {
        let normalized = normalize(selector)?;
        Parser::new(&normalized).parse_selector()
    }

    fn parse_selector(&mut self) -> Result<Selector, SelectorError> {
        self.cursor.expect('$')?;

        let mut segments = Vec::new();
        while let Some(ch) = self.cursor.peek() {
            match ch {
                '.' => {
                    self.cursor.next_char();
                    segments.push(PathSegment::Child(self.parse_identifier()?));
                }
                '[' => segments.push(self.parse_bracket_expression()?),
                _ if !segments.is_empty() => {
                    segments.push(self.parse_value_predicate()?);
                    break;
                }
                _ => return Err(self.cursor.unexpected("'.' or '['")),
            }
        }

        Ok(Selector::new(segments))
    }

    /// Parses an identifier (property name).
    fn parse_identifier(&mut self) -> Result<String, SelectorError> {
        let name = self.cursor.take_while(is_identifier_char);
        if name.is_empty() {
            Err(SelectorError::syntax("Expected identifier"))
        } else {
            Ok(name.to_string())
        }
    }

    /// Parses bracket expression: [index] or [?(filter)]
    fn parse_bracket_expression(&mut self) -> Result<PathSegment, SelectorError> {
        self.cursor.expect('[')?;

        let segment = if self.cursor.eat("?") {
            self.cursor.expect('(')?;
            PathSegment::Filter(self.parse_filter_body()?)
        } else {
            PathSegment::Index(self.parse_index()?)
        };

        self.cursor.expect(']')?;
        Ok(segment)
    }

    /// Reads up to the parenthesis closing the filter and returns the trimmed text inside.
    fn parse_filter_body(&mut self) -> Result<String, SelectorError> {
        let body = self.cursor.rest();
        let start = self.cursor.position();
        let mut depth = 1usize;

        while depth > 0 {
            match self.cursor.next_char() {
                Some('(') => depth += 1,
                Some(')') => depth -= 1,
                Some(_) => {}
                None => {
                    return Err(SelectorError::UnexpectedEnd {
                        expected: "')' closing filter".to_string(),
                    })
                }
            }
        }

        let len = self.cursor.position() - start - 1;
        Ok(body[..len].trim().to_string())
    }

    fn parse_index(&mut self) -> Result<isize, SelectorError> {
        let start = self.cursor.rest();
        let negative = self.cursor.eat("-");
        let digits = self.cursor.take_while(|ch| ch.is_ascii_digit());
        if digits.is_empty() {
            return Err(self.cursor.unexpected("array index"));
        }

        let text = &start[..digits.len() + usize::from(negative)];
        text.parse::<isize>()
            .map_err(|_| SelectorError::syntax(format!("Invalid index: {}", text)))
    }

    /// Parses a trailing `<op> <literal>` that must end the selector.
    fn parse_value_predicate(&mut self) -> Result<PathSegment, SelectorError> {
        self.cursor.skip_whitespace();
        let op = self
            .cursor
            .comparison_op()
            .ok_or_else(|| self.cursor.unexpected("comparison operator"))?;
        self.cursor.skip_whitespace();

        let literal = self.parse_literal(op)?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(self.cursor.unexpected("end of selector"));
        }
        Ok(PathSegment::ValuePredicate(op, literal))
    }

    fn parse_literal(&mut self, op: ComparisonOp) -> Result<String, SelectorError> {
        if self.cursor.peek() == Some('\'') {
            return self.cursor.quoted_string();
        }

        let text = self.cursor.number_text()?;
        if ExactDecimal::parse(text).is_none() {
            return Err(SelectorError::syntax(format!(
                "Invalid number after '{}': {}",
                op, text
            )));
        }
        Ok(text.to_string())
    }
}

/// Identifier characters for `.name` segments and filter paths.
pub(crate) fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn normalize(selector: &str) -> Result<Cow<'_, str>, SelectorError> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err(SelectorError::syntax("Selector is empty"));
    }

    Ok(if trimmed.starts_with('$') {
        Cow::Borrowed(trimmed)
    } else if trimmed.starts_with('.') {
        Cow::Owned(format!("${}", trimmed))
    } else {
        Cow::Owned(format!("$.{}", trimmed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(name: &str) -> PathSegment {
        PathSegment::Child(name.to_string())
    }

    #[test]
    fn test_parse_root() {
        let path = Parser::parse("$").unwrap();
        assert!(path.segments.is_empty());
    }

    #[test]
    fn test_parse_child() {
        let path = Parser::parse("$.store").unwrap();
        assert_eq!(path.segments, vec![child("store")]);
    }

    #[test]
    fn test_parse_nested_child() {
        let path = Parser::parse("$.store.book_2").unwrap();
        assert_eq!(path.segments, vec![child("store"), child("book_2")]);
    }

    #[test]
    fn test_parse_auto_rooted() {
        assert_eq!(Parser::parse("id").unwrap().segments, vec![child("id")]);
        assert_eq!(Parser::parse(".id").unwrap().segments, vec![child("id")]);
        assert_eq!(Parser::parse("  $.id  ").unwrap().segments, vec![child("id")]);
    }

    #[test]
    fn test_parse_array_index() {
        let path = Parser::parse("$.items[0]").unwrap();
        assert_eq!(path.segments, vec![child("items"), PathSegment::Index(0)]);
    }

    #[test]
    fn test_parse_negative_index() {
        let path = Parser::parse("$.items[-1]").unwrap();
        assert_eq!(path.segments[1], PathSegment::Index(-1));
    }

    #[test]
    fn test_parse_filter() {
        let path = Parser::parse("$.items[?( @.kind=='x' && (@.a=='1' || @.b=='2') )].id").unwrap();
        assert_eq!(
            path.segments,
            vec![
                child("items"),
                PathSegment::Filter("@.kind=='x' && (@.a=='1' || @.b=='2')".to_string()),
                child("id"),
            ]
        );
    }

    #[test]
    fn test_parse_filter_keeps_text_verbatim() {
        // Filter bodies are stored unparsed, so broken bodies still parse here.
        let path = Parser::parse("$.items[?(isOneOf(@.code,'1'))]").unwrap();
        assert_eq!(
            path.segments[1],
            PathSegment::Filter("isOneOf(@.code,'1')".to_string())
        );
    }

    #[test]
    fn test_parse_value_predicate() {
        let path = Parser::parse("$.name == 'alpha'").unwrap();
        assert_eq!(
            path.segments,
            vec![
                child("name"),
                PathSegment::ValuePredicate(ComparisonOp::Eq, "alpha".to_string()),
            ]
        );

        let path = Parser::parse("$.items[-1].code>=-1.5").unwrap();
        assert_eq!(
            path.segments[3],
            PathSegment::ValuePredicate(ComparisonOp::Ge, "-1.5".to_string())
        );
    }

    #[test]
    fn test_parse_value_predicate_escaped_literal() {
        let path = Parser::parse(r"$.name != 'it\'s'").unwrap();
        assert_eq!(
            path.segments[1],
            PathSegment::ValuePredicate(ComparisonOp::Ne, "it's".to_string())
        );
    }

    #[test]
    fn test_parse_value_predicate_must_be_last() {
        assert!(Parser::parse("$.name == 'alpha'.id").is_err());
        assert!(Parser::parse("$.id == 10 10").is_err());
        assert!(Parser::parse("$.id == 1.2.3").is_err());
        assert!(Parser::parse("$.id = 10").is_err());
    }

    #[test]
    fn test_parse_value_predicate_needs_a_segment() {
        assert!(Parser::parse("$ == 1").is_err());
    }

    #[test]
    fn test_parse_empty_fails() {
        assert!(Parser::parse("").is_err());
        assert!(Parser::parse("   ").is_err());
    }

    #[test]
    fn test_parse_invalid_brackets() {
        assert!(Parser::parse("$.items[]").is_err());
        assert!(Parser::parse("$.items[abc]").is_err());
        assert!(Parser::parse("$.items[-]").is_err());
        assert!(Parser::parse("$.items[0").is_err());
        assert!(Parser::parse("$.id[?invalid").is_err());
        assert!(Parser::parse("$.items[?(@.a=='x']").is_err());
        assert!(Parser::parse("$.items[?(@.a=='x') ]").is_err());
    }

    #[test]
    fn test_parse_empty_identifier_fails() {
        assert!(Parser::parse("$.").is_err());
        assert!(Parser::parse("$..price").is_err());
        assert!(Parser::parse("$.a.*").is_err());
    }
}
