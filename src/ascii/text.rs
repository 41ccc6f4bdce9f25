use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that matches an exact piece of text
///
/// On a mismatch the cursor is rolled back, but the furthest offset still
/// records how much of the text did match, so `text("hello")` on `"help"`
/// reports the error at byte 3.
#[derive(Debug, Clone)]
pub struct Text {
    expected: Cow<'static, str>,
}

impl Text {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Text {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

/// Convenience function to create a Text parser
pub fn text(expected: impl Into<Cow<'static, str>>) -> Text {
    Text::new(expected)
}

/// Length of the common prefix of `expected` and the cursor's remaining input
pub(crate) fn common_prefix(cursor: &Cursor<'_>, expected: &[u8]) -> usize {
    cursor
        .remaining()
        .iter()
        .zip(expected)
        .take_while(|(a, b)| a == b)
        .count()
}

impl Parser for Text {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        _ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let expected = self.expected.as_bytes();
        let start = cursor.capture();
        let matched = common_prefix(cursor, expected);
        cursor.advance(matched);

        if matched < expected.len() {
            cursor.rollback(start);
            return Ok(None);
        }

        Ok(Some(ParseResult::new(
            start.position(),
            cursor.position(),
            self.expected.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_match() {
        let mut cursor = Cursor::new("hello world");
        let mut ctx = ParseContext::default();

        let result = text("hello").parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.value, "hello");
        assert_eq!((result.start, result.end), (0, 5));
        assert_eq!(cursor.peek(), Some(b' '));
    }

    #[test]
    fn test_text_partial_match_rolls_back() {
        let mut cursor = Cursor::new("help");
        let mut ctx = ParseContext::default();

        assert!(text("hello").parse(&mut cursor, &mut ctx).unwrap().is_none());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.furthest(), 3);
    }

    #[test]
    fn test_text_too_short_input() {
        let mut cursor = Cursor::new("he");
        let mut ctx = ParseContext::default();

        assert!(text("hello").parse(&mut cursor, &mut ctx).unwrap().is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_empty_text_always_matches() {
        let mut cursor = Cursor::new("abc");
        let mut ctx = ParseContext::default();

        let result = text("").parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.start, result.end);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_text_owned_string() {
        let owned = String::from("let");
        let mut cursor = Cursor::new("let x");
        let mut ctx = ParseContext::default();

        let result = text(owned).parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.value, "let");
    }
}
