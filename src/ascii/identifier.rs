use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::region::Region;
use crate::result::ParseResult;

pub fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

pub fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Parser for ASCII identifiers: `[A-Za-z_][A-Za-z0-9_]*`
///
/// Returns the matched region rather than a string; materialize it with
/// [`Cursor::slice`] or wrap the parser in [`as_string`](crate::convert::as_string).
#[derive(Debug, Clone, Copy, Default)]
pub struct Identifier;

/// Convenience function to create an Identifier parser
pub fn identifier() -> Identifier {
    Identifier
}

impl Parser for Identifier {
    type Output = Region;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<Region> {
        if !cursor.peek().is_some_and(is_ident_start) {
            return Ok(None);
        }

        let start = cursor.position();
        let length = cursor
            .remaining()
            .iter()
            .take_while(|&&b| is_ident_continue(b))
            .count();
        cursor.advance(length);
        Ok(Some(ParseResult::new(
            start,
            cursor.position(),
            Region::new(start, length),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        let mut cursor = Cursor::new("foo_bar1 = 2");
        let mut ctx = ParseContext::default();

        let result = identifier().parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(cursor.slice(result.value).unwrap(), "foo_bar1");
        assert_eq!(cursor.peek(), Some(b' '));
    }

    #[test]
    fn test_identifier_leading_underscore() {
        let mut cursor = Cursor::new("_x");
        let mut ctx = ParseContext::default();

        let result = identifier().parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.value, Region::new(0, 2));
    }

    #[test]
    fn test_identifier_cannot_start_with_digit() {
        let mut cursor = Cursor::new("1abc");
        let mut ctx = ParseContext::default();

        assert!(identifier().parse(&mut cursor, &mut ctx).unwrap().is_none());
        assert_eq!(cursor.position(), 0);
    }
}
