use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::region::Region;
use crate::result::ParseResult;

/// Parser that consumes bytes until a terminator would match
///
/// Returns the region before the terminator; the terminator itself is not
/// consumed. Reaching end of input without seeing the terminator is a
/// failure unless [`TakeUntilParser::or_eof`] was requested.
#[derive(Debug, Clone)]
pub struct TakeUntilParser<P> {
    terminator: P,
    allow_eof: bool,
}

impl<P> TakeUntilParser<P> {
    pub fn new(terminator: P) -> Self {
        Self {
            terminator,
            allow_eof: false,
        }
    }

    /// Also stop successfully at end of input
    pub fn or_eof(mut self) -> Self {
        self.allow_eof = true;
        self
    }
}

impl<P> Parser for TakeUntilParser<P>
where
    P: Parser,
{
    type Output = Region;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<Region> {
        let start = cursor.capture();

        loop {
            let here = cursor.capture();
            if self.terminator.parse(cursor, ctx)?.is_some() {
                cursor.rollback(here);
                break;
            }

            if cursor.eof() {
                if self.allow_eof {
                    break;
                }
                cursor.rollback(start);
                return Ok(None);
            }
            cursor.advance(1);
        }

        let region = Region::between(start.position(), cursor.position());
        Ok(Some(ParseResult::new(
            start.position(),
            cursor.position(),
            region,
        )))
    }
}

/// Convenience function to create a TakeUntilParser
pub fn take_until<P>(terminator: P) -> TakeUntilParser<P>
where
    P: Parser,
{
    TakeUntilParser::new(terminator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::byte::is_byte;
    use crate::ascii::text::text;

    #[test]
    fn test_take_until_stops_before_terminator() {
        let mut cursor = Cursor::new("hello, world");
        let mut ctx = ParseContext::default();

        let result = take_until(is_byte(b',')).parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(cursor.slice(result.value).unwrap(), "hello");
        assert_eq!(cursor.peek(), Some(b','));
    }

    #[test]
    fn test_take_until_multi_byte_terminator() {
        let mut cursor = Cursor::new("a * b */ c");
        let mut ctx = ParseContext::default();

        let result = take_until(text("*/")).parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(cursor.slice(result.value).unwrap(), "a * b ");
    }

    #[test]
    fn test_take_until_immediate_terminator() {
        let mut cursor = Cursor::new(";rest");
        let mut ctx = ParseContext::default();

        let result = take_until(is_byte(b';')).parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert!(result.value.is_empty());
    }

    #[test]
    fn test_take_until_missing_terminator_fails() {
        let mut cursor = Cursor::new("no end here");
        let mut ctx = ParseContext::default();

        assert!(take_until(text("*/")).parse(&mut cursor, &mut ctx).unwrap().is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_take_until_or_eof() {
        let mut cursor = Cursor::new("// to the end");
        let mut ctx = ParseContext::default();

        let result = take_until(is_byte(b'\n'))
            .or_eof()
            .parse(&mut cursor, &mut ctx)
            .unwrap()
            .unwrap();
        assert_eq!(result.end, 13);
        assert!(cursor.eof());
    }
}
