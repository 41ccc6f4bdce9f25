use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::region::Region;

/// Runs a parser for its consumption only and returns the consumed region
///
/// The inner value is dropped; nothing is copied out of the input. The
/// region is also recorded as the cursor's raw match window.
#[derive(Debug, Clone)]
pub struct Capture<P> {
    parser: P,
}

impl<P> Capture<P> {
    pub fn new(parser: P) -> Self {
        Capture { parser }
    }
}

impl<P> Parser for Capture<P>
where
    P: Parser,
{
    type Output = Region;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<Region> {
        let Some(result) = self.parser.parse(cursor, ctx)? else {
            return Ok(None);
        };
        cursor.mark(result.start, result.end);
        let region = result.region();
        Ok(Some(result.with_value(region)))
    }
}

/// A parser combinator that pairs a successful value with its region
#[derive(Debug, Clone)]
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<P> Parser for Spanned<P>
where
    P: Parser,
{
    type Output = (P::Output, Region);

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        Ok(self.parser.parse(cursor, ctx)?.map(|result| {
            let region = result.region();
            result.map(|value| (value, region))
        }))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt: Parser + Sized {
    /// Wrap this parser to return its value together with its region
    fn with_position(self) -> Spanned<Self> {
        Spanned::new(self)
    }

    /// Wrap this parser to return only the region it consumed
    fn capture(self) -> Capture<Self> {
        Capture::new(self)
    }
}

impl<P> PositionExt for P where P: Parser {}

/// Convenience function to create a Spanned combinator
pub fn position<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}

/// Convenience function to create a Capture combinator
pub fn capture<P>(parser: P) -> Capture<P> {
    Capture::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::byte::is_byte;
    use crate::ascii::number::i64;
    use crate::ascii::text::text;

    #[test]
    fn test_position_single_byte() {
        let mut cursor = Cursor::new("hello");
        let mut ctx = ParseContext::default();

        let result = position(is_byte(b'h')).parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.value, (b'h', Region::new(0, 1)));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_position_consecutive() {
        let mut cursor = Cursor::new("abc");
        let mut ctx = ParseContext::default();

        for (index, byte) in [b'a', b'b', b'c'].into_iter().enumerate() {
            let result = is_byte(byte)
                .with_position()
                .parse(&mut cursor, &mut ctx)
                .unwrap()
                .unwrap();
            assert_eq!(result.value.1, Region::new(index, 1));
        }
    }

    #[test]
    fn test_position_with_multi_byte_parser() {
        let mut cursor = Cursor::new("hello world");
        let mut ctx = ParseContext::default();

        let result = text("hello").with_position().parse(&mut cursor, &mut ctx).unwrap().unwrap();
        let (matched, region) = result.value;
        assert_eq!(matched, "hello");
        assert_eq!(cursor.slice(region).unwrap(), "hello");
    }

    #[test]
    fn test_capture_returns_consumed_region() {
        let mut cursor = Cursor::new("-42 rest");
        let mut ctx = ParseContext::default();

        let result = i64().capture().parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.value, Region::new(0, 3));
        assert_eq!(cursor.raw(), Region::new(0, 3));
        assert_eq!(cursor.slice(result.value).unwrap(), "-42");
    }

    #[test]
    fn test_capture_failure_rolls_back() {
        let mut cursor = Cursor::new("ab!");
        let mut ctx = ParseContext::default();

        let parser = capture(is_byte(b'a').and(is_byte(b'b')).and(is_byte(b'c')));
        assert!(parser.parse(&mut cursor, &mut ctx).unwrap().is_none());
        assert_eq!(cursor.position(), 0);
    }
}
