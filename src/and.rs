use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The sequence is atomic: if the second parser fails, the first parser's
/// consumption is rolled back too.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics. The nested tuple approach is general
/// and the destructuring pattern is explicit about the parsing order.
///
/// Example:
/// ```
/// use spancomb::and::AndExt;
/// use spancomb::ascii::{i64, is_byte, u64};
/// use spancomb::parser::Parser;
///
/// let ((int_part, _), frac_part) = i64()
///     .and(is_byte(b'.'))
///     .and(u64())
///     .try_parse("123.456")
///     .unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// ```
#[derive(Debug, Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = (P1::Output, P2::Output);

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let state = cursor.capture();
        let Some(first) = self.parser1.parse(cursor, ctx)? else {
            return Ok(None);
        };
        let Some(second) = self.parser2.parse(cursor, ctx)? else {
            cursor.rollback(state);
            return Ok(None);
        };
        Ok(Some(ParseResult::new(
            first.start,
            second.end,
            (first.value, second.value),
        )))
    }
}

/// Sequence of two parsers keeping only the second value
#[derive(Debug, Clone)]
pub struct Then<P1, P2> {
    inner: And<P1, P2>,
}

impl<P1, P2> Parser for Then<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        Ok(self
            .inner
            .parse(cursor, ctx)?
            .map(|result| result.map(|(_, second)| second)))
    }
}

/// Sequence of two parsers keeping only the first value
#[derive(Debug, Clone)]
pub struct Skip<P1, P2> {
    inner: And<P1, P2>,
}

impl<P1, P2> Parser for Skip<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = P1::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        Ok(self
            .inner
            .parse(cursor, ctx)?
            .map(|result| result.map(|(first, _)| first)))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and(), .then() and .skip() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser,
    {
        And::new(self, other)
    }

    /// Run `other` after `self`, keeping `other`'s value
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser,
    {
        Then {
            inner: And::new(self, other),
        }
    }

    /// Run `other` after `self`, keeping `self`'s value
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser,
    {
        Skip {
            inner: And::new(self, other),
        }
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::byte::is_byte;
    use crate::ascii::number::i64;

    fn run<P: Parser>(parser: &P, input: &str) -> (Option<P::Output>, usize) {
        let mut cursor = Cursor::new(input);
        let mut ctx = ParseContext::default();
        let result = parser.parse(&mut cursor, &mut ctx).unwrap();
        (result.map(|r| r.value), cursor.position())
    }

    #[test]
    fn test_and_both_succeed() {
        let parser = is_byte(b'A').and(is_byte(b'5'));
        assert_eq!(run(&parser, "A5xyz"), (Some((b'A', b'5')), 2));
    }

    #[test]
    fn test_and_first_fails() {
        let parser = is_byte(b'A').and(is_byte(b'x'));
        assert_eq!(run(&parser, "Bxyz"), (None, 0));
    }

    #[test]
    fn test_and_second_fails_rolls_back() {
        let parser = is_byte(b'A').and(is_byte(b'5'));
        assert_eq!(run(&parser, "Axyz"), (None, 0));
    }

    #[test]
    fn test_and_method_syntax() {
        let parser = i64().and(is_byte(b'.'));
        assert_eq!(run(&parser, "123."), (Some((123, b'.')), 4));
    }

    #[test]
    fn test_and_chain() {
        let parser = is_byte(b'A').and(is_byte(b'5')).and(is_byte(b'B'));
        assert_eq!(run(&parser, "A5B"), (Some(((b'A', b'5'), b'B')), 3));
    }

    #[test]
    fn test_and_chain_last_fails_rolls_back_everything() {
        let parser = is_byte(b'A').and(is_byte(b'5')).and(is_byte(b'B'));
        assert_eq!(run(&parser, "A5C"), (None, 0));
    }

    #[test]
    fn test_and_function_syntax() {
        let parser = and(is_byte(b'X'), is_byte(b'Y'));
        assert_eq!(run(&parser, "XY"), (Some((b'X', b'Y')), 2));
    }

    #[test]
    fn test_then_and_skip() {
        assert_eq!(run(&is_byte(b'-').then(i64()), "-5"), (Some(5), 2));
        assert_eq!(run(&i64().skip(is_byte(b';')), "7;"), (Some(7), 2));
        assert_eq!(run(&i64().skip(is_byte(b';')), "7,"), (None, 0));
    }

    #[test]
    fn test_and_result_span() {
        let mut cursor = Cursor::new("xAB");
        let mut ctx = ParseContext::default();
        cursor.advance(1);

        let result = is_byte(b'A')
            .and(is_byte(b'B'))
            .parse(&mut cursor, &mut ctx)
            .unwrap()
            .unwrap();
        assert_eq!((result.start, result.end), (1, 3));
    }
}
