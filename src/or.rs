use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use std::marker::PhantomData;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Ordered choice: the second parser runs only when the first fails, from
/// the same start position. A fatal error from the first parser is not a
/// failure and is passed straight through.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<O> {
        let state = cursor.capture();
        if let Some(result) = self.parser1.parse(cursor, ctx)? {
            return Ok(Some(result));
        }
        cursor.rollback(state);
        self.parser2.parse(cursor, ctx)
    }
}

/// Ordered choice over any number of alternatives of one type
#[derive(Debug, Clone)]
pub struct Choice<P> {
    alternatives: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(alternatives: Vec<P>) -> Self {
        Choice { alternatives }
    }
}

impl<P> Parser for Choice<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let state = cursor.capture();
        for alternative in &self.alternatives {
            if let Some(result) = alternative.parse(cursor, ctx)? {
                return Ok(Some(result));
            }
            cursor.rollback(state);
        }
        Ok(None)
    }
}

/// Value of a choice between two differently typed parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Convert whichever side is present into a common type
    pub fn into_inner<T>(self) -> T
    where
        L: Into<T>,
        R: Into<T>,
    {
        match self {
            Either::Left(left) => left.into(),
            Either::Right(right) => right.into(),
        }
    }
}

/// Ordered choice between two differently typed parsers, tagging the winner
#[derive(Debug, Clone)]
pub struct OrEither<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Parser for OrEither<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = Either<P1::Output, P2::Output>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let state = cursor.capture();
        if let Some(result) = self.parser1.parse(cursor, ctx)? {
            return Ok(Some(result.map(Either::Left)));
        }
        cursor.rollback(state);
        Ok(self
            .parser2
            .parse(cursor, ctx)?
            .map(|result| result.map(Either::Right)))
    }
}

/// Ordered choice between two parsers whose values both convert into `T`
pub struct OrInto<P1, P2, T> {
    inner: OrEither<P1, P2>,
    _phantom: PhantomData<fn() -> T>,
}

impl<P1: Clone, P2: Clone, T> Clone for OrInto<P1, P2, T> {
    fn clone(&self) -> Self {
        OrInto {
            inner: self.inner.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, T> Parser for OrInto<P1, P2, T>
where
    P1: Parser,
    P2: Parser,
    P1::Output: Into<T>,
    P2::Output: Into<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<T> {
        Ok(self
            .inner
            .parse(cursor, ctx)?
            .map(|result| result.map(Either::into_inner)))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Ordered choice with a differently typed alternative
    fn or_either<P>(self, other: P) -> OrEither<Self, P>
    where
        P: Parser,
    {
        OrEither {
            parser1: self,
            parser2: other,
        }
    }

    /// Ordered choice converting both sides into `T`
    fn or_into<T, P>(self, other: P) -> OrInto<Self, P, T>
    where
        P: Parser,
        Self::Output: Into<T>,
        P::Output: Into<T>,
    {
        OrInto {
            inner: self.or_either(other),
            _phantom: PhantomData,
        }
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}

/// Convenience function to create a Choice parser
pub fn choice<P>(alternatives: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser,
{
    Choice::new(alternatives.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::byte::is_byte;
    use crate::ascii::number::{number, Number};
    use crate::ascii::text::text;
    use crate::commit::expect;
    use crate::map::MapExt;
    use crate::parser::{ParserRef, SharedExt};

    fn run<P: Parser>(parser: &P, input: &str) -> (Option<P::Output>, usize) {
        let mut cursor = Cursor::new(input);
        let mut ctx = ParseContext::default();
        let result = parser.parse(&mut cursor, &mut ctx).unwrap();
        (result.map(|r| r.value), cursor.position())
    }

    #[test]
    fn test_or_first_succeeds() {
        assert_eq!(run(&or(is_byte(b'a'), is_byte(b'b')), "abc"), (Some(b'a'), 1));
    }

    #[test]
    fn test_or_second_succeeds() {
        assert_eq!(run(&is_byte(b'a').or(is_byte(b'b')), "bc"), (Some(b'b'), 1));
    }

    #[test]
    fn test_or_both_fail() {
        assert_eq!(run(&is_byte(b'a').or(is_byte(b'b')), "c"), (None, 0));
    }

    #[test]
    fn test_or_first_success_wins_over_longer_match() {
        let parser = text("ab").or(text("abc"));
        assert_eq!(run(&parser, "abc"), (Some("ab".into()), 2));
    }

    #[test]
    fn test_or_second_starts_at_same_position() {
        let first = is_byte(b'a').and(is_byte(b'x')).map(|_| 1);
        let second = is_byte(b'a').and(is_byte(b'b')).map(|_| 2);
        assert_eq!(run(&first.or(second), "ab"), (Some(2), 2));
    }

    #[test]
    fn test_or_does_not_catch_fatal() {
        let parser = expect(text("a"), "need a").or(text("b"));
        let mut cursor = Cursor::new("b");
        let mut ctx = ParseContext::default();
        assert!(parser.parse(&mut cursor, &mut ctx).is_err());
    }

    #[test]
    fn test_choice() {
        let parser = choice([text("let"), text("fn"), text("if")]);
        assert_eq!(run(&parser, "fn x"), (Some("fn".into()), 2));
        assert_eq!(run(&parser, "else"), (None, 0));
    }

    #[test]
    fn test_choice_of_erased_parsers() {
        let alternatives: Vec<ParserRef<i64>> = vec![
            text("one").to(1).shared(),
            text("two").to(2).shared(),
        ];
        assert_eq!(run(&choice(alternatives), "two"), (Some(2), 3));
    }

    #[test]
    fn test_or_either() {
        let parser = text("nil").or_either(number());
        assert_eq!(run(&parser, "nil").0, Some(Either::Left("nil".into())));
        assert_eq!(run(&parser, "4").0, Some(Either::Right(Number::I64(4))));
    }

    #[test]
    fn test_or_into_common_type() {
        let parser = is_byte(b'x').or_into::<u32, _>(text("yy").to('y'));
        assert_eq!(run(&parser, "x").0, Some(u32::from(b'x')));
        assert_eq!(run(&parser, "yy").0, Some(u32::from('y')));
    }
}
