use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;
use std::marker::PhantomData;

/// Zero or one occurrence of a parser
///
/// Always succeeds. A miss yields `None` and consumes nothing.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let position = cursor.position();
        Ok(Some(match self.parser.parse(cursor, ctx)? {
            Some(result) => result.map(Some),
            None => ParseResult::new(position, position, None),
        }))
    }
}

/// Zero or one occurrence of a parser, with a fallback value on a miss
#[derive(Debug, Clone)]
pub struct OrDefault<P, T> {
    parser: P,
    fallback: T,
}

impl<P, T> Parser for OrDefault<P, T>
where
    P: Parser<Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<T> {
        let position = cursor.position();
        Ok(Some(match self.parser.parse(cursor, ctx)? {
            Some(result) => result,
            None => ParseResult::new(position, position, self.fallback.clone()),
        }))
    }
}

/// Parser that always succeeds without consuming input and returns a constant
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T: Clone> Parser for Succeed<T> {
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<T> {
        let position = cursor.position();
        Ok(Some(ParseResult::new(position, position, self.value.clone())))
    }
}

/// Parser that never matches
#[derive(Debug)]
pub struct Fail<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        fail()
    }
}

impl<T> Parser for Fail<T> {
    type Output = T;

    fn parse(&self, _cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<T> {
        Ok(None)
    }
}

/// Parser that always succeeds without consuming input and returns the default value of T
#[derive(Debug)]
pub struct DefaultParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for DefaultParser<T> {
    fn clone(&self) -> Self {
        DefaultParser {
            _phantom: PhantomData,
        }
    }
}

impl<T> Parser for DefaultParser<T>
where
    T: Default,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<T> {
        let position = cursor.position();
        Ok(Some(ParseResult::new(position, position, T::default())))
    }
}

pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}

pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed { value }
}

pub fn fail<T>() -> Fail<T> {
    Fail {
        _phantom: PhantomData,
    }
}

/// Convenience function to create a default parser
pub fn default<T>() -> DefaultParser<T>
where
    T: Default,
{
    DefaultParser {
        _phantom: PhantomData,
    }
}

/// Extension trait to add .optional() and .or_default() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Fall back to `fallback` when the parser misses
    fn or_default(self, fallback: Self::Output) -> OrDefault<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        OrDefault {
            parser: self,
            fallback,
        }
    }
}

impl<P> OptionalExt for P where P: Parser {}
