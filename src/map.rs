use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::region::{Region, Unit};

/// Parser combinator that transforms the output of a parser using a mapping function
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<U> {
        Ok(self
            .parser
            .parse(cursor, ctx)?
            .map(|result| result.map(&self.mapper)))
    }
}

/// Like [`Map`], but the function also sees the matched region and the cursor
///
/// The cursor is positioned after the match, so `cursor.slice(region)` gives
/// the matched text.
#[derive(Clone)]
pub struct MapWith<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F, U> Parser for MapWith<P, F>
where
    P: Parser,
    F: Fn(P::Output, Region, &Cursor<'_>) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<U> {
        let Some(result) = self.parser.parse(cursor, ctx)? else {
            return Ok(None);
        };
        let region = result.region();
        Ok(Some(result.map(|value| (self.mapper)(value, region, &*cursor))))
    }
}

/// Replaces a successful value with the result of calling a function
#[derive(Clone)]
pub struct Supply<P, F> {
    parser: P,
    supplier: F,
}

impl<P, F, U> Parser for Supply<P, F>
where
    P: Parser,
    F: Fn() -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<U> {
        Ok(self
            .parser
            .parse(cursor, ctx)?
            .map(|result| result.with_value((self.supplier)())))
    }
}

/// Replaces a successful value with a clone of a constant
#[derive(Debug, Clone)]
pub struct To<P, U> {
    parser: P,
    value: U,
}

impl<P, U> Parser for To<P, U>
where
    P: Parser,
    U: Clone,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<U> {
        Ok(self
            .parser
            .parse(cursor, ctx)?
            .map(|result| result.with_value(self.value.clone())))
    }
}

/// Drops a successful value, keeping only the span
#[derive(Debug, Clone)]
pub struct Discard<P> {
    parser: P,
}

impl<P> Parser for Discard<P>
where
    P: Parser,
{
    type Output = Unit;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<Unit> {
        Ok(self
            .parser
            .parse(cursor, ctx)?
            .map(|result| result.with_value(Unit)))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() and related method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn map_with<F, U>(self, mapper: F) -> MapWith<Self, F>
    where
        F: Fn(Self::Output, Region, &Cursor<'_>) -> U,
    {
        MapWith {
            parser: self,
            mapper,
        }
    }

    fn supply<F, U>(self, supplier: F) -> Supply<Self, F>
    where
        F: Fn() -> U,
    {
        Supply {
            parser: self,
            supplier,
        }
    }

    fn to<U: Clone>(self, value: U) -> To<Self, U> {
        To {
            parser: self,
            value,
        }
    }

    fn discard(self) -> Discard<Self> {
        Discard { parser: self }
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
