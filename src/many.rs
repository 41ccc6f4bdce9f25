use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Greedily collect matches of `parser`, at most `max` of them
///
/// Stops at the first failure, and after a match that consumed nothing, so a
/// parser that can match the empty string does not loop forever. Each match
/// is committed as soon as it succeeds; there is no backtracking between
/// elements.
fn collect<P: Parser>(
    parser: &P,
    max: usize,
    cursor: &mut Cursor<'_>,
    ctx: &mut ParseContext,
) -> Result<Vec<P::Output>, crate::error::FatalError> {
    let mut results = Vec::new();
    while results.len() < max {
        let before = cursor.position();
        let Some(result) = parser.parse(cursor, ctx)? else {
            break;
        };
        results.push(result.value);
        if result.end == before {
            break;
        }
    }
    Ok(results)
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Always succeeds, possibly with an empty vector.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let start = cursor.position();
        let results = collect(&self.parser, usize::MAX, cursor, ctx)?;
        Ok(Some(ParseResult::new(start, cursor.position(), results)))
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
#[derive(Debug, Clone)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<P> Parser for Many1<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let start = cursor.position();
        let results = collect(&self.parser, usize::MAX, cursor, ctx)?;
        // Nothing was consumed if nothing matched
        if results.is_empty() {
            return Ok(None);
        }
        Ok(Some(ParseResult::new(start, cursor.position(), results)))
    }
}

/// Between `min` and `max` occurrences of a parser (both inclusive)
///
/// Takes as many as it can up to `max`. With fewer than `min` matches it
/// fails and rolls back all of them.
#[derive(Debug, Clone)]
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: usize,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, min: usize, max: usize) -> Self {
        debug_assert!(min <= max, "repeat bounds are inverted");
        Repeat { parser, min, max }
    }
}

impl<P> Parser for Repeat<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let state = cursor.capture();
        let results = collect(&self.parser, self.max, cursor, ctx)?;
        if results.len() < self.min {
            cursor.rollback(state);
            return Ok(None);
        }
        Ok(Some(ParseResult::new(
            state.position(),
            cursor.position(),
            results,
        )))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn some<P>(parser: P) -> Many1<P>
where
    P: Parser,
{
    Many1::new(parser)
}

/// Convenience function to create a Repeat parser
pub fn repeat<P>(parser: P, min: usize, max: usize) -> Repeat<P>
where
    P: Parser,
{
    Repeat::new(parser, min, max)
}

/// Extension trait to add repetition methods to parsers
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn some(self) -> Many1<Self> {
        Many1::new(self)
    }

    fn repeat(self, min: usize, max: usize) -> Repeat<Self> {
        Repeat::new(self, min, max)
    }
}

impl<P> ManyExt for P where P: Parser {}
