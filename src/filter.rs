use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is an ordinary failure and the inner parser's
/// consumption is rolled back.
#[derive(Clone)]
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<P, F, T> Parser for FilterParser<P, F>
where
    P: Parser<Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<T> {
        let state = cursor.capture();
        match self.parser.parse(cursor, ctx)? {
            Some(result) if (self.predicate)(&result.value) => Ok(Some(result)),
            Some(_) => {
                cursor.rollback(state);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}
