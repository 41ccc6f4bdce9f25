use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::region::Unit;
use crate::result::ParseResult;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with [`Unit`] if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
#[derive(Debug, Clone)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    type Output = Unit;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<Unit> {
        let state = cursor.capture();
        match self.parser.parse(cursor, ctx)? {
            Some(_) => {
                cursor.rollback(state);
                Ok(None)
            }
            None => {
                let position = state.position();
                Ok(Some(ParseResult::new(position, position, Unit)))
            }
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P>(parser: P) -> Not<P>
where
    P: Parser,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt: Parser + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<P> NotExt for P where P: Parser {}
