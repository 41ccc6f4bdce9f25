use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser, ParserRef};

/// Runs a parser only when a predicate over the live context holds
///
/// The predicate is evaluated at parse time on every call. When it is false
/// the parser is not attempted and nothing is consumed.
#[derive(Clone)]
pub struct When<F, P> {
    predicate: F,
    parser: P,
}

impl<F, P> Parser for When<F, P>
where
    F: Fn(&ParseContext) -> bool,
    P: Parser,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        if !(self.predicate)(ctx) {
            return Ok(None);
        }
        self.parser.parse(cursor, ctx)
    }
}

/// Picks the parser to run from the live context
///
/// The selector is a plain function value; it runs on every call and the
/// parser it returns is run in place. Its failure is this parser's failure.
#[derive(Clone)]
pub struct Select<F> {
    selector: F,
}

impl<F, T> Parser for Select<F>
where
    F: Fn(&ParseContext) -> ParserRef<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<T> {
        let parser = (self.selector)(ctx);
        parser.parse(cursor, ctx)
    }
}

/// Gate `parser` behind a context predicate
pub fn when<F, P>(predicate: F, parser: P) -> When<F, P>
where
    F: Fn(&ParseContext) -> bool,
    P: Parser,
{
    When { predicate, parser }
}

/// Gate `parser` behind a context flag being set
pub fn when_flag<P>(
    flag: &'static str,
    parser: P,
) -> When<impl Fn(&ParseContext) -> bool + Clone + Send + Sync, P>
where
    P: Parser,
{
    when(move |ctx: &ParseContext| ctx.has_flag(flag), parser)
}

/// Choose the parser at parse time
pub fn select<F, T>(selector: F) -> Select<F>
where
    F: Fn(&ParseContext) -> ParserRef<T>,
{
    Select { selector }
}
