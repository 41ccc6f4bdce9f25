use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Positive lookahead after a main parser
///
/// Succeeds when `parser` matches and `lookahead` also matches right after
/// it. The cursor ends where `parser` alone left it; if the lookahead fails
/// the main match is undone as well.
#[derive(Debug, Clone)]
pub struct FollowedBy<P, L> {
    parser: P,
    lookahead: L,
}

impl<P, L> FollowedBy<P, L> {
    pub fn new(parser: P, lookahead: L) -> Self {
        FollowedBy { parser, lookahead }
    }
}

impl<P, L> Parser for FollowedBy<P, L>
where
    P: Parser,
    L: Parser,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let state = cursor.capture();
        let Some(result) = self.parser.parse(cursor, ctx)? else {
            return Ok(None);
        };

        let after = cursor.capture();
        let matched = self.lookahead.parse(cursor, ctx)?.is_some();
        if matched {
            cursor.rollback(after);
            Ok(Some(result))
        } else {
            cursor.rollback(state);
            Ok(None)
        }
    }
}

/// Pure positive lookahead: returns the inner value, consumes nothing
#[derive(Debug, Clone)]
pub struct Peek<P> {
    parser: P,
}

impl<P> Peek<P> {
    pub fn new(parser: P) -> Self {
        Peek { parser }
    }
}

impl<P> Parser for Peek<P>
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
        let Some(result) = self.parser.parse(cursor, ctx)? else {
            return Ok(None);
        };
        cursor.rollback(state);
        let position = state.position();
        Ok(Some(ParseResult::new(position, position, result.value)))
    }
}

pub fn followed_by<P, L>(parser: P, lookahead: L) -> FollowedBy<P, L>
where
    P: Parser,
    L: Parser,
{
    FollowedBy::new(parser, lookahead)
}

pub fn peek<P>(parser: P) -> Peek<P>
where
    P: Parser,
{
    Peek::new(parser)
}

/// Extension trait to add lookahead methods to parsers
pub trait LookaheadExt: Parser + Sized {
    fn followed_by<L>(self, lookahead: L) -> FollowedBy<Self, L>
    where
        L: Parser,
    {
        FollowedBy::new(self, lookahead)
    }

    fn peek(self) -> Peek<Self> {
        Peek::new(self)
    }
}

impl<P> LookaheadExt for P where P: Parser {}
