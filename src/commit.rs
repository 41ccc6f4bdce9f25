use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::error::{FatalError, FatalKind};
use crate::parser::{ParseOutcome, Parser};
use crate::region::Unit;
use crate::result::ParseResult;
use std::borrow::Cow;
use tracing::debug;

/// Commit point: the inner parser must match
///
/// An ordinary failure of the inner parser becomes a [`FatalError`] of kind
/// [`FatalKind::Committed`] at the position where it was attempted. Nothing
/// above this point can backtrack past it.
#[derive(Debug, Clone)]
pub struct Expect<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Parser for Expect<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let position = cursor.position();
        match self.parser.parse(cursor, ctx)? {
            Some(result) => Ok(Some(result)),
            None => {
                debug!(position, message = %self.message, "commit point failed");
                Err(FatalError::new(
                    FatalKind::Committed,
                    self.message.clone(),
                    position,
                ))
            }
        }
    }
}

/// Dual commit point: the inner parser must not match
///
/// Succeeds, consuming nothing, when the inner parser fails. A match becomes
/// a [`FatalError`] of kind [`FatalKind::Rejected`] at the match start.
#[derive(Debug, Clone)]
pub struct Reject<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Parser for Reject<P>
where
    P: Parser,
{
    type Output = Unit;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<Unit> {
        let state = cursor.capture();
        match self.parser.parse(cursor, ctx)? {
            Some(_) => {
                cursor.rollback(state);
                debug!(position = state.position(), message = %self.message, "rejected match");
                Err(FatalError::new(
                    FatalKind::Rejected,
                    self.message.clone(),
                    state.position(),
                ))
            }
            None => {
                let position = state.position();
                Ok(Some(ParseResult::new(position, position, Unit)))
            }
        }
    }
}

pub fn expect<P>(parser: P, message: impl Into<Cow<'static, str>>) -> Expect<P>
where
    P: Parser,
{
    Expect {
        parser,
        message: message.into(),
    }
}

pub fn reject<P>(parser: P, message: impl Into<Cow<'static, str>>) -> Reject<P>
where
    P: Parser,
{
    Reject {
        parser,
        message: message.into(),
    }
}

/// Extension trait to add commit points to parsers
pub trait CommitExt: Parser + Sized {
    fn expect(self, message: impl Into<Cow<'static, str>>) -> Expect<Self> {
        expect(self, message)
    }

    fn reject(self, message: impl Into<Cow<'static, str>>) -> Reject<Self> {
        reject(self, message)
    }
}

impl<P> CommitExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::byte::is_byte;
    use crate::ascii::text::text;
    use crate::or::OrExt;

    #[test]
    fn test_expect_passes_success_through() {
        let mut cursor = Cursor::new("ab");
        let mut ctx = ParseContext::default();

        let result = expect(text("ab"), "need ab").parse(&mut cursor, &mut ctx).unwrap();
        assert_eq!(result.unwrap().value, "ab");
    }

    #[test]
    fn test_expect_failure_is_fatal() {
        let mut cursor = Cursor::new("(1");
        let mut ctx = ParseContext::default();

        let parser = is_byte(b'(')
            .and(is_byte(b'1'))
            .and(is_byte(b')').expect("missing ')'"));
        let error = parser.parse(&mut cursor, &mut ctx).unwrap_err();
        assert_eq!(error.kind, FatalKind::Committed);
        assert_eq!(error.position, 2);
        assert_eq!(error.message, "missing ')'");
    }

    #[test]
    fn test_expect_is_not_backtracked_by_choice() {
        let parser = text("a").then(text("b").expect("b after a")).or(text("ac"));
        let error = parser.try_parse("ac").unwrap_err();
        assert!(error.is_fatal());
    }

    #[test]
    fn test_reject_on_failure_succeeds() {
        let mut cursor = Cursor::new("x");
        let mut ctx = ParseContext::default();

        let result = reject(text("y"), "no y").parse(&mut cursor, &mut ctx).unwrap();
        assert!(result.is_some());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_reject_on_match_is_fatal() {
        let mut cursor = Cursor::new("  goto");
        let mut ctx = ParseContext::default();
        cursor.advance(2);

        let error = text("goto")
            .reject("goto is not supported")
            .parse(&mut cursor, &mut ctx)
            .unwrap_err();
        assert_eq!(error.kind, FatalKind::Rejected);
        assert_eq!(error.position, 2);
    }
}
