//! Whitespace and flag scoping
//!
//! Whitespace is skipped only where a grammar asks for it, by wrapping a
//! parser in [`token`]. What counts as whitespace is a property of the parse
//! context, not of the token: [`with_whitespace`] installs a whitespace
//! parser for the extent of an inner parser and restores the previous one on
//! every exit path. [`CommentRules`] builds such a parser from plain
//! whitespace and comment syntax.

use crate::and::AndExt;
use crate::ascii::text::text;
use crate::ascii::whitespace::whitespaces;
use crate::commit::expect;
use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::many::many;
use crate::map::MapExt;
use crate::optional::succeed;
use crate::or::choice;
use crate::parser::{ParseOutcome, Parser, ParserRef, SharedExt};
use crate::region::Unit;
use crate::take_until::take_until;
use std::borrow::Cow;

/// Skips whitespace through the context, then runs the inner parser
///
/// Atomic including the skipped whitespace. The result span is the inner
/// parser's span and does not include the whitespace.
#[derive(Debug, Clone)]
pub struct Token<P> {
    parser: P,
}

impl<P> Parser for Token<P>
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
        ctx.skip_whitespace(cursor)?;
        let outcome = self.parser.parse(cursor, ctx)?;
        if outcome.is_none() {
            cursor.rollback(state);
        }
        Ok(outcome)
    }
}

/// Runs the inner parser with a different whitespace parser installed
#[derive(Clone)]
pub struct WithWhitespace<P> {
    whitespace: Option<ParserRef<Unit>>,
    parser: P,
}

impl<P> Parser for WithWhitespace<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let mut scope = ctx.scoped_whitespace(self.whitespace.clone());
        self.parser.parse(cursor, &mut scope)
    }
}

/// Runs the inner parser with a context flag set or cleared
#[derive(Debug, Clone)]
pub struct WithFlag<P> {
    name: Cow<'static, str>,
    on: bool,
    parser: P,
}

impl<P> Parser for WithFlag<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let mut scope = ctx.scoped_flag(self.name.clone(), self.on);
        self.parser.parse(cursor, &mut scope)
    }
}

/// Skip the context's whitespace before `parser`
pub fn token<P>(parser: P) -> Token<P>
where
    P: Parser,
{
    Token { parser }
}

/// Install `whitespace` while `parser` runs
pub fn with_whitespace<P, W>(whitespace: W, parser: P) -> WithWhitespace<P>
where
    P: Parser,
    W: Parser<Output = Unit> + Send + Sync + 'static,
{
    WithWhitespace {
        whitespace: Some(whitespace.shared()),
        parser,
    }
}

/// Restore the context's default whitespace skip while `parser` runs
pub fn default_whitespace<P>(parser: P) -> WithWhitespace<P>
where
    P: Parser,
{
    WithWhitespace {
        whitespace: None,
        parser,
    }
}

/// Skip nothing at all while `parser` runs
pub fn no_whitespace<P>(parser: P) -> WithWhitespace<P>
where
    P: Parser,
{
    with_whitespace(succeed(Unit), parser)
}

/// Set (or clear) flag `name` while `parser` runs
pub fn with_flag<P>(name: impl Into<Cow<'static, str>>, on: bool, parser: P) -> WithFlag<P>
where
    P: Parser,
{
    WithFlag {
        name: name.into(),
        on,
        parser,
    }
}

/// Extension trait to add .token() method support for parsers
pub trait TokenExt: Parser + Sized {
    fn token(self) -> Token<Self> {
        token(self)
    }
}

impl<P> TokenExt for P where P: Parser {}

/// Builder for a whitespace parser that also skips comments
///
/// The built parser repeatedly skips any of: a run of whitespace, a line
/// comment up to (not including) the line break, or a block comment with
/// its terminator. A block comment opened but never closed is a fatal error.
///
/// ```
/// use spancomb::and::AndExt;
/// use spancomb::ascii::text::text;
/// use spancomb::parser::Parser;
/// use spancomb::scope::{CommentRules, token};
///
/// let pair = CommentRules::new()
///     .line_comment("//")
///     .block_comment("/*", "*/")
///     .apply(token(text("a")).and(token(text("b"))));
///
/// assert!(pair.try_parse("a /* x */ b").is_ok());
/// assert!(pair.try_parse("a // x\n b").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CommentRules {
    whitespace: bool,
    line_comments: Vec<Cow<'static, str>>,
    block_comments: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Default for CommentRules {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentRules {
    /// Rules that skip plain whitespace and no comments yet
    pub fn new() -> Self {
        CommentRules {
            whitespace: true,
            line_comments: Vec::new(),
            block_comments: Vec::new(),
        }
    }

    /// Whether runs of plain whitespace (line breaks included) are skipped
    pub fn whitespace(mut self, whitespace: bool) -> Self {
        self.whitespace = whitespace;
        self
    }

    pub fn line_comment(mut self, opener: impl Into<Cow<'static, str>>) -> Self {
        self.line_comments.push(opener.into());
        self
    }

    pub fn block_comment(
        mut self,
        opener: impl Into<Cow<'static, str>>,
        closer: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.block_comments.push((opener.into(), closer.into()));
        self
    }

    /// Combine the rules into a single whitespace parser
    pub fn build(&self) -> ParserRef<Unit> {
        let mut rules: Vec<ParserRef<Unit>> = Vec::new();

        if self.whitespace {
            rules.push(whitespaces().discard().shared());
        }
        for opener in &self.line_comments {
            let comment = text(opener.clone()).and(take_until(text("\n")).or_eof());
            rules.push(comment.discard().shared());
        }
        for (opener, closer) in &self.block_comments {
            let unterminated = format!("unterminated block comment, expected `{}`", closer);
            let body = take_until(text(closer.clone())).and(text(closer.clone()));
            let comment = text(opener.clone()).and(expect(body, unterminated));
            rules.push(comment.discard().shared());
        }

        many(choice(rules)).discard().shared()
    }

    /// Run `parser` with these rules as the whitespace parser
    pub fn apply<P>(&self, parser: P) -> WithWhitespace<P>
    where
        P: Parser,
    {
        WithWhitespace {
            whitespace: Some(self.build()),
            parser,
        }
    }
}
