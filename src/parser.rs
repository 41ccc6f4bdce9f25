use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::error::{CodeLoc, FatalError, TryParseError};
use crate::options::ParseOptions;
use crate::result::ParseResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::debug;

/// Outcome of one parser call
///
/// - `Ok(Some(result))`: matched; the cursor sits at `result.end`
/// - `Ok(None)`: ordinary failure; the cursor is exactly where it was before
///   the call
/// - `Err(fatal)`: a commit point fired; no backtracking past this point
pub type ParseOutcome<T> = Result<Option<ParseResult<T>>, FatalError>;

/// Core parser trait for parser combinators
///
/// A parser tree is built once and never mutated while parsing: all per-call
/// state lives in the cursor and context passed to [`Parser::parse`], so one
/// tree can serve any number of inputs, on any number of threads.
pub trait Parser {
    type Output;

    /// Attempt to parse at the cursor's current position
    ///
    /// Implementations must leave the cursor untouched when returning
    /// `Ok(None)`.
    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext)
    -> ParseOutcome<Self::Output>;

    /// Parse a whole input with default options
    fn try_parse<'src>(&self, input: &'src str) -> Result<Self::Output, TryParseError<'src>> {
        try_parse_with(self, input, &ParseOptions::default())
    }

    /// Parse a whole input with explicit options
    fn try_parse_with<'src>(
        &self,
        input: &'src str,
        options: &ParseOptions,
    ) -> Result<Self::Output, TryParseError<'src>> {
        try_parse_with(self, input, options)
    }
}

/// Top-level entry point
///
/// Creates a fresh cursor and context, runs `parser` once from offset 0 and
/// converts the outcome into a result. The input is not trimmed.
#[tracing::instrument(level = "debug", skip_all, fields(input_len = input.len()))]
pub fn try_parse_with<'src, P>(
    parser: &P,
    input: &'src str,
    options: &ParseOptions,
) -> Result<P::Output, TryParseError<'src>>
where
    P: Parser + ?Sized,
{
    let mut cursor = Cursor::new(input);
    let mut ctx = ParseContext::new(options.clone());
    let loc = |position| CodeLoc::new(input.as_bytes(), position);

    let result = match parser.parse(&mut cursor, &mut ctx) {
        Ok(Some(result)) => result,
        Ok(None) => {
            debug!(furthest = cursor.furthest(), "no match");
            return Err(TryParseError::NoMatch {
                loc: loc(cursor.furthest()),
            });
        }
        Err(error) => {
            debug!(position = error.position, kind = ?error.kind, "fatal parse error");
            let position = error.position;
            return Err(TryParseError::Fatal {
                error,
                loc: loc(position),
            });
        }
    };

    if options.require_eof && !cursor.eof() {
        debug!(position = cursor.position(), "trailing input");
        return Err(TryParseError::TrailingInput {
            loc: loc(cursor.position()),
        });
    }

    Ok(result.value)
}

/// Process-unique identity of a grammar node
///
/// Allocated when the node is built and never reused, so two structurally
/// identical rules still have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParserId(u32);

impl ParserId {
    pub fn fresh() -> Self {
        static NEXT_ID: AtomicU32 = AtomicU32::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Cloneable, thread-safe, type-erased parser handle
pub type ParserRef<T> = Arc<dyn Parser<Output = T> + Send + Sync>;

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        (**self).parse(cursor, ctx)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        (**self).parse(cursor, ctx)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        (**self).parse(cursor, ctx)
    }
}

/// Extension trait to add .shared() method support for parsers
pub trait SharedExt: Parser + Sized + Send + Sync + 'static {
    /// Erase the concrete type behind a [`ParserRef`]
    fn shared(self) -> ParserRef<Self::Output> {
        Arc::new(self)
    }
}

impl<P> SharedExt for P where P: Parser + Send + Sync + 'static {}
