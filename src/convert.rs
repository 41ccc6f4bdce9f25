use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::error::CursorError;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::trace;

/// Run `parser`, record its span as the raw window and reinterpret the raw
/// bytes with `convert`. A conversion error is an ordinary failure.
fn reinterpret<'src, P, T>(
    parser: &P,
    cursor: &mut Cursor<'src>,
    ctx: &mut ParseContext,
    convert: impl FnOnce(&Cursor<'src>) -> Result<T, CursorError>,
) -> ParseOutcome<T>
where
    P: Parser,
{
    let state = cursor.capture();
    let Some(result) = parser.parse(cursor, ctx)? else {
        return Ok(None);
    };
    cursor.mark(result.start, result.end);

    match convert(&*cursor) {
        Ok(value) => Ok(Some(result.with_value(value))),
        Err(error) => {
            trace!(%error, "raw conversion failed");
            cursor.rollback(state);
            Ok(None)
        }
    }
}

/// Reinterprets the raw matched bytes as an owned string
#[derive(Debug, Clone)]
pub struct AsString<P> {
    parser: P,
}

impl<P: Parser> Parser for AsString<P> {
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<String> {
        reinterpret(&self.parser, cursor, ctx, |cursor| {
            let raw = cursor.raw();
            cursor.materialize(raw.offset, raw.length)
        })
    }
}

/// Reinterprets the raw matched bytes as a hexadecimal number
#[derive(Debug, Clone)]
pub struct AsHex<P> {
    parser: P,
}

impl<P: Parser> Parser for AsHex<P> {
    type Output = u64;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<u64> {
        reinterpret(&self.parser, cursor, ctx, Cursor::as_hex)
    }
}

/// Reinterprets the raw matched bytes as exactly one character
#[derive(Debug, Clone)]
pub struct AsChar<P> {
    parser: P,
}

impl<P: Parser> Parser for AsChar<P> {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<char> {
        reinterpret(&self.parser, cursor, ctx, Cursor::as_char)
    }
}

/// Reinterprets the raw matched text as any [`FromStr`] type
pub struct AsParsed<P, T> {
    parser: P,
    _phantom: PhantomData<fn() -> T>,
}

impl<P: Clone, T> Clone for AsParsed<P, T> {
    fn clone(&self) -> Self {
        AsParsed {
            parser: self.parser.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<P, T> Parser for AsParsed<P, T>
where
    P: Parser,
    T: FromStr,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<T> {
        let state = cursor.capture();
        let parsed = reinterpret(&self.parser, cursor, ctx, |cursor| {
            cursor.slice(cursor.raw()).map(str::parse::<T>)
        })?;

        let Some(ParseResult { start, end, value }) = parsed else {
            return Ok(None);
        };
        match value {
            Ok(value) => Ok(Some(ParseResult::new(start, end, value))),
            Err(_) => {
                cursor.rollback(state);
                Ok(None)
            }
        }
    }
}

pub fn as_string<P: Parser>(parser: P) -> AsString<P> {
    AsString { parser }
}

pub fn as_hex<P: Parser>(parser: P) -> AsHex<P> {
    AsHex { parser }
}

pub fn as_char<P: Parser>(parser: P) -> AsChar<P> {
    AsChar { parser }
}

pub fn as_parsed<T: FromStr, P: Parser>(parser: P) -> AsParsed<P, T> {
    AsParsed {
        parser,
        _phantom: PhantomData,
    }
}

/// Extension trait to add raw-byte conversions to parsers
pub trait ConvertExt: Parser + Sized {
    fn as_string(self) -> AsString<Self> {
        as_string(self)
    }

    fn as_hex(self) -> AsHex<Self> {
        as_hex(self)
    }

    fn as_char(self) -> AsChar<Self> {
        as_char(self)
    }

    fn as_parsed<T: FromStr>(self) -> AsParsed<Self, T> {
        as_parsed(self)
    }
}

impl<P> ConvertExt for P where P: Parser {}
