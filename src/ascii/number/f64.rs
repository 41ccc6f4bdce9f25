use super::scan;
use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Parser that matches ASCII floating point numbers
///
/// Accepts `[+-]? digits ('.' digits)? ([eE] [+-]? digits)?`, so integers are
/// accepted too. Literals that overflow to infinity fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatParser;

pub fn f64() -> FloatParser {
    FloatParser
}

impl Parser for FloatParser {
    type Output = f64;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<f64> {
        let Some(scanned) = scan(cursor.remaining()) else {
            return Ok(None);
        };
        let value = std::str::from_utf8(&cursor.remaining()[..scanned.len])
            .ok()
            .and_then(|literal| literal.parse::<f64>().ok())
            .filter(|value| value.is_finite());
        let Some(value) = value else {
            return Ok(None);
        };

        let start = cursor.position();
        cursor.advance(scanned.len);
        Ok(Some(ParseResult::new(start, cursor.position(), value)))
    }
}
