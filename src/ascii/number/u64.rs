use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// Values that overflow fail without consuming input.
#[derive(Debug, Clone, Copy, Default)]
pub struct UIntParser;

pub fn u64() -> UIntParser {
    UIntParser
}

impl Parser for UIntParser {
    type Output = u64;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<u64> {
        let mut value: u64 = 0;
        let mut length = 0;
        for &byte in cursor.remaining() {
            if !byte.is_ascii_digit() {
                break;
            }
            let Some(next) = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
            else {
                return Ok(None);
            };
            value = next;
            length += 1;
        }

        if length == 0 {
            return Ok(None);
        }

        let start = cursor.position();
        cursor.advance(length);
        Ok(Some(ParseResult::new(start, cursor.position(), value)))
    }
}
