use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Parser that matches ASCII integer numbers (positive or negative)
#[derive(Debug, Clone, Copy, Default)]
pub struct IntParser;

pub fn i64() -> IntParser {
    IntParser
}

impl Parser for IntParser {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<i64> {
        let bytes = cursor.remaining();
        let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digits = bytes[sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Ok(None);
        }

        let length = sign + digits;
        // Parsing sign and digits together keeps i64::MIN representable
        let value = std::str::from_utf8(&bytes[..length])
            .ok()
            .and_then(|literal| literal.parse::<i64>().ok());
        let Some(value) = value else {
            return Ok(None);
        };

        let start = cursor.position();
        cursor.advance(length);
        Ok(Some(ParseResult::new(start, cursor.position(), value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_i64(input: &str) -> (Option<i64>, usize) {
        let mut cursor = Cursor::new(input);
        let mut ctx = ParseContext::default();
        let result = i64().parse(&mut cursor, &mut ctx).unwrap();
        (result.map(|r| r.value), cursor.position())
    }

    #[test]
    fn test_int_positive() {
        assert_eq!(parse_i64("42abc"), (Some(42), 2));
        assert_eq!(parse_i64("+42"), (Some(42), 3));
    }

    #[test]
    fn test_int_negative() {
        assert_eq!(parse_i64("-123xyz"), (Some(-123), 4));
    }

    #[test]
    fn test_int_min() {
        assert_eq!(parse_i64("-9223372036854775808"), (Some(i64::MIN), 20));
    }

    #[test]
    fn test_int_overflow() {
        assert_eq!(parse_i64("9223372036854775808"), (None, 0));
    }

    #[test]
    fn test_int_sign_only() {
        assert_eq!(parse_i64("-x"), (None, 0));
    }
}
