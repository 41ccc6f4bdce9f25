use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

pub mod digit;
pub mod f64;
pub mod i64;
pub mod u64;

pub use digit::{digit, digits};
pub use f64::f64;
pub use i64::i64;
pub use u64::u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

/// Shape of a numeric literal found at the start of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scanned {
    pub len: usize,
    /// A fraction or an exponent is present
    pub is_float: bool,
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Scan `[+-]? digits ('.' digits)? ([eE] [+-]? digits)?`
///
/// A `.` or exponent marker not followed by a digit ends the literal before
/// it, so `1.` scans as `1` and `2e` as `2`.
pub(crate) fn scan(bytes: &[u8]) -> Option<Scanned> {
    let mut len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integral = leading_digits(&bytes[len..]);
    if integral == 0 {
        return None;
    }
    len += integral;
    let mut is_float = false;

    if bytes.get(len) == Some(&b'.') {
        let fraction = leading_digits(&bytes[len + 1..]);
        if fraction > 0 {
            len += 1 + fraction;
            is_float = true;
        }
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(len + 1), Some(b'+' | b'-')));
        let exponent = bytes
            .get(len + 1 + sign..)
            .map(leading_digits)
            .unwrap_or(0);
        if exponent > 0 {
            len += 1 + sign + exponent;
            is_float = true;
        }
    }

    Some(Scanned { len, is_float })
}

/// Parser that matches an integer or a float and returns a [`Number`]
///
/// The literal is a float only when it has a fraction or an exponent.
/// Integers that do not fit in an `i64` fail rather than silently becoming
/// floats.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParser;

pub fn number() -> NumberParser {
    NumberParser
}

impl Parser for NumberParser {
    type Output = Number;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<Number> {
        let Some(scanned) = scan(cursor.remaining()) else {
            return Ok(None);
        };
        let Ok(literal) = std::str::from_utf8(&cursor.remaining()[..scanned.len]) else {
            return Ok(None);
        };

        let value = if scanned.is_float {
            literal.parse().ok().filter(|v: &f64| v.is_finite()).map(Number::F64)
        } else {
            literal.parse().ok().map(Number::I64)
        };

        Ok(value.map(|value| {
            let start = cursor.position();
            cursor.advance(scanned.len);
            ParseResult::new(start, cursor.position(), value)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_number(input: &str) -> (Option<Number>, usize) {
        let mut cursor = Cursor::new(input);
        let mut ctx = ParseContext::default();
        let result = number().parse(&mut cursor, &mut ctx).unwrap();
        (result.map(|r| r.value), cursor.position())
    }

    #[test]
    fn test_scan_shapes() {
        assert_eq!(scan(b"12"), Some(Scanned { len: 2, is_float: false }));
        assert_eq!(scan(b"-1.5x"), Some(Scanned { len: 4, is_float: true }));
        assert_eq!(scan(b"1e-3"), Some(Scanned { len: 4, is_float: true }));
        assert_eq!(scan(b"1."), Some(Scanned { len: 1, is_float: false }));
        assert_eq!(scan(b"2e"), Some(Scanned { len: 1, is_float: false }));
        assert_eq!(scan(b"-"), None);
        assert_eq!(scan(b".5"), None);
    }

    #[test]
    fn test_number_float() {
        let (num, position) = parse_number("3.14abc");
        match num {
            Some(Number::F64(f)) => assert!((f - 3.14).abs() < f64::EPSILON),
            other => panic!("Expected float, got {:?}", other),
        }
        assert_eq!(position, 4);
    }

    #[test]
    fn test_number_int() {
        let (num, position) = parse_number("123abc");
        assert_eq!(num, Some(Number::I64(123)));
        assert_eq!(position, 3);
    }

    #[test]
    fn test_number_negative_float() {
        let (num, position) = parse_number("-2.5xyz");
        assert_eq!(num, Some(Number::F64(-2.5)));
        assert_eq!(position, 4);
    }

    #[test]
    fn test_number_negative_int() {
        let (num, _) = parse_number("-456xyz");
        assert_eq!(num, Some(Number::I64(-456)));
    }

    #[test]
    fn test_number_exponent_is_float() {
        let (num, _) = parse_number("2e3");
        assert_eq!(num, Some(Number::F64(2000.0)));
    }

    #[test]
    fn test_number_dot_without_digits_left_unconsumed() {
        let (num, position) = parse_number("7.foo");
        assert_eq!(num, Some(Number::I64(7)));
        assert_eq!(position, 1);
    }

    #[test]
    fn test_number_integer_overflow_fails() {
        let (num, position) = parse_number("99999999999999999999");
        assert_eq!(num, None);
        assert_eq!(position, 0);
    }
}
