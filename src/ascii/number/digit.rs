use crate::ascii::byte::{BetweenBytesParser, between_bytes};
use crate::ascii::predicate::{TakeWhile, take_while1};

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> BetweenBytesParser {
    between_bytes(b'0', b'9')
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Parser that matches one or more ASCII digits and returns their region
pub fn digits() -> TakeWhile<fn(u8) -> bool> {
    take_while1(is_digit as fn(u8) -> bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseContext;
    use crate::cursor::Cursor;
    use crate::parser::Parser;
    use crate::region::Region;

    #[test]
    fn test_digit_zero_and_nine() {
        let mut ctx = ParseContext::default();
        for (input, expected) in [("0abc", b'0'), ("9xyz", b'9')] {
            let mut cursor = Cursor::new(input);
            let result = digit().parse(&mut cursor, &mut ctx).unwrap().unwrap();
            assert_eq!(result.value, expected);
            assert_eq!(cursor.position(), 1);
        }
    }

    #[test]
    fn test_digit_failure() {
        let mut cursor = Cursor::new("abc");
        let mut ctx = ParseContext::default();
        assert!(digit().parse(&mut cursor, &mut ctx).unwrap().is_none());
    }

    #[test]
    fn test_digits_region() {
        let mut cursor = Cursor::new("0042+1");
        let mut ctx = ParseContext::default();

        let result = digits().parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.value, Region::new(0, 4));
        assert_eq!(cursor.peek(), Some(b'+'));
    }
}
