use super::byte::is_byte;
use super::predicate::{TakeWhile, take_while1};
use crate::or::OrExt;
use crate::parser::Parser;

fn is_inline_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | 0x0B | 0x0C)
}

fn is_space(byte: u8) -> bool {
    is_inline_space(byte) || matches!(byte, b'\n' | b'\r')
}

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace() -> impl Parser<Output = u8> + Clone + Send + Sync + 'static {
    is_byte(b' ')
        .or(is_byte(b'\t'))
        .or(is_byte(b'\n'))
        .or(is_byte(b'\r'))
}

/// One or more whitespace bytes, line breaks included
pub fn whitespaces() -> TakeWhile<fn(u8) -> bool> {
    take_while1(is_space as fn(u8) -> bool)
}

/// One or more blanks on the current line
pub fn inline_whitespace() -> TakeWhile<fn(u8) -> bool> {
    take_while1(is_inline_space as fn(u8) -> bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParseContext;
    use crate::cursor::Cursor;
    use crate::many::many;

    #[test]
    fn test_whitespace_parser_each_byte() {
        let mut ctx = ParseContext::default();
        for input in [" abc", "\tabc", "\nabc", "\rabc"] {
            let mut cursor = Cursor::new(input);
            let result = whitespace().parse(&mut cursor, &mut ctx).unwrap().unwrap();
            assert_eq!(result.value, input.as_bytes()[0]);
            assert_eq!(cursor.peek(), Some(b'a'));
        }
    }

    #[test]
    fn test_whitespace_parser_non_whitespace_fails() {
        let mut cursor = Cursor::new("abc");
        let mut ctx = ParseContext::default();
        assert!(whitespace().parse(&mut cursor, &mut ctx).unwrap().is_none());
    }

    #[test]
    fn test_whitespaces_parser_multiple_matches() {
        let mut cursor = Cursor::new("  \t\n abc");
        let mut ctx = ParseContext::default();

        let result = many(whitespace()).parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.value, vec![b' ', b' ', b'\t', b'\n', b' ']);
        assert_eq!(cursor.peek(), Some(b'a'));
    }

    #[test]
    fn test_whitespaces_run() {
        let mut cursor = Cursor::new(" \r\n\t x");
        let mut ctx = ParseContext::default();

        let result = whitespaces().parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.value.len(), 5);
    }

    #[test]
    fn test_inline_whitespace_stops_at_newline() {
        let mut cursor = Cursor::new("  \nx");
        let mut ctx = ParseContext::default();

        let result = inline_whitespace().parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!(result.end, 2);
        assert!(inline_whitespace().parse(&mut cursor, &mut ctx).unwrap().is_none());
    }
}
