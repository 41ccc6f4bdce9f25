use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Parser that consumes and returns a single byte
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteParser;

impl ByteParser {
    pub fn new() -> Self {
        ByteParser
    }
}

/// Convenience function to create a ByteParser
pub fn byte() -> ByteParser {
    ByteParser::new()
}

impl Parser for ByteParser {
    type Output = u8;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<u8> {
        let start = cursor.position();
        Ok(cursor
            .read_byte()
            .map(|byte| ParseResult::new(start, start + 1, byte)))
    }
}

/// Parser that matches a specific byte
#[derive(Debug, Clone, Copy)]
pub struct IsByteParser {
    expected: u8,
}

impl IsByteParser {
    pub fn new(expected: u8) -> Self {
        IsByteParser { expected }
    }
}

impl Parser for IsByteParser {
    type Output = u8;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<u8> {
        let start = cursor.position();
        match cursor.peek() {
            Some(byte) if byte == self.expected => {
                cursor.advance(1);
                Ok(Some(ParseResult::new(start, start + 1, byte)))
            }
            _ => Ok(None),
        }
    }
}

/// Parser that matches a byte within a range (inclusive)
#[derive(Debug, Clone, Copy)]
pub struct BetweenBytesParser {
    start: u8,
    end: u8,
}

impl BetweenBytesParser {
    pub fn new(start: u8, end: u8) -> Self {
        BetweenBytesParser { start, end }
    }
}

impl Parser for BetweenBytesParser {
    type Output = u8;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<u8> {
        let start = cursor.position();
        match cursor.peek() {
            Some(byte) if (self.start..=self.end).contains(&byte) => {
                cursor.advance(1);
                Ok(Some(ParseResult::new(start, start + 1, byte)))
            }
            _ => Ok(None),
        }
    }
}

/// Parser that matches one exact character, ASCII or not
#[derive(Debug, Clone, Copy)]
pub struct IsCharParser {
    expected: char,
}

impl IsCharParser {
    pub fn new(expected: char) -> Self {
        IsCharParser { expected }
    }
}

impl Parser for IsCharParser {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<char> {
        let mut buffer = [0u8; 4];
        let encoded = self.expected.encode_utf8(&mut buffer).as_bytes();
        if !cursor.starts_with(encoded) {
            return Ok(None);
        }
        let start = cursor.position();
        cursor.advance(encoded.len());
        Ok(Some(ParseResult::new(start, cursor.position(), self.expected)))
    }
}

/// Convenience function to create an IsByteParser
pub fn is_byte(expected: u8) -> IsByteParser {
    IsByteParser::new(expected)
}

/// Convenience function to create a BetweenBytesParser
pub fn between_bytes(start: u8, end: u8) -> BetweenBytesParser {
    BetweenBytesParser::new(start, end)
}

/// Convenience function to create an IsCharParser
pub fn is_char(expected: char) -> IsCharParser {
    IsCharParser::new(expected)
}
