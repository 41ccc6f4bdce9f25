use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Parser for a quoted string literal, returning its decoded contents
///
/// Recognized escapes are `\n`, `\t`, `\r`, `\0`, `\\`, `\"`, `\'` and
/// `\xHH`. An unknown escape, a missing closing quote or contents that are
/// not UTF-8 make the parse fail without consuming input.
#[derive(Debug, Clone, Copy)]
pub struct StringLiteral {
    quote: u8,
}

impl StringLiteral {
    pub fn new(quote: u8) -> Self {
        StringLiteral { quote }
    }
}

/// String literal delimited by `quote` on both sides
pub fn string_literal(quote: u8) -> StringLiteral {
    StringLiteral::new(quote)
}

/// Double-quoted string literal
pub fn quoted() -> StringLiteral {
    StringLiteral::new(b'"')
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl StringLiteral {
    /// Decode a literal at the start of `bytes`, returning the contents and
    /// the number of bytes the literal spans
    fn decode(&self, bytes: &[u8]) -> Option<(String, usize)> {
        if bytes.first() != Some(&self.quote) {
            return None;
        }

        let mut decoded = Vec::new();
        let mut index = 1;
        loop {
            let byte = *bytes.get(index)?;
            index += 1;
            if byte == self.quote {
                break;
            }
            if byte != b'\\' {
                decoded.push(byte);
                continue;
            }

            let escape = *bytes.get(index)?;
            index += 1;
            let value = match escape {
                b'n' => b'\n',
                b't' => b'\t',
                b'r' => b'\r',
                b'0' => b'\0',
                b'\\' | b'"' | b'\'' => escape,
                b'x' => {
                    let high = hex_value(*bytes.get(index)?)?;
                    let low = hex_value(*bytes.get(index + 1)?)?;
                    index += 2;
                    (high << 4) | low
                }
                _ => return None,
            };
            decoded.push(value);
        }

        String::from_utf8(decoded).ok().map(|s| (s, index))
    }
}

impl Parser for StringLiteral {
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<String> {
        let Some((value, length)) = self.decode(cursor.remaining()) else {
            return Ok(None);
        };
        let start = cursor.position();
        cursor.advance(length);
        Ok(Some(ParseResult::new(start, cursor.position(), value)))
    }
}
