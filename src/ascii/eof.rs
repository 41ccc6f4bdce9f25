use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::region::Unit;
use crate::result::ParseResult;

/// Parser that succeeds, consuming nothing, only at end of input
#[derive(Debug, Clone, Copy, Default)]
pub struct Eof;

pub fn eof() -> Eof {
    Eof
}

impl Parser for Eof {
    type Output = Unit;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<Unit> {
        let position = cursor.position();
        Ok(cursor
            .eof()
            .then(|| ParseResult::new(position, position, Unit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof() {
        let mut cursor = Cursor::new("a");
        let mut ctx = ParseContext::default();

        assert!(eof().parse(&mut cursor, &mut ctx).unwrap().is_none());
        cursor.advance(1);
        let result = eof().parse(&mut cursor, &mut ctx).unwrap().unwrap();
        assert_eq!((result.start, result.end), (1, 1));
    }

    #[test]
    fn test_eof_on_empty_input() {
        let mut cursor = Cursor::new("");
        let mut ctx = ParseContext::default();
        assert!(eof().parse(&mut cursor, &mut ctx).unwrap().is_some());
    }
}
