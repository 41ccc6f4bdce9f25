use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. The whole sequence is atomic: if `content` or
/// `close` fails after `open` matched, the cursor goes back to before `open`.
/// The result span covers the delimiters.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
#[derive(Debug, Clone)]
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<P1, P2, P3> Parser for Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let state = cursor.capture();
        let Some(open) = self.open.parse(cursor, ctx)? else {
            return Ok(None);
        };

        let Some(content) = self.content.parse(cursor, ctx)? else {
            cursor.rollback(state);
            return Ok(None);
        };

        let Some(close) = self.close.parse(cursor, ctx)? else {
            cursor.rollback(state);
            return Ok(None);
        };

        Ok(Some(ParseResult::new(open.start, close.end, content.value)))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
///
/// Does not skip whitespace around the parts; wrap them in
/// [`token`](crate::scope::token) for that.
pub fn between<P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    Between::new(open, content, close)
}
