use super::identifier::is_ident_continue;
use super::text::common_prefix;
use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that matches a keyword
///
/// Like [`Text`](super::text::Text), but the match must not be followed by an
/// identifier byte, so `keyword("if")` rejects `"ifx"` while accepting
/// `"if x"` and `"if("`.
#[derive(Debug, Clone)]
pub struct Keyword {
    word: Cow<'static, str>,
}

impl Keyword {
    pub fn new(word: impl Into<Cow<'static, str>>) -> Self {
        Keyword { word: word.into() }
    }
}

/// Convenience function to create a Keyword parser
pub fn keyword(word: impl Into<Cow<'static, str>>) -> Keyword {
    Keyword::new(word)
}

impl Parser for Keyword {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        _ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let word = self.word.as_bytes();
        let start = cursor.capture();
        let matched = common_prefix(cursor, word);
        cursor.advance(matched);

        let boundary = !cursor.peek().is_some_and(is_ident_continue);
        if matched < word.len() || !boundary {
            cursor.rollback(start);
            return Ok(None);
        }

        Ok(Some(ParseResult::new(
            start.position(),
            cursor.position(),
            self.word.clone(),
        )))
    }
}
