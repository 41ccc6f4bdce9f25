use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::region::Region;
use crate::result::ParseResult;

/// Run of bytes satisfying a predicate, bounded by `[min, max]`
///
/// The byte-level counterpart of [`CharClass`](super::class::CharClass) for
/// sets that are easier to express as a function.
#[derive(Clone)]
pub struct TakeWhile<F> {
    predicate: F,
    min: usize,
    max: usize,
}

impl<F> TakeWhile<F>
where
    F: Fn(u8) -> bool,
{
    pub fn new(predicate: F, min: usize) -> Self {
        TakeWhile {
            predicate,
            min,
            max: usize::MAX,
        }
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }
}

/// Zero or more bytes satisfying `predicate`
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(u8) -> bool,
{
    TakeWhile::new(predicate, 0)
}

/// One or more bytes satisfying `predicate`
pub fn take_while1<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(u8) -> bool,
{
    TakeWhile::new(predicate, 1)
}

impl<F> Parser for TakeWhile<F>
where
    F: Fn(u8) -> bool,
{
    type Output = Region;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<Region> {
        let start = cursor.position();
        let length = cursor
            .remaining()
            .iter()
            .take(self.max)
            .take_while(|&&b| (self.predicate)(b))
            .count();

        if length < self.min {
            return Ok(None);
        }

        cursor.advance(length);
        Ok(Some(ParseResult::new(
            start,
            cursor.position(),
            Region::new(start, length),
        )))
    }
}
