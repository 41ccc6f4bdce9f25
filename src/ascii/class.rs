use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::region::Region;
use crate::result::ParseResult;

/// Set of bytes, one bit per byte value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteSet([u64; 4]);

impl ByteSet {
    pub fn new(bytes: &[u8]) -> Self {
        let mut set = ByteSet::default();
        for &byte in bytes {
            set.insert(byte);
        }
        set
    }

    pub fn insert(&mut self, byte: u8) {
        self.0[usize::from(byte >> 6)] |= 1 << (byte & 63);
    }

    /// Add every byte in `start..=end`
    pub fn insert_range(&mut self, start: u8, end: u8) {
        for byte in start..=end {
            self.insert(byte);
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.0[usize::from(byte >> 6)] & (1 << (byte & 63)) != 0
    }
}

/// Maximal-munch run of bytes from a [`ByteSet`]
///
/// Matches between `min` and `max` member bytes, taking as many as it can.
/// With fewer than `min` available it fails without consuming anything.
/// Defaults to at least one byte with no upper bound.
#[derive(Debug, Clone, Copy)]
pub struct CharClass {
    set: ByteSet,
    min: usize,
    max: usize,
}

impl CharClass {
    pub fn new(set: ByteSet) -> Self {
        CharClass {
            set,
            min: 1,
            max: usize::MAX,
        }
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }
}

/// Convenience function to create a CharClass over the listed bytes
pub fn char_class(bytes: &[u8]) -> CharClass {
    CharClass::new(ByteSet::new(bytes))
}

impl Parser for CharClass {
    type Output = Region;

    fn parse(&self, cursor: &mut Cursor<'_>, _ctx: &mut ParseContext) -> ParseOutcome<Region> {
        let start = cursor.position();
        let length = cursor
            .remaining()
            .iter()
            .take(self.max)
            .take_while(|&&b| self.set.contains(b))
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
