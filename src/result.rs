use crate::region::Region;

/// Successful match: the consumed byte range and the produced value
///
/// Only successful parses produce one, so a caller can never observe the
/// value of a failed attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    /// Offset where the match starts (inclusive)
    pub start: usize,
    /// Offset where the match ends (exclusive)
    pub end: usize,
    pub value: T,
}

impl<T> ParseResult<T> {
    pub fn new(start: usize, end: usize, value: T) -> Self {
        debug_assert!(start <= end);
        ParseResult { start, end, value }
    }

    /// The consumed bytes as a zero-copy region
    pub fn region(&self) -> Region {
        Region::between(self.start, self.end)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult {
            start: self.start,
            end: self.end,
            value: f(self.value),
        }
    }

    /// Same span, different value
    pub fn with_value<U>(self, value: U) -> ParseResult<U> {
        ParseResult {
            start: self.start,
            end: self.end,
            value,
        }
    }
}
