use serde::{Deserialize, Serialize};

/// Zero-copy coordinates of a slice of the input buffer
///
/// A region never owns bytes. Turning it into text goes through
/// [`Cursor::slice`](crate::Cursor::slice) or
/// [`Cursor::materialize`](crate::Cursor::materialize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Region {
    /// Byte offset of the first byte
    pub offset: usize,
    /// Number of bytes
    pub length: usize,
}

impl Region {
    pub fn new(offset: usize, length: usize) -> Self {
        Region { offset, length }
    }

    /// Region covering `start..end`
    pub fn between(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Region {
            offset: start,
            length: end - start,
        }
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Borrow the covered bytes from `source`, if the region is in range
    pub fn slice<'src>(&self, source: &'src [u8]) -> Option<&'src [u8]> {
        source.get(self.offset..self.end())
    }
}

/// Void marker produced by parsers whose only job is to consume input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unit;
