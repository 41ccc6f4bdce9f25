use crate::error::CursorError;
use crate::region::Region;

/// Opaque snapshot of a [`Cursor`], sufficient to restore it exactly
///
/// Captures and rollbacks must nest: a combinator rolls back only to a state
/// it captured itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    position: usize,
    raw: Region,
}

impl CursorState {
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Mutable reader over a byte buffer
///
/// The cursor owns all per-call position state. It never rolls itself back:
/// on failure the combinator that captured a state is responsible for
/// restoring it. Reads and advances past the end are no-ops.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    data: &'src [u8],
    position: usize,
    /// Window of the last raw match, see [`Cursor::mark`]
    raw: Region,
    /// Furthest offset ever reached, kept across rollbacks for diagnostics
    furthest: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(input: &'src str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    pub fn from_bytes(data: &'src [u8]) -> Self {
        Cursor {
            data,
            position: 0,
            raw: Region::default(),
            furthest: 0,
        }
    }

    /// The whole underlying buffer
    pub fn source(&self) -> &'src [u8] {
        self.data
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Furthest offset any parser advanced to, including abandoned attempts
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub fn capture(&self) -> CursorState {
        CursorState {
            position: self.position,
            raw: self.raw,
        }
    }

    pub fn rollback(&mut self, state: CursorState) {
        debug_assert!(state.position <= self.data.len());
        self.position = state.position;
        self.raw = state.raw;
    }

    pub fn eof(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Byte at the current position without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Byte `offset` bytes ahead of the current position
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.position + offset).copied()
    }

    /// Read one byte, advancing by one on success
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.advance(1);
        Some(byte)
    }

    /// Advance by `n` bytes, stopping at end of input
    pub fn advance(&mut self, n: usize) {
        self.position = self.position.saturating_add(n).min(self.data.len());
        self.furthest = self.furthest.max(self.position);
    }

    /// Jump to end of input. Returns `true` if the cursor moved.
    pub fn move_to_eof(&mut self) -> bool {
        let moved = !self.eof();
        self.advance(self.data.len() - self.position);
        moved
    }

    /// Unconsumed remainder of the buffer
    pub fn remaining(&self) -> &'src [u8] {
        &self.data[self.position..]
    }

    pub fn starts_with(&self, bytes: &[u8]) -> bool {
        self.remaining().starts_with(bytes)
    }

    /// Skip ASCII blanks (space, tab, vertical tab, form feed), stopping at
    /// line breaks. Returns the number of bytes skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        self.skip_while(|b| matches!(b, b' ' | b'\t' | 0x0B | 0x0C))
    }

    /// Like [`Cursor::skip_whitespace`] but also skips `\n` and `\r`
    pub fn skip_whitespace_or_newline(&mut self) -> usize {
        self.skip_while(|b| b.is_ascii_whitespace() || b == 0x0B)
    }

    fn skip_while(&mut self, predicate: impl Fn(u8) -> bool) -> usize {
        let count = self
            .remaining()
            .iter()
            .take_while(|&&b| predicate(b))
            .count();
        self.advance(count);
        count
    }

    /// Record `start..end` as the last raw match window
    pub fn mark(&mut self, start: usize, end: usize) {
        self.raw = Region::between(start, end);
    }

    /// Last raw match window recorded with [`Cursor::mark`]
    pub fn raw(&self) -> Region {
        self.raw
    }

    /// Borrow the text covered by `region`
    pub fn slice(&self, region: Region) -> Result<&'src str, CursorError> {
        let bytes = region.slice(self.data).ok_or(CursorError::OutOfRange {
            offset: region.offset,
            length: region.length,
            len: self.data.len(),
        })?;
        std::str::from_utf8(bytes).map_err(|e| CursorError::InvalidUtf8 {
            offset: region.offset + e.valid_up_to(),
        })
    }

    /// Decode exactly `length` bytes at `position` as an owned UTF-8 string
    pub fn materialize(&self, position: usize, length: usize) -> Result<String, CursorError> {
        self.slice(Region::new(position, length)).map(str::to_owned)
    }

    /// Reinterpret the raw window as a hexadecimal number, with an optional
    /// `0x` prefix
    pub fn as_hex(&self) -> Result<u64, CursorError> {
        let text = self.slice(self.raw)?;
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CursorError::InvalidHex {
                offset: self.raw.offset,
            });
        }
        u64::from_str_radix(digits, 16).map_err(|_| CursorError::HexOverflow {
            offset: self.raw.offset,
        })
    }

    /// Reinterpret the raw window as exactly one character
    pub fn as_char(&self) -> Result<char, CursorError> {
        let text = self.slice(self.raw)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CursorError::NotOneChar {
                offset: self.raw.offset,
                length: self.raw.length,
            }),
        }
    }

    /// One-based line and zero-based byte column of `offset`
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let upto = &self.data[..offset.min(self.data.len())];
        let line = upto.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = match upto.iter().rposition(|&b| b == b'\n') {
            Some(newline) => upto.len() - newline - 1,
            None => upto.len(),
        };
        (line, column)
    }
}
