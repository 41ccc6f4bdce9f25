use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A location in the input, with enough of the input kept to render context
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'src> {
    code: &'src [u8],
    /// The position in `code` the location points at
    loc: usize,
}

impl<'src> CodeLoc<'src> {
    pub fn new(code: &'src [u8], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Note: We return byte offset instead of column number because column
    /// calculation depends on encoding and rendering (tabs, wide characters).
    /// The byte offset within the line is unambiguous and useful for debugging.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, &byte) in self.code.iter().enumerate() {
            if i >= self.loc {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        let byte_offset = self.loc.saturating_sub(line_start);
        ReadablePosition { line, byte_offset }
    }

    /// Get lines of context around the position
    /// Returns up to 2 lines before and after the pointed-at line
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let text = String::from_utf8_lossy(self.code);
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;

        let mut lines = Vec::new();
        for (index, content) in text.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first || current_line > last {
                continue;
            }
            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        writeln!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )?;
        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Failure to reinterpret bytes held by a [`Cursor`](crate::Cursor)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("region {offset}+{length} is out of range for input of {len} bytes")]
    OutOfRange {
        offset: usize,
        length: usize,
        len: usize,
    },
    #[error("invalid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("raw match at byte {offset} is not a hexadecimal number")]
    InvalidHex { offset: usize },
    #[error("hexadecimal number at byte {offset} does not fit in 64 bits")]
    HexOverflow { offset: usize },
    #[error("raw match {offset}+{length} is not exactly one character")]
    NotOneChar { offset: usize, length: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalKind {
    /// A commit point saw its parser fail
    Committed,
    /// A commit point saw a forbidden parser succeed
    Rejected,
    /// A deferred parser ran before its target was assigned
    Unbound,
}

/// Non-recoverable parse failure
///
/// Raised only by commit points and by grammar wiring bugs. It is never
/// caught by another combinator and surfaces from `try_parse` as
/// [`TryParseError::Fatal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at byte {position})")]
pub struct FatalError {
    pub kind: FatalKind,
    pub message: Cow<'static, str>,
    pub position: usize,
}

impl FatalError {
    pub fn new(kind: FatalKind, message: impl Into<Cow<'static, str>>, position: usize) -> Self {
        FatalError {
            kind,
            message: message.into(),
            position,
        }
    }
}

/// Mistakes made while building a grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("deferred parser {0} already has a target")]
    AlreadyBound(u32),
    #[error("precedence table has no operator levels")]
    EmptyPrecedence,
}

/// Error returned by [`Parser::try_parse`](crate::Parser::try_parse)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TryParseError<'src> {
    /// The grammar did not match. The location is the furthest offset reached.
    #[error("Syntax error at {loc}")]
    NoMatch { loc: CodeLoc<'src> },
    /// The grammar matched a prefix but input remains
    #[error("Unexpected trailing input at {loc}")]
    TrailingInput { loc: CodeLoc<'src> },
    /// A commit point or wiring bug stopped the parse
    #[error("Fatal error: {error}, at {loc}")]
    Fatal {
        error: FatalError,
        loc: CodeLoc<'src>,
    },
}

impl<'src> TryParseError<'src> {
    /// Returns the position this error points at
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    pub fn loc(&self) -> CodeLoc<'src> {
        match self {
            TryParseError::NoMatch { loc }
            | TryParseError::TrailingInput { loc }
            | TryParseError::Fatal { loc, .. } => *loc,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, TryParseError::Fatal { .. })
    }
}
