use serde::{Deserialize, Serialize};

/// Per-call parse configuration
///
/// Unknown fields are rejected and missing fields take their defaults, so a
/// grammar can ship options as JSON or TOML next to its sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Whether the default whitespace skip also crosses line breaks
    pub skip_newlines: bool,
    /// Fail a deferred parser re-entered at the same position instead of
    /// recursing. Only disable for grammars that change the context between
    /// attempts at one position.
    pub loop_detection: bool,
    /// Whether `try_parse` rejects input left over after a successful match
    pub require_eof: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            skip_newlines: true,
            loop_detection: true,
            require_eof: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_newlines(mut self, skip_newlines: bool) -> Self {
        self.skip_newlines = skip_newlines;
        self
    }

    pub fn with_loop_detection(mut self, loop_detection: bool) -> Self {
        self.loop_detection = loop_detection;
        self
    }

    pub fn with_require_eof(mut self, require_eof: bool) -> Self {
        self.require_eof = require_eof;
        self
    }
}
