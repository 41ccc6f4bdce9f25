//! # SpanComb - Backtracking Parser Combinators
//!
//! Small parsers over a byte cursor combine into whole grammars. A parser
//! tree is built once, shared freely (it is `Send + Sync`) and reused for any
//! number of inputs; all per-call state lives in a [`Cursor`] and a
//! [`ParseContext`].
//!
//! - **Backtracking**: an ordinary failure leaves the cursor where it was, so
//!   alternatives can always be retried from the same position
//! - **Commit points**: [`commit::expect`] and [`commit::reject`] turn a
//!   failure into a fatal error that no alternative can swallow
//! - **Zero-copy**: matches are reported as [`Region`]s into the input and
//!   only materialized on request
//! - **Recursion**: [`deferred::Deferred`] ties recursive rules together and
//!   stops left recursion instead of overflowing the stack
//! - **Whitespace scoping**: [`scope::token`] skips whatever whitespace policy
//!   the enclosing [`scope::with_whitespace`] installed
//!
//! ```
//! use spancomb::ascii::{is_byte, u64};
//! use spancomb::parser::Parser;
//! use spancomb::precedence::{Precedence, op};
//! use spancomb::scope::token;
//!
//! let sum = Precedence::new(token(u64()))
//!     .level([op(token(is_byte(b'+')), |a, b| a + b)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(sum.try_parse("123 + 123").unwrap(), 246);
//! ```

pub mod and;
pub mod ascii;
pub mod between;
pub mod commit;
pub mod context;
pub mod convert;
pub mod cursor;
pub mod deferred;
pub mod dynamic;
pub mod error;
pub mod filter;
pub mod label;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod not;
pub mod optional;
pub mod options;
pub mod or;
pub mod parser;
pub mod position;
pub mod precedence;
pub mod region;
pub mod result;
pub mod scope;
pub mod separated_list;
pub mod separated_pair;
pub mod take_until;

pub use between::between;
pub use context::ParseContext;
pub use cursor::{Cursor, CursorState};
pub use deferred::Deferred;
pub use error::{CodeLoc, CursorError, FatalError, FatalKind, GrammarError, TryParseError};
pub use options::ParseOptions;
pub use or::Either;
pub use parser::{ParseOutcome, Parser, ParserId, ParserRef, SharedExt};
pub use position::{PositionExt, capture, position};
pub use precedence::{Precedence, op};
pub use region::{Region, Unit};
pub use result::ParseResult;
pub use scope::{CommentRules, token, with_whitespace};
pub use separated_list::separated_list;
pub use separated_pair::separated_pair;
