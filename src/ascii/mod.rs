//! Terminal parsers over ASCII input

pub mod byte;
pub mod class;
pub mod eof;
pub mod identifier;
pub mod keyword;
pub mod number;
pub mod predicate;
pub mod string;
pub mod text;
pub mod whitespace;

pub use byte::{between_bytes, byte, is_byte, is_char};
pub use class::{ByteSet, CharClass, char_class};
pub use eof::eof;
pub use identifier::{identifier, is_ident_continue, is_ident_start};
pub use keyword::keyword;
pub use number::{Number, digit, digits, f64, i64, number, u64};
pub use predicate::{take_while, take_while1};
pub use string::{quoted, string_literal};
pub use text::text;
pub use whitespace::{inline_whitespace, whitespace, whitespaces};
