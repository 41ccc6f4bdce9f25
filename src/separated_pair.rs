use crate::and::And;
use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser that matches two values separated by a parser
///
/// This combinator parses: `left + separator + right`
/// and returns a tuple `(left_value, right_value)` with the separator discarded.
/// It does not skip whitespace; wrap the parts in [`token`](crate::scope::token)
/// for that.
///
/// # Examples
/// - `"1.0,2.0"` with separator `,` → `(1.0, 2.0)`
/// - `"hello->world"` with separator `->` → `("hello", "world")`
#[derive(Debug, Clone)]
pub struct SeparatedPair<P1, PS, P2> {
    inner: And<And<P1, PS>, P2>,
}

impl<P1, PS, P2> SeparatedPair<P1, PS, P2> {
    pub fn new(left: P1, separator: PS, right: P2) -> Self {
        SeparatedPair {
            inner: And::new(And::new(left, separator), right),
        }
    }
}

impl<P1, PS, P2> Parser for SeparatedPair<P1, PS, P2>
where
    P1: Parser,
    PS: Parser,
    P2: Parser,
{
    type Output = (P1::Output, P2::Output);

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        Ok(self
            .inner
            .parse(cursor, ctx)?
            .map(|result| result.map(|((left, _), right)| (left, right))))
    }
}

/// Creates a parser that matches two values separated by the given parser
pub fn separated_pair<P1, PS, P2>(left: P1, separator: PS, right: P2) -> SeparatedPair<P1, PS, P2>
where
    P1: Parser,
    PS: Parser,
    P2: Parser,
{
    SeparatedPair::new(left, separator, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::byte::is_byte;
    use crate::ascii::number::f64;
    use crate::ascii::text::text;

    #[test]
    fn test_numbers_no_space() {
        let parser = separated_pair(f64(), is_byte(b','), f64());
        let (left, right) = parser.try_parse("1.5,2.7").unwrap();
        assert!((left - 1.5).abs() < f64::EPSILON);
        assert!((right - 2.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strings() {
        let parser = separated_pair(text("hello"), text("->"), text("world"));
        let (left, right) = parser.try_parse("hello->world").unwrap();
        assert_eq!(left, "hello");
        assert_eq!(right, "world");
    }

    #[test]
    fn test_no_separator_fails() {
        let parser = separated_pair(f64(), is_byte(b','), f64());
        assert!(parser.try_parse("1.0 2.0").is_err());
    }

    #[test]
    fn test_only_left_value_fails_without_consuming() {
        let mut cursor = Cursor::new("1.0,");
        let mut ctx = ParseContext::default();
        let parser = separated_pair(f64(), is_byte(b','), f64());

        assert!(parser.parse(&mut cursor, &mut ctx).unwrap().is_none());
        assert_eq!(cursor.position(), 0);
    }
}
