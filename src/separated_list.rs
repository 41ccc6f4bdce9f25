use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser};
use crate::result::ParseResult;

/// Parser that matches a list of items separated by a separator parser
///
/// Parses: `item (separator item)*`
/// and returns a vector of the parsed items with separators discarded.
///
/// # Note
/// - Requires at least one element
/// - A trailing separator is left unconsumed and the list ends before it
/// - The list also ends when a separator and item together consume nothing
/// - Does not handle whitespace automatically
#[derive(Debug, Clone)]
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<P, PS> Parser for SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let Some(first) = self.parser.parse(cursor, ctx)? else {
            return Ok(None);
        };
        let start = first.start;
        let mut end = first.end;
        let mut results = vec![first.value];

        loop {
            let before_separator = cursor.capture();
            if self.separator.parse(cursor, ctx)?.is_none() {
                break;
            }

            match self.parser.parse(cursor, ctx)? {
                Some(item) if item.end == before_separator.position() => {
                    cursor.rollback(before_separator);
                    break;
                }
                Some(item) => {
                    end = item.end;
                    results.push(item.value);
                }
                None => {
                    cursor.rollback(before_separator);
                    break;
                }
            }
        }

        Ok(Some(ParseResult::new(start, end, results)))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser,
{
    SeparatedList::new(parser, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::byte::{between_bytes, is_byte};
    use crate::ascii::number::i64;
    use crate::ascii::text::text;
    use crate::optional::optional;

    fn run<P: Parser>(parser: &P, input: &str) -> (Option<ParseResult<P::Output>>, usize) {
        let mut cursor = Cursor::new(input);
        let mut ctx = ParseContext::default();
        let result = parser.parse(&mut cursor, &mut ctx).unwrap();
        (result, cursor.position())
    }

    #[test]
    fn test_single_element() {
        let parser = separated_list(i64(), is_byte(b','));
        let (result, _) = run(&parser, "42");
        assert_eq!(result.unwrap().value, vec![42]);
    }

    #[test]
    fn test_multiple_elements() {
        let parser = separated_list(i64(), is_byte(b','));
        let (result, position) = run(&parser, "1,2,3;");
        assert_eq!(result.unwrap().value, vec![1, 2, 3]);
        assert_eq!(position, 5);
    }

    #[test]
    fn test_multi_byte_separator() {
        let parser = separated_list(text("ab"), text("::"));
        let (result, _) = run(&parser, "ab::ab");
        assert_eq!(result.unwrap().value.len(), 2);
    }

    #[test]
    fn test_trailing_separator_left_unconsumed() {
        let parser = separated_list(between_bytes(b'a', b'z'), is_byte(b','));
        let (result, position) = run(&parser, "a,b,");
        let result = result.unwrap();

        assert_eq!(result.value, vec![b'a', b'b']);
        // The span stops before the trailing separator
        assert_eq!(result.end, 3);
        assert_eq!(position, 3);
    }

    #[test]
    fn test_empty_list_fails() {
        let parser = separated_list(i64(), is_byte(b','));
        let (result, position) = run(&parser, ",1");
        assert!(result.is_none());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_zero_length_separator_and_item_terminate() {
        let parser = separated_list(optional(is_byte(b'a')), optional(is_byte(b',')));
        let (result, position) = run(&parser, "x");
        let result = result.unwrap();

        assert_eq!(result.value, vec![None]);
        assert_eq!(result.end, 0);
        assert_eq!(position, 0);
    }
}
