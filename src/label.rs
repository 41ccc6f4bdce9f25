use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::parser::{ParseOutcome, Parser, ParserId};
use serde::Serialize;
use std::borrow::Cow;

/// A value tagged with the name of the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Named<T> {
    pub name: Cow<'static, str>,
    pub value: T,
}

/// Tags a successful value with a name
///
/// The name has no effect on matching. It is carried in the output and
/// reported to the context's enter and exit hooks.
#[derive(Debug, Clone)]
pub struct Label<P> {
    id: ParserId,
    name: Cow<'static, str>,
    parser: P,
}

impl<P> Label<P> {
    pub fn new(name: impl Into<Cow<'static, str>>, parser: P) -> Self {
        Label {
            id: ParserId::fresh(),
            name: name.into(),
            parser,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<P> Parser for Label<P>
where
    P: Parser,
{
    type Output = Named<P::Output>;

    fn parse(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<Self::Output> {
        let position = cursor.position();
        ctx.enter(self.id, &self.name, position);
        let outcome = self.parser.parse(cursor, ctx);
        ctx.exit(self.id, &self.name, position, matches!(outcome, Ok(Some(_))));

        Ok(outcome?.map(|result| {
            result.map(|value| Named {
                name: self.name.clone(),
                value,
            })
        }))
    }
}

pub fn label<P>(name: impl Into<Cow<'static, str>>, parser: P) -> Label<P>
where
    P: Parser,
{
    Label::new(name, parser)
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt: Parser + Sized {
    fn label(self, name: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(name, self)
    }
}

impl<P> LabelExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::i64;
    use crate::many::many;
    use crate::scope::token;

    #[test]
    fn test_label_tags_value() {
        let parser = i64().label("int");
        assert_eq!(
            parser.try_parse("42").unwrap(),
            Named {
                name: "int".into(),
                value: 42
            }
        );
    }

    #[test]
    fn test_label_does_not_change_matching() {
        let mut cursor = Cursor::new("x");
        let mut ctx = ParseContext::default();

        assert!(label("int", i64()).parse(&mut cursor, &mut ctx).unwrap().is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_named_serializes() {
        let parser = many(token(i64()).label("item"));
        let items = parser.try_parse("1 2").unwrap();
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"item","value":1},{"name":"item","value":2}]"#
        );
    }
}
