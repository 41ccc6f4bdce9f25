use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::map::MapExt;
use crate::parser::{ParseOutcome, Parser, ParserRef, SharedExt};
use crate::region::Unit;
use crate::result::ParseResult;
use std::fmt;
use std::sync::Arc;

/// Function folding two operands into one
pub type Combine<T> = Arc<dyn Fn(T, T) -> T + Send + Sync>;

/// A binary operator: how to recognize it and how to fold its operands
pub struct Operator<T> {
    matcher: ParserRef<Unit>,
    combine: Combine<T>,
}

impl<T> Clone for Operator<T> {
    fn clone(&self) -> Self {
        Operator {
            matcher: Arc::clone(&self.matcher),
            combine: Arc::clone(&self.combine),
        }
    }
}

impl<T> fmt::Debug for Operator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator").finish_non_exhaustive()
    }
}

/// Pair an operator matcher with its folding function
pub fn op<M, F, T>(matcher: M, combine: F) -> Operator<T>
where
    M: Parser + Send + Sync + 'static,
    F: Fn(T, T) -> T + Send + Sync + 'static,
{
    Operator {
        matcher: matcher.discard().shared(),
        combine: Arc::new(combine),
    }
}

/// One level of left-associative binary operators over an operand
///
/// Parses an operand, then repeatedly tries the operators in order. On the
/// first operator that matches it parses another operand and folds it into
/// the accumulated value, left to right. It stops when no operator matches,
/// or when an operator matches but no operand follows it, in which case the
/// operator is left unconsumed. An operator and operand that together
/// consume nothing also end the level and are not folded. Once the first operand matched it never
/// fails.
#[derive(Clone)]
pub struct LeftAssoc<T> {
    operand: ParserRef<T>,
    operators: Vec<Operator<T>>,
}

impl<T> fmt::Debug for LeftAssoc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftAssoc")
            .field("operators", &self.operators.len())
            .finish()
    }
}

impl<T> LeftAssoc<T> {
    pub fn new(operand: ParserRef<T>) -> Self {
        LeftAssoc {
            operand,
            operators: Vec::new(),
        }
    }

    pub fn op(mut self, operator: Operator<T>) -> Self {
        self.operators.push(operator);
        self
    }

    /// Try to match one operator and the operand after it
    fn step(
        &self,
        cursor: &mut Cursor<'_>,
        ctx: &mut ParseContext,
    ) -> ParseOutcome<(&Combine<T>, T)> {
        for operator in &self.operators {
            let state = cursor.capture();
            if operator.matcher.parse(cursor, ctx)?.is_none() {
                continue;
            }
            match self.operand.parse(cursor, ctx)? {
                Some(right) => {
                    return Ok(Some(right.map(|value| (&operator.combine, value))));
                }
                None => {
                    cursor.rollback(state);
                    return Ok(None);
                }
            }
        }
        Ok(None)
    }
}

impl<T> Parser for LeftAssoc<T> {
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<T> {
        let Some(first) = self.operand.parse(cursor, ctx)? else {
            return Ok(None);
        };
        let start = first.start;
        let mut end = first.end;
        let mut accumulated = first.value;

        loop {
            let before_operator = cursor.capture();
            let Some(step) = self.step(cursor, ctx)? else {
                break;
            };
            if step.end == end {
                cursor.rollback(before_operator);
                break;
            }
            let (combine, right) = step.value;
            accumulated = combine(accumulated, right);
            end = step.end;
        }

        Ok(Some(ParseResult::new(start, end, accumulated)))
    }
}

/// Builder for a cascade of [`LeftAssoc`] levels
///
/// Levels are added from the tightest binding to the loosest; each level's
/// operand is the level before it, and the first level's operand is the base
/// operand.
///
/// ```
/// use spancomb::ascii::byte::is_byte;
/// use spancomb::ascii::number::i64;
/// use spancomb::parser::Parser;
/// use spancomb::precedence::{Precedence, op};
///
/// let expr = Precedence::new(i64())
///     .level([op(is_byte(b'*'), |a, b| a * b)])
///     .level([op(is_byte(b'+'), |a, b| a + b), op(is_byte(b'-'), |a, b| a - b)])
///     .build()
///     .unwrap();
///
/// assert_eq!(expr.try_parse("2+3*4-1").unwrap(), 13);
/// ```
pub struct Precedence<T> {
    operand: ParserRef<T>,
    levels: Vec<Vec<Operator<T>>>,
}

impl<T: 'static> Precedence<T> {
    pub fn new<P>(operand: P) -> Self
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        Precedence {
            operand: operand.shared(),
            levels: Vec::new(),
        }
    }

    /// Add the next, looser-binding level
    pub fn level(mut self, operators: impl IntoIterator<Item = Operator<T>>) -> Self {
        self.levels.push(operators.into_iter().collect());
        self
    }

    pub fn build(self) -> Result<LeftAssoc<T>, GrammarError> {
        let mut levels = self.levels.into_iter();
        let first = levels.next().ok_or(GrammarError::EmptyPrecedence)?;
        let innermost = LeftAssoc {
            operand: self.operand,
            operators: first,
        };

        Ok(levels.fold(innermost, |operand, operators| LeftAssoc {
            operand: operand.shared(),
            operators,
        }))
    }
}
