use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::error::{FatalError, FatalKind, GrammarError};
use crate::parser::{ParseOutcome, Parser, ParserId, ParserRef};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

struct Slot<T> {
    id: ParserId,
    target: OnceLock<ParserRef<T>>,
}

/// A parser whose target is assigned after construction
///
/// This is how recursive and mutually recursive rules are built: create the
/// handle, use clones of it inside the rules that refer to it, then bind the
/// real parser once with [`Deferred::set`]. Every clone shares one slot and
/// one [`ParserId`].
///
/// Parsing through the handle guards against left recursion. When loop
/// detection is on and the same deferred parser is already running at the
/// current position, the nested attempt fails instead of recursing forever.
///
/// A handle stored inside its own target forms a reference cycle, so such a
/// grammar is never freed. Grammars are expected to live for the process.
///
/// ```
/// use spancomb::and::AndExt;
/// use spancomb::ascii::byte::is_byte;
/// use spancomb::deferred::Deferred;
/// use spancomb::map::MapExt;
/// use spancomb::or::OrExt;
/// use spancomb::parser::Parser;
///
/// // nested := '(' nested ')' | 'x'
/// let nested = Deferred::<usize>::recursive(|nested| {
///     is_byte(b'(')
///         .then(nested)
///         .skip(is_byte(b')'))
///         .map(|depth| depth + 1)
///         .or(is_byte(b'x').map(|_| 0))
/// })
/// .unwrap();
///
/// assert_eq!(nested.try_parse("((x))").unwrap(), 2);
/// ```
pub struct Deferred<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Deferred {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("id", &self.slot.id)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deferred<T> {
    /// Create an unbound handle
    pub fn new() -> Self {
        Deferred {
            slot: Arc::new(Slot {
                id: ParserId::fresh(),
                target: OnceLock::new(),
            }),
        }
    }

    pub fn id(&self) -> ParserId {
        self.slot.id
    }

    pub fn is_bound(&self) -> bool {
        self.slot.target.get().is_some()
    }

    /// Bind the target. A handle can be bound only once.
    pub fn set<P>(&self, parser: P) -> Result<(), GrammarError>
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        self.set_shared(Arc::new(parser))
    }

    /// Bind an already type-erased target
    pub fn set_shared(&self, parser: ParserRef<T>) -> Result<(), GrammarError> {
        self.slot
            .target
            .set(parser)
            .map_err(|_| GrammarError::AlreadyBound(self.slot.id.as_u32()))
    }

    /// Build a self-referencing parser
    ///
    /// `build` receives an unbound handle to the parser being defined and
    /// returns its body, which becomes the handle's target.
    pub fn recursive<P, F>(build: F) -> Result<Self, GrammarError>
    where
        F: FnOnce(Deferred<T>) -> P,
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        let handle = Deferred::new();
        let body = build(handle.clone());
        handle.set(body)?;
        Ok(handle)
    }
}

impl<T> Parser for Deferred<T> {
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>, ctx: &mut ParseContext) -> ParseOutcome<T> {
        let id = self.slot.id;
        let position = cursor.position();
        let Some(target) = self.slot.target.get() else {
            return Err(FatalError::new(
                FatalKind::Unbound,
                format!("deferred parser {} was used before being bound", id.as_u32()),
                position,
            ));
        };

        ctx.enter(id, "deferred", position);
        let outcome = if ctx.loop_detection() {
            if !ctx.push_active(id, position) {
                debug!(parser = id.as_u32(), position, "loop detected");
                ctx.exit(id, "deferred", position, false);
                return Ok(None);
            }
            let outcome = target.parse(cursor, ctx);
            ctx.pop_active(id, position);
            outcome
        } else {
            target.parse(cursor, ctx)
        };
        ctx.exit(id, "deferred", position, matches!(outcome, Ok(Some(_))));
        outcome
    }
}
