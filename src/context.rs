use crate::cursor::Cursor;
use crate::error::FatalError;
use crate::options::ParseOptions;
use crate::parser::{ParserId, ParserRef};
use crate::region::Unit;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// Per-call parse session state
///
/// Created once per top-level parse and threaded through every parser call
/// next to the [`Cursor`]. Holds the whitespace policy, the cycle-detection
/// set and named flags. The whitespace slot and the flags are single mutable
/// values, not stacks: every combinator that changes one restores it on all
/// exit paths, which [`WhitespaceScope`] and [`FlagScope`] do on drop.
#[derive(Default)]
pub struct ParseContext {
    options: ParseOptions,
    whitespace: Option<ParserRef<Unit>>,
    /// (parser, position) pairs currently being parsed
    active: HashSet<(ParserId, usize)>,
    flags: BTreeSet<Cow<'static, str>>,
}

impl std::fmt::Debug for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseContext")
            .field("options", &self.options)
            .field("whitespace", &self.whitespace.as_ref().map(|_| "<parser>"))
            .field("active", &self.active.len())
            .field("flags", &self.flags)
            .finish()
    }
}

impl ParseContext {
    pub fn new(options: ParseOptions) -> Self {
        ParseContext {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn loop_detection(&self) -> bool {
        self.options.loop_detection
    }

    /// Instrumentation hook called when a named or deferred parser starts
    pub fn enter(&mut self, id: ParserId, label: &str, position: usize) {
        trace!(parser = id.as_u32(), label, position, "enter");
    }

    /// Instrumentation hook called when a named or deferred parser returns
    pub fn exit(&mut self, id: ParserId, label: &str, position: usize, matched: bool) {
        trace!(parser = id.as_u32(), label, position, matched, "exit");
    }

    /// Skip whitespace at the cursor
    ///
    /// Runs the installed whitespace parser if there is one, otherwise the
    /// cursor's own skip according to `skip_newlines`. The installed parser
    /// runs with the slot emptied, so tokens inside it fall back to the
    /// default skip instead of recursing.
    pub fn skip_whitespace(&mut self, cursor: &mut Cursor<'_>) -> Result<(), FatalError> {
        match self.whitespace.take() {
            Some(whitespace) => {
                let outcome = whitespace.parse(cursor, self);
                self.whitespace = Some(whitespace);
                outcome.map(|_| ())
            }
            None => {
                if self.options.skip_newlines {
                    cursor.skip_whitespace_or_newline();
                } else {
                    cursor.skip_whitespace();
                }
                Ok(())
            }
        }
    }

    pub fn whitespace(&self) -> Option<&ParserRef<Unit>> {
        self.whitespace.as_ref()
    }

    /// Install `whitespace` and return the previous value. Callers must put
    /// the previous value back; prefer [`ParseContext::scoped_whitespace`].
    pub fn replace_whitespace(
        &mut self,
        whitespace: Option<ParserRef<Unit>>,
    ) -> Option<ParserRef<Unit>> {
        std::mem::replace(&mut self.whitespace, whitespace)
    }

    /// Install `whitespace` until the returned scope is dropped
    pub fn scoped_whitespace(
        &mut self,
        whitespace: Option<ParserRef<Unit>>,
    ) -> WhitespaceScope<'_> {
        let previous = self.replace_whitespace(whitespace);
        WhitespaceScope {
            ctx: self,
            previous,
        }
    }

    pub fn is_active_at(&self, id: ParserId, position: usize) -> bool {
        self.active.contains(&(id, position))
    }

    /// Mark `id` active at `position`. Returns `false` if it already was.
    pub fn push_active(&mut self, id: ParserId, position: usize) -> bool {
        self.active.insert((id, position))
    }

    pub fn pop_active(&mut self, id: ParserId, position: usize) {
        let removed = self.active.remove(&(id, position));
        debug_assert!(removed, "pop_active without matching push_active");
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Set or clear a flag. Returns the previous state.
    pub fn set_flag(&mut self, name: impl Into<Cow<'static, str>>, on: bool) -> bool {
        let name = name.into();
        if on {
            !self.flags.insert(name)
        } else {
            self.flags.remove(&name)
        }
    }

    /// Set or clear a flag until the returned scope is dropped
    pub fn scoped_flag(&mut self, name: impl Into<Cow<'static, str>>, on: bool) -> FlagScope<'_> {
        let name = name.into();
        let previous = self.set_flag(name.clone(), on);
        FlagScope {
            ctx: self,
            name,
            previous,
        }
    }
}

/// Restores the previous whitespace parser when dropped
pub struct WhitespaceScope<'a> {
    ctx: &'a mut ParseContext,
    previous: Option<ParserRef<Unit>>,
}

impl Deref for WhitespaceScope<'_> {
    type Target = ParseContext;

    fn deref(&self) -> &ParseContext {
        &*self.ctx
    }
}

impl DerefMut for WhitespaceScope<'_> {
    fn deref_mut(&mut self) -> &mut ParseContext {
        &mut *self.ctx
    }
}

impl Drop for WhitespaceScope<'_> {
    fn drop(&mut self) {
        self.ctx.whitespace = self.previous.take();
    }
}

/// Restores the previous state of a flag when dropped
pub struct FlagScope<'a> {
    ctx: &'a mut ParseContext,
    name: Cow<'static, str>,
    previous: bool,
}

impl Deref for FlagScope<'_> {
    type Target = ParseContext;

    fn deref(&self) -> &ParseContext {
        &*self.ctx
    }
}

impl DerefMut for FlagScope<'_> {
    fn deref_mut(&mut self) -> &mut ParseContext {
        &mut *self.ctx
    }
}

impl Drop for FlagScope<'_> {
    fn drop(&mut self) {
        let name = std::mem::take(&mut self.name);
        self.ctx.set_flag(name, self.previous);
    }
}
