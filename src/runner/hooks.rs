//! Before-hooks
//!
//! Hooks for a task form a pipeline: the [`BeforeTaskContext`] is folded
//! through them in registration order and whatever comes out of the last
//! hook is what the task receives.

use crate::error::Result;
use crate::runner::{Arguments, BeforeTaskContext};
use std::collections::HashMap;
use std::fmt;

type HookFn = dyn Fn(BeforeTaskContext) -> Result<BeforeTaskContext>;

/// A single stage of the before-hook pipeline
pub struct BeforeHook(Box<HookFn>);

impl BeforeHook {
    /// Hook that receives the current context and returns the next one
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(BeforeTaskContext) -> Result<BeforeTaskContext> + 'static,
    {
        BeforeHook(Box::new(f))
    }

    /// Hook that only looks at the arguments
    pub fn observe<F>(f: F) -> Self
    where
        F: Fn(&BeforeTaskContext) -> Result<()> + 'static,
    {
        BeforeHook::new(move |ctx| {
            f(&ctx)?;
            Ok(ctx)
        })
    }

    /// Hook that returns the replacement argument mapping
    pub fn rewrite<F>(f: F) -> Self
    where
        F: Fn(&BeforeTaskContext) -> Result<Arguments> + 'static,
    {
        BeforeHook::new(move |mut ctx| {
            let arguments = f(&ctx)?;
            ctx.set_arguments(arguments);
            Ok(ctx)
        })
    }

    pub fn apply(&self, context: BeforeTaskContext) -> Result<BeforeTaskContext> {
        (self.0)(context)
    }
}

impl fmt::Debug for BeforeHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BeforeHook")
    }
}

/// Ordered before-hooks per task name
#[derive(Debug, Default)]
pub struct HookTable {
    before: HashMap<String, Vec<BeforeHook>>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `name` has a hook list, leaving existing hooks alone
    pub fn ensure(&mut self, name: &str) {
        if !self.before.contains_key(name) {
            self.before.insert(name.to_string(), Vec::new());
        }
    }

    /// Append `hook` to the hooks of `name`
    pub fn add_before(&mut self, name: impl Into<String>, hook: BeforeHook) {
        self.before.entry(name.into()).or_default().push(hook);
    }

    /// Run the hooks for the context's task, in order
    ///
    /// A task without hooks gets its context back untouched. The first
    /// failing hook stops the pipeline.
    pub fn dispatch(&self, context: BeforeTaskContext) -> Result<BeforeTaskContext> {
        match self.before.get(context.task()) {
            Some(hooks) => hooks.iter().try_fold(context, |ctx, hook| hook.apply(ctx)),
            None => Ok(context),
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.before.get(name).map_or(0, Vec::len)
    }

    pub fn has_entry(&self, name: &str) -> bool {
        self.before.contains_key(name)
    }
}
