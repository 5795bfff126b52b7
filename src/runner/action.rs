//! Task actions
//!
//! How an action is called is decided when it is built: [`Action::new`] for
//! actions that take nothing, [`Action::with_context`] for actions that want
//! the arguments, the logger or the runner.

use crate::error::Result;
use crate::runner::{TaskContext, Value};
use std::fmt;

type PlainFn = dyn Fn() -> Result<Value>;
type ContextFn = dyn for<'a> Fn(&TaskContext<'a>) -> Result<Value>;

/// The unit of work registered under a task name
pub enum Action {
    /// Called with no arguments; invocation arguments are ignored
    Plain(Box<PlainFn>),

    /// Called with a fresh [`TaskContext`]
    Contextual(Box<ContextFn>),
}

impl Action {
    /// Zero-argument action
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<Value> + 'static,
    {
        Action::Plain(Box::new(f))
    }

    /// Context-accepting action
    pub fn with_context<F>(f: F) -> Self
    where
        F: for<'a> Fn(&TaskContext<'a>) -> Result<Value> + 'static,
    {
        Action::Contextual(Box::new(f))
    }

    pub fn accepts_context(&self) -> bool {
        matches!(self, Action::Contextual(_))
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Plain(_) => f.write_str("Action::Plain"),
            Action::Contextual(_) => f.write_str("Action::Contextual"),
        }
    }
}
