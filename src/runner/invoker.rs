//! Calling convention dispatch

use crate::error::Result;
use crate::runner::{Action, Arguments, TaskContext, TaskRunner, Value};

/// Calls an action the way it asked to be called
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskInvoker;

impl TaskInvoker {
    pub fn new() -> Self {
        TaskInvoker
    }

    /// Call `action` for `task`
    ///
    /// Context-accepting actions get a fresh [`TaskContext`] built from
    /// `arguments`; plain actions are called with nothing and the arguments
    /// are dropped. The action's result is returned as is.
    pub fn invoke(
        &self,
        action: &Action,
        runner: &TaskRunner,
        task: &str,
        arguments: Arguments,
    ) -> Result<Value> {
        match action {
            Action::Plain(f) => f(),
            Action::Contextual(f) => {
                let context = TaskContext::new(runner, runner.logger(), task, arguments);
                f(&context)
            }
        }
    }
}
