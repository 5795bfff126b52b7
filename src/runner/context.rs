//! Invocation contexts
//!
//! Both contexts live only for the duration of a single `invoke` call.

use crate::error::Result;
use crate::runner::{Arguments, Logger, TaskRunner, Value};

/// Context handed to actions registered with [`Action::with_context`](crate::Action::with_context)
pub struct TaskContext<'a> {
    runner: &'a TaskRunner,
    logger: &'a dyn Logger,
    task: String,
    arguments: Arguments,
}

impl<'a> TaskContext<'a> {
    /// Build a context from the post-hook arguments
    pub fn new(
        runner: &'a TaskRunner,
        logger: &'a dyn Logger,
        task: impl Into<String>,
        arguments: Arguments,
    ) -> Self {
        TaskContext {
            runner,
            logger,
            task: task.into(),
            arguments,
        }
    }

    /// The runner that invoked this task
    pub fn runner(&self) -> &'a TaskRunner {
        self.runner
    }

    pub fn logger(&self) -> &'a dyn Logger {
        self.logger
    }

    /// Name of the task being run
    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Shorthand for `arguments().get(key)`
    pub fn argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    /// Invoke another task on the same runner
    pub fn invoke(&self, task: &str, arguments: Arguments) -> Result<Value> {
        self.runner.invoke(task, arguments)
    }
}

/// Arguments as seen by before-hooks
///
/// Each hook receives the context produced by the previous one, so a
/// replacement made by one hook is what the next hook and the task see.
#[derive(Debug, Clone, PartialEq)]
pub struct BeforeTaskContext {
    task: String,
    arguments: Arguments,
}

impl BeforeTaskContext {
    pub fn new(task: impl Into<String>, arguments: Arguments) -> Self {
        BeforeTaskContext {
            task: task.into(),
            arguments,
        }
    }

    /// Name of the task about to run
    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Replace the argument mapping wholesale
    pub fn set_arguments(&mut self, arguments: Arguments) {
        self.arguments = arguments;
    }

    pub fn into_arguments(self) -> Arguments {
        self.arguments
    }
}
