//! The task runner
//!
//! Owns the registry, the hook table and the invoker. Registration needs
//! `&mut self`, invocation only `&self`, so the tables cannot change while a
//! task (or any of its sub-tasks) is running.

use crate::error::{RegistryError, Result, TaskError};
use crate::runner::{
    Action, Arguments, BeforeHook, BeforeTaskContext, ConsoleLogger, HookTable, Logger,
    TaskInvoker, TaskList, TaskRegistry, Value,
};
use std::sync::Arc;

/// Something that registers tasks in bulk
pub trait TaskRunnerExtension {
    /// Register tasks, composed tasks and hooks on `runner`
    fn amend_tasks(&self, runner: &mut TaskRunner);
}

impl<F> TaskRunnerExtension for F
where
    F: Fn(&mut TaskRunner),
{
    fn amend_tasks(&self, runner: &mut TaskRunner) {
        self(runner)
    }
}

/// Registry of named tasks
pub struct TaskRunner {
    tasks: TaskRegistry,
    hooks: HookTable,
    invoker: TaskInvoker,
    logger: Arc<dyn Logger>,
}

impl TaskRunner {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        TaskRunner {
            tasks: TaskRegistry::new(),
            hooks: HookTable::new(),
            invoker: TaskInvoker::new(),
            logger,
        }
    }

    /// Logger forwarded to tasks through their context
    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Read-only view of the registered tasks
    pub fn tasks(&self) -> TaskList<'_> {
        TaskList::new(&self.tasks)
    }

    /// Number of before-hooks attached to `task`
    pub fn hook_count(&self, task: &str) -> usize {
        self.hooks.count(task)
    }

    /// Register `action` under `task`, replacing any previous action
    pub fn add(&mut self, task: impl Into<String>, action: Action) {
        let task = task.into();
        self.hooks.ensure(&task);
        self.tasks.add(task, action);
    }

    /// Register `task` as the ordered sequence of `composed` tasks
    ///
    /// Each sub-task is invoked through this runner with the arguments the
    /// composed task received, hooks included. The first failing sub-task
    /// stops the sequence and its error becomes the composed task's error.
    pub fn add_composed<I, S>(&mut self, task: impl Into<String>, composed: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let composed: Vec<String> = composed.into_iter().map(Into::into).collect();
        self.add(
            task,
            Action::with_context(move |ctx| {
                for sub_task in &composed {
                    ctx.invoke(sub_task, ctx.arguments().clone())?;
                }
                Ok(Value::Null)
            }),
        );
    }

    /// Attach a before-hook to `task`
    ///
    /// The task does not have to be registered yet; the hook runs once it is.
    pub fn before(&mut self, task: impl Into<String>, hook: BeforeHook) {
        self.hooks.add_before(task, hook);
    }

    /// Run `task` with `arguments`
    ///
    /// Fails with [`TaskError::TaskNotDefined`] before any hook runs if the
    /// task is unknown. Errors from hooks and from the action are returned
    /// unchanged.
    pub fn invoke(&self, task: &str, arguments: Arguments) -> Result<Value> {
        let action = self
            .tasks
            .find(task)
            .map_err(|RegistryError::UndefinedTask(name)| TaskError::TaskNotDefined(name))?;

        self.logger.debug(&format!("Running task: {}", task));

        let hook_count = self.hooks.count(task);
        if hook_count > 0 {
            self.logger.debug(&format!(
                "Dispatching {} before hook(s) for '{}'",
                hook_count, task
            ));
        }
        let context = self
            .hooks
            .dispatch(BeforeTaskContext::new(task, arguments))?;

        let value = self
            .invoker
            .invoke(action, self, task, context.into_arguments())?;

        self.logger.debug(&format!("Task completed: {}", task));
        Ok(value)
    }

    /// Let `extension` register its tasks on this runner
    pub fn extend(&mut self, extension: &dyn TaskRunnerExtension) {
        extension.amend_tasks(self);
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleLogger::default()))
    }
}
