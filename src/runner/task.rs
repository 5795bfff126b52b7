//! Declared tasks
//!
//! Runtime form of the tasks and before-hooks read from a config file, and
//! their registration on a [`TaskRunner`].

use crate::config;
use crate::error::{ConfigError, ConfigResult, Result, TaskError};
use crate::runner::{execute_command, Action, Arguments, BeforeHook, Command, Shell, TaskRunner, Value};

/// What a declared task does when invoked
#[derive(Debug, Clone, PartialEq)]
pub enum TaskShape {
    /// Shell commands run in order
    Commands(Vec<Command>),

    /// Other tasks invoked in order
    Composed(Vec<String>),
}

/// Runtime task representation
#[derive(Debug, Clone)]
pub struct TaskDefinition {
    /// Task name
    pub name: String,

    /// Usage description
    pub usage: Option<String>,

    /// Longer description
    pub description: Option<String>,

    /// Hidden from the CLI
    pub private: bool,

    /// Do not echo commands
    pub quiet: bool,

    pub shape: TaskShape,
}

impl TaskDefinition {
    /// Create a task from configuration
    ///
    /// A task has to declare exactly one of `run` and `tasks`.
    pub fn from_config(name: String, config: config::Task) -> Result<Self> {
        let shape = match (config.run.is_empty(), config.tasks.is_empty()) {
            (false, true) => TaskShape::Commands(
                config.run.into_iter().map(Command::from_config).collect(),
            ),
            (true, false) => TaskShape::Composed(config.tasks),
            (true, true) => {
                return Err(TaskError::UnsupportedCallableShape {
                    task: name,
                    reason: "declare either `run` or `tasks`".to_string(),
                })
            }
            (false, false) => {
                return Err(TaskError::UnsupportedCallableShape {
                    task: name,
                    reason: "`run` and `tasks` cannot be combined".to_string(),
                })
            }
        };

        Ok(TaskDefinition {
            name,
            usage: config.usage,
            description: config.description,
            private: config.private,
            quiet: config.quiet,
            shape,
        })
    }

    /// Names of the tasks this task is composed of
    pub fn sub_tasks(&self) -> &[String] {
        match &self.shape {
            TaskShape::Composed(tasks) => tasks,
            TaskShape::Commands(_) => &[],
        }
    }

    /// Register this task on `runner`
    pub fn register(&self, runner: &mut TaskRunner, shell: &Shell) {
        match &self.shape {
            TaskShape::Composed(tasks) => runner.add_composed(self.name.clone(), tasks.clone()),
            TaskShape::Commands(commands) => {
                let commands = commands.clone();
                let shell = shell.clone();
                let quiet = self.quiet;
                runner.add(
                    self.name.clone(),
                    Action::with_context(move |ctx| {
                        for cmd in &commands {
                            execute_command(cmd, ctx, &shell, quiet)?;
                        }
                        Ok(Value::Null)
                    }),
                );
            }
        }
    }
}

/// Runtime representation of a declared before-hook
#[derive(Debug, Clone, PartialEq)]
pub enum HookDefinition {
    /// Fill in keys that are missing
    Default(Arguments),

    /// Overwrite keys
    Set(Arguments),

    /// Swap the whole mapping
    Replace(Arguments),

    /// Drop keys
    Unset(Vec<String>),
}

impl HookDefinition {
    /// Create from config; exactly one field must be set
    pub fn from_config(task: &str, config: config::Hook) -> ConfigResult<Self> {
        let mut found = Vec::new();
        if let Some(args) = config.default {
            found.push(HookDefinition::Default(args));
        }
        if let Some(args) = config.set {
            found.push(HookDefinition::Set(args));
        }
        if let Some(args) = config.replace {
            found.push(HookDefinition::Replace(args));
        }
        if let Some(keys) = config.unset {
            found.push(HookDefinition::Unset(keys));
        }

        match found.len() {
            1 => Ok(found.remove(0)),
            0 => Err(ConfigError::Invalid(format!(
                "before hook for '{}' must set one of default, set, replace or unset",
                task
            ))),
            _ => Err(ConfigError::Invalid(format!(
                "before hook for '{}' sets more than one of default, set, replace or unset",
                task
            ))),
        }
    }

    /// The mapping this hook turns `arguments` into
    pub fn apply(&self, arguments: &Arguments) -> Arguments {
        match self {
            HookDefinition::Default(defaults) => {
                let mut next = arguments.clone();
                next.merge_missing(defaults);
                next
            }
            HookDefinition::Set(values) => {
                let mut next = arguments.clone();
                next.merge(values);
                next
            }
            HookDefinition::Replace(values) => values.clone(),
            HookDefinition::Unset(keys) => {
                let mut next = arguments.clone();
                for key in keys {
                    next.remove(key);
                }
                next
            }
        }
    }

    pub fn into_hook(self) -> BeforeHook {
        BeforeHook::rewrite(move |ctx| Ok(self.apply(ctx.arguments())))
    }
}
