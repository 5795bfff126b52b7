//! Registering declared tasks on a runner

use crate::config::{config_dir, parse_config_file, validate_config, Config};
use crate::error::Result;
use crate::runner::{HookDefinition, Shell, TaskDefinition, TaskRunner, TaskRunnerExtension};
use std::path::{Path, PathBuf};

/// Registers the tasks and before-hooks of a config file
#[derive(Debug, Clone)]
pub struct ConfigExtension {
    tasks: Vec<TaskDefinition>,
    hooks: Vec<(String, Vec<HookDefinition>)>,
    shell: Shell,
}

impl ConfigExtension {
    /// Build from an already parsed configuration
    ///
    /// Commands run in `base_dir`, usually the directory of the config file.
    pub fn from_config(config: &Config, base_dir: PathBuf) -> Result<Self> {
        validate_config(config)?;

        let tasks = config
            .tasks
            .iter()
            .map(|(name, task)| TaskDefinition::from_config(name.clone(), task.clone()))
            .collect::<Result<Vec<_>>>()?;

        let mut hooks = Vec::with_capacity(config.before.len());
        for (task, declared) in &config.before {
            let definitions = declared
                .iter()
                .map(|hook| HookDefinition::from_config(task, hook.clone()))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            hooks.push((task.clone(), definitions));
        }

        let mut shell = Shell::new(base_dir);
        if let Some(interpreter) = &config.interpreter {
            shell = shell.with_interpreter(interpreter.clone());
        }

        Ok(ConfigExtension { tasks, hooks, shell })
    }

    /// Parse, validate and wrap the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let config = parse_config_file(path)?;
        Self::from_config(&config, config_dir(path))
    }

    /// Declared tasks, sorted by name
    pub fn tasks(&self) -> &[TaskDefinition] {
        &self.tasks
    }

    /// Declared task named `name`
    pub fn task(&self, name: &str) -> Option<&TaskDefinition> {
        self.tasks.iter().find(|task| task.name == name)
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }
}

impl TaskRunnerExtension for ConfigExtension {
    fn amend_tasks(&self, runner: &mut TaskRunner) {
        for task in &self.tasks {
            task.register(runner, &self.shell);
        }

        for (task, hooks) in &self.hooks {
            for hook in hooks {
                runner.before(task.clone(), hook.clone().into_hook());
            }
        }
    }
}
