//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, Result};
use crate::runner::{HookDefinition, TaskDefinition};
use std::collections::HashSet;

/// Validate a complete configuration
///
/// Hooks may name tasks that the file does not declare; those tasks can
/// still be registered in code.
pub fn validate_config(config: &Config) -> Result<()> {
    if matches!(&config.interpreter, Some(interpreter) if interpreter.is_empty()) {
        return Err(ConfigError::Invalid("interpreter cannot be empty".to_string()).into());
    }

    for (name, task) in &config.tasks {
        let definition = TaskDefinition::from_config(name.clone(), task.clone())?;
        for sub_task in definition.sub_tasks() {
            if !config.tasks.contains_key(sub_task) {
                return Err(ConfigError::TaskNotFound(sub_task.clone()).into());
            }
        }
    }

    for (task, hooks) in &config.before {
        for hook in hooks {
            HookDefinition::from_config(task, hook.clone())?;
        }
    }

    detect_circular_composition(config)?;

    Ok(())
}

/// Detect cycles between composed tasks
fn detect_circular_composition(config: &Config) -> ConfigResult<()> {
    let mut visited = HashSet::new();
    for task_name in config.tasks.keys() {
        let mut stack = Vec::new();
        check_task_cycle(config, task_name, &mut visited, &mut stack)?;
    }
    Ok(())
}

/// Depth-first walk over the `tasks` lists
fn check_task_cycle<'a>(
    config: &'a Config,
    task_name: &'a str,
    visited: &mut HashSet<&'a str>,
    stack: &mut Vec<&'a str>,
) -> ConfigResult<()> {
    if stack.contains(&task_name) {
        stack.push(task_name);
        return Err(ConfigError::CircularDependency(stack.join(" -> ")));
    }

    if visited.contains(task_name) {
        return Ok(());
    }

    let task = config
        .tasks
        .get(task_name)
        .ok_or_else(|| ConfigError::TaskNotFound(task_name.to_string()))?;

    stack.push(task_name);
    for sub_task in &task.tasks {
        check_task_cycle(config, sub_task, visited, stack)?;
    }
    stack.pop();
    visited.insert(task_name);

    Ok(())
}
