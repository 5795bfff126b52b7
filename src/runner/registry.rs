//! Task storage and lookup

use crate::error::RegistryError;
use crate::runner::Action;
use std::collections::HashMap;

/// Mapping from task name to action
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Action>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `action` under `name`, replacing any previous action
    pub fn add(&mut self, name: impl Into<String>, action: Action) {
        self.tasks.insert(name.into(), action);
    }

    /// Look up the action registered under `name`
    pub fn find(&self, name: &str) -> Result<&Action, RegistryError> {
        self.tasks
            .get(name)
            .ok_or_else(|| RegistryError::UndefinedTask(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tasks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Read-only view of the tasks known to a runner
#[derive(Debug, Clone, Copy)]
pub struct TaskList<'a> {
    registry: &'a TaskRegistry,
}

impl<'a> TaskList<'a> {
    pub fn new(registry: &'a TaskRegistry) -> Self {
        TaskList { registry }
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.registry.names()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
