//! Error types for Tasklane

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Tasklane operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Main error type for Tasklane
///
/// Errors returned by actions and before-hooks travel through
/// [`TaskRunner::invoke`](crate::TaskRunner::invoke) unchanged.
#[derive(Error, Debug)]
pub enum TaskError {
    /// No action is registered under the requested name
    #[error("Task '{0}' is not defined")]
    TaskNotDefined(String),

    /// A declared task could not be turned into an action
    #[error("Unsupported action shape for task '{task}': {reason}")]
    UnsupportedCallableShape { task: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Variable interpolation errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failure raised by a user-supplied action or hook
    #[error(transparent)]
    Action(#[from] anyhow::Error),
}

/// Task registry lookup errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Undefined task '{0}'")]
    UndefinedTask(String),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Task '{0}' is not defined")]
    TaskNotFound(String),

    #[error("Circular composition detected: {0}")]
    CircularDependency(String),

    #[error("Failed to include file '{path}': {error}")]
    IncludeFile { path: PathBuf, error: String },
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command in task '{task}' failed with exit code {code:?}")]
    CommandFailed { task: String, code: Option<i32> },

    #[error("Failed to start '{command}': {error}")]
    Spawn { command: String, error: String },
}

/// Variable interpolation errors
#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),

    #[error("Recursive interpolation detected")]
    RecursiveInterpolation,
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;

impl TaskError {
    /// Name of the missing task, if this is a `TaskNotDefined` error
    pub fn undefined_task(&self) -> Option<&str> {
        match self {
            TaskError::TaskNotDefined(name) => Some(name),
            _ => None,
        }
    }
}
