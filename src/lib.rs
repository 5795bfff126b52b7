//! Tasklane - named tasks, composed tasks and before-hooks
//!
//! A [`TaskRunner`] maps task names to actions. Tasks can be composed into
//! higher-level tasks, and before-hooks can observe or rewrite the arguments
//! of an invocation before the task runs. Tasks can be registered in code or
//! declared in a `tasklane.yml` file and loaded through [`config::ConfigExtension`].

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use error::{Result, TaskError};
pub use runner::{
    Action, Arguments, BeforeHook, BeforeTaskContext, Logger, TaskContext, TaskRunner,
    TaskRunnerExtension, Value,
};

/// Current version of Tasklane
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
