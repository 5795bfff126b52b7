//! Task registration and invocation engine
//!
//! This module holds the task registry, before-hooks, the invocation
//! contexts and the runner that ties them together, plus the shell command
//! actions used by declared tasks.

pub mod action;
pub mod arguments;
pub mod command;
pub mod context;
pub mod hooks;
pub mod interpolate;
pub mod invoker;
pub mod logger;
pub mod registry;
pub mod task;
pub mod task_runner;

/// Value type for arguments and task results
pub use serde_yaml::Value;

// Re-export main types
pub use action::*;
pub use arguments::*;
pub use command::*;
pub use context::*;
pub use hooks::*;
pub use interpolate::*;
pub use invoker::*;
pub use logger::*;
pub use registry::*;
pub use task::*;
pub use task_runner::*;
