//! Command execution
//!
//! This module runs the shell commands of declared tasks.

use crate::config;
use crate::error::{ExecutionError, Result};
use crate::runner::{interpolate, interpolate_strict, TaskContext};
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};

/// Interpreter and working directory shared by declared commands
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    /// Interpreter and its leading arguments, e.g. `["sh", "-c"]`
    interpreter: Vec<String>,

    /// Directory commands run in
    working_dir: PathBuf,
}

impl Shell {
    pub fn new(working_dir: PathBuf) -> Self {
        Shell {
            interpreter: vec!["sh".to_string(), "-c".to_string()],
            working_dir,
        }
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        if !interpreter.is_empty() {
            self.interpreter = interpreter;
        }
        self
    }

    pub fn interpreter(&self) -> &[String] {
        &self.interpreter
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn build(&self, exec: &str) -> Result<StdCommand> {
        let (program, args) = self
            .interpreter
            .split_first()
            .ok_or_else(|| ExecutionError::Spawn {
                command: exec.to_string(),
                error: "no interpreter configured".to_string(),
            })?;

        let mut command = StdCommand::new(program);
        command.args(args);
        command.arg(exec);
        Ok(command)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

/// Runtime representation of a command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Simple command string
    Simple(String),

    /// Command with its own echo text, quietness and directory
    Complex {
        exec: String,
        print: String,
        quiet: bool,
        dir: Option<String>,
    },
}

impl Command {
    /// Create from config
    pub fn from_config(config: config::Command) -> Self {
        match config {
            config::Command::Simple(cmd) => Command::Simple(cmd),
            config::Command::Complex(detail) => Command::Complex {
                print: detail.print.clone().unwrap_or_else(|| detail.exec.clone()),
                exec: detail.exec,
                quiet: detail.quiet,
                dir: detail.dir,
            },
        }
    }

    /// Get the command to execute
    pub fn exec(&self) -> &str {
        match self {
            Command::Simple(cmd) => cmd,
            Command::Complex { exec, .. } => exec,
        }
    }

    /// Get what to print
    pub fn print(&self) -> &str {
        match self {
            Command::Simple(cmd) => cmd,
            Command::Complex { print, .. } => print,
        }
    }

    pub fn is_quiet(&self) -> bool {
        match self {
            Command::Simple(_) => false,
            Command::Complex { quiet, .. } => *quiet,
        }
    }

    pub fn dir(&self) -> Option<&str> {
        match self {
            Command::Simple(_) => None,
            Command::Complex { dir, .. } => dir.as_deref(),
        }
    }
}

/// Run `cmd` for the task in `ctx`
///
/// `${name}` references are filled from the task arguments and every
/// argument is exported to the child's environment. Output is inherited.
pub fn execute_command(
    cmd: &Command,
    ctx: &TaskContext<'_>,
    shell: &Shell,
    quiet: bool,
) -> Result<()> {
    let arguments = ctx.arguments();
    let exec_str = interpolate(cmd.exec(), arguments)?;

    if !quiet && !cmd.is_quiet() {
        let print_str = interpolate(cmd.print(), arguments).unwrap_or_else(|_| cmd.print().to_string());
        ctx.logger().info(&format!("[RUN] {}", print_str));
    }

    let working_dir = match cmd.dir() {
        Some(dir) => shell.working_dir.join(interpolate_strict(dir, arguments)?),
        None => shell.working_dir.clone(),
    };

    let mut command = shell.build(&exec_str)?;
    command
        .current_dir(&working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .envs(arguments.to_vars());

    let status = command.status().map_err(|e| ExecutionError::Spawn {
        command: exec_str.clone(),
        error: e.to_string(),
    })?;

    if !status.success() {
        return Err(ExecutionError::CommandFailed {
            task: ctx.task().to_string(),
            code: status.code(),
        }
        .into());
    }

    Ok(())
}
