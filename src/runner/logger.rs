//! Logging capability handed to tasks
//!
//! The runner never inspects a logger; it only forwards it to tasks through
//! their context and reports its own progress at debug level.

use crate::runner::Arguments;
use colored::Colorize;
use std::fmt;
use std::sync::Mutex;

/// Severity of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        };
        f.write_str(label)
    }
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Verbosity {
    /// Whether a message of `level` is shown at this verbosity
    pub fn allows(self, level: Level) -> bool {
        let required = match level {
            Level::Error | Level::Warn => Verbosity::Quiet,
            Level::Info => Verbosity::Normal,
            Level::Debug => Verbosity::Verbose,
        };
        self >= required
    }
}

/// Leveled message sink
pub trait Logger {
    /// Write `message` with structured `context`
    fn log(&self, level: Level, message: &str, context: &Arguments);

    fn error(&self, message: &str) {
        self.log(Level::Error, message, &Arguments::new());
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message, &Arguments::new());
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message, &Arguments::new());
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message, &Arguments::new());
    }
}

/// Writes `[LEVEL] message key=value` lines to stderr
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    verbosity: Verbosity,
}

impl ConsoleLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        ConsoleLogger { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(Verbosity::Normal)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, message: &str, context: &Arguments) {
        if !self.verbosity.allows(level) {
            return;
        }

        let prefix = format!("[{}]", level);
        let prefix = match level {
            Level::Error => prefix.red().bold(),
            Level::Warn => prefix.yellow(),
            Level::Info => prefix.green(),
            Level::Debug => prefix.dimmed(),
        };

        let mut line = format!("{} {}", prefix, message);
        for (key, value) in context {
            line.push_str(&format!(" {}={}", key, super::render_value(value)));
        }
        eprintln!("{}", line);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: Level, _message: &str, _context: &Arguments) {}
}

/// A message captured by [`MemoryLogger`]
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub context: Arguments,
}

/// Keeps every message in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured records
    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Captured messages at `level`
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, message: &str, context: &Arguments) {
        let record = LogRecord {
            level,
            message: message.to_string(),
            context: context.clone(),
        };
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
