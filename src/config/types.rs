//! Core configuration types
//!
//! This module defines the data structures that represent a tasklane.yml configuration file.

use crate::runner::Arguments;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Application name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Application usage description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Tasks defined in the configuration
    #[serde(default)]
    pub tasks: BTreeMap<String, Task>,

    /// Before-hooks per task name, applied in listed order
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub before: BTreeMap<String, Vec<Hook>>,

    /// Global interpreter to use for commands (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,
}

/// A task definition
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Task {
    /// Usage description for help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Longer description for help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether this task is private (hidden from help)
    #[serde(default)]
    pub private: bool,

    /// Whether this task should run quietly
    #[serde(default)]
    pub quiet: bool,

    /// Commands to execute
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_commands"
    )]
    pub run: Vec<Command>,

    /// Tasks this task is composed of
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_task_names"
    )]
    pub tasks: Vec<String>,

    /// Include another file as task definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

/// A command to execute
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Command {
    /// Simple string command
    Simple(String),

    /// Complex command with additional options
    Complex(CommandDetail),
}

/// Detailed command specification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandDetail {
    /// The command to execute
    pub exec: String,

    /// What to print when running (defaults to exec)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print: Option<String>,

    /// Whether to suppress the echo
    #[serde(default)]
    pub quiet: bool,

    /// Working directory, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

/// A before-hook; exactly one field is expected
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Hook {
    /// Fill in missing arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Arguments>,

    /// Overwrite arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<Arguments>,

    /// Replace the whole argument mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<Arguments>,

    /// Remove arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unset: Option<Vec<String>>,
}

/// Custom deserializer for commands that handles both single values and arrays
fn deserialize_commands<'de, D>(deserializer: D) -> Result<Vec<Command>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        // Single string or complex command
        Value::String(s) => Ok(vec![Command::Simple(s)]),
        Value::Mapping(_) => {
            let cmd = Command::deserialize(value).map_err(D::Error::custom)?;
            Ok(vec![cmd])
        }
        // Array of commands
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| Command::deserialize(item).map_err(D::Error::custom))
            .collect(),
        // Null or not present
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("run must be a string, object, or array")),
    }
}

/// Custom deserializer for task names that handles both a single name and arrays
fn deserialize_task_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(s) => Ok(vec![s]),
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(D::Error::custom("tasks must list task names")),
            })
            .collect(),
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("tasks must be a task name or array of names")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_simple_config() {
        let yaml = r#"
tasks:
  hello:
    usage: Say hello
    run: echo "hello"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tasks.len(), 1);
        assert_eq!(config.tasks["hello"].run.len(), 1);
    }

    #[test]
    fn test_deserialize_command_forms() {
        let yaml = r#"
tasks:
  build:
    run:
      - cargo build
      - exec: cargo build --release
        print: building release
        quiet: true
        dir: crates
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let run = &config.tasks["build"].run;
        assert_eq!(run.len(), 2);
        match &run[1] {
            Command::Complex(detail) => {
                assert_eq!(detail.print.as_deref(), Some("building release"));
                assert!(detail.quiet);
                assert_eq!(detail.dir.as_deref(), Some("crates"));
            }
            other => panic!("expected complex command, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_composed_task() {
        let yaml = r#"
tasks:
  all:
    tasks: [build, test]
  ci:
    tasks: all
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tasks["all"].tasks, vec!["build", "test"]);
        assert_eq!(config.tasks["ci"].tasks, vec!["all"]);
    }

    #[test]
    fn test_deserialize_hooks() {
        let yaml = r#"
before:
  build:
    - default:
        profile: ""
    - set:
        profile: --release
    - unset: [secret]
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let hooks = &config.before["build"];
        assert_eq!(hooks.len(), 3);
        assert!(hooks[0].default.is_some());
        assert_eq!(
            hooks[1].set.as_ref().and_then(|a| a.get_str("profile")),
            Some("--release")
        );
        assert_eq!(hooks[2].unset, Some(vec!["secret".to_string()]));
    }

    #[test]
    fn test_rejects_non_string_task_names() {
        let yaml = r#"
tasks:
  all:
    tasks: [1, 2]
"#;
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }
}
